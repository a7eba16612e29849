//! Draw-op composition and the per-grid layout cache.
//!
//! The op order inside each list is the compositing contract: later ops
//! visually overwrite earlier ones, which is what keeps highlights under
//! the grid line strokes. Reorder nothing here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::geometry::{LongTextNode, PathCommand, Rect, Region, TextNode, Vertex};
use crate::models::settings::LayoutSettings;
use crate::services::grid::month::MonthLayout;
use crate::services::grid::week::WeekLayout;
use crate::services::layout::{hover_reveal, EventBlocks};
use crate::services::palette::{EventPalette, MonthPalette, Style, WeekPalette};

/// One instruction for the drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Clear(Rect),
    Fill { region: Region, style: Style },
    Stroke { path: Vec<PathCommand>, style: Style },
    Text { node: TextNode, style: Style },
}

/// Caller-owned memo for a derived layout, keyed by the selection date.
///
/// The value is replaced as a whole on a key miss; equal dates (by value,
/// not reference) skip the rebuild.
#[derive(Debug, Default)]
pub struct LayoutCache<L> {
    key: Option<NaiveDateTime>,
    value: Option<L>,
}

impl<L> LayoutCache<L> {
    pub fn new() -> Self {
        Self {
            key: None,
            value: None,
        }
    }

    /// The cached layout for `date`, rebuilding via `build` when the date
    /// differs from the cached one.
    pub fn layout_for(&mut self, date: NaiveDateTime, build: impl FnOnce(NaiveDateTime) -> L) -> &L {
        if self.key != Some(date) {
            self.value = None;
            self.key = Some(date);
        }
        self.value.get_or_insert_with(|| {
            log::debug!("rebuilding layout for {}", date);
            build(date)
        })
    }
}

fn full_canvas(settings: &LayoutSettings) -> Rect {
    Rect::new(Vertex::default(), settings.canvas_width, settings.canvas_height)
}

/// Draw pass for the month grid.
pub fn month_ops(
    layout: &MonthLayout,
    frame_path: Vec<PathCommand>,
    palette: &MonthPalette,
    settings: &LayoutSettings,
) -> Vec<DrawOp> {
    let mut ops = vec![
        DrawOp::Clear(full_canvas(settings)),
        DrawOp::Stroke {
            path: frame_path,
            style: palette.frame.clone(),
        },
    ];
    for arrow in &layout.arrows {
        ops.push(DrawOp::Fill {
            region: *arrow,
            style: palette.arrows.clone(),
        });
    }
    ops.push(DrawOp::Fill {
        region: *layout.selected_cell(),
        style: palette.selected_cell.clone(),
    });
    ops.push(DrawOp::Text {
        node: layout.month_name.clone(),
        style: palette.month_name.clone(),
    });
    ops.push(DrawOp::Text {
        node: layout.selected_node().clone(),
        style: palette.selected_label.clone(),
    });
    for (i, node) in layout.nodes.iter().enumerate() {
        if i != layout.selected {
            ops.push(DrawOp::Text {
                node: node.clone(),
                style: palette.labels.clone(),
            });
        }
    }
    for node in &layout.day_initials {
        ops.push(DrawOp::Text {
            node: node.clone(),
            style: palette.initials.clone(),
        });
    }
    ops
}

/// Draw pass for the scheduling grid: clear, highlights, static labels,
/// day numbers, then grid strokes on top.
pub fn week_ops(layout: &WeekLayout, palette: &WeekPalette, settings: &LayoutSettings) -> Vec<DrawOp> {
    let mut ops = vec![
        DrawOp::Clear(full_canvas(settings)),
        DrawOp::Fill {
            region: *layout.selected_square(),
            style: palette.selected_day.clone(),
        },
        DrawOp::Fill {
            region: layout.selected_block,
            style: palette.selected_block.clone(),
        },
    ];
    for node in &layout.day_initials {
        ops.push(DrawOp::Text {
            node: node.clone(),
            style: palette.initials.clone(),
        });
    }
    for node in &layout.hour_nodes {
        ops.push(DrawOp::Text {
            node: node.clone(),
            style: palette.hours.clone(),
        });
    }
    ops.push(DrawOp::Text {
        node: layout.selected_node().clone(),
        style: palette.selected_label.clone(),
    });
    for (i, node) in layout.day_nodes.iter().enumerate() {
        if i != layout.selected_day {
            ops.push(DrawOp::Text {
                node: node.clone(),
                style: palette.labels.clone(),
            });
        }
    }
    for cell in &layout.cells {
        ops.push(DrawOp::Stroke {
            path: cell.outline(),
            style: palette.grid.clone(),
        });
    }
    ops
}

/// Draw pass for appointment blocks: all blocks first, labels after.
pub fn event_ops(blocks: &EventBlocks, palette: &EventPalette) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(blocks.paths.len() + blocks.nodes.len());
    for path in &blocks.paths {
        ops.push(DrawOp::Fill {
            region: *path,
            style: palette.blocks.clone(),
        });
    }
    for node in &blocks.nodes {
        ops.push(DrawOp::Text {
            node: node.display(),
            style: palette.labels.clone(),
        });
    }
    ops
}

/// Draw pass for the hover reveal of one truncated label; empty when the
/// node has no long form.
pub fn hover_ops(node: &LongTextNode, palette: &EventPalette) -> Vec<DrawOp> {
    match hover_reveal(node) {
        None => Vec::new(),
        Some((backdrop, text)) => vec![
            DrawOp::Fill {
                region: backdrop,
                style: palette.hover_backdrop.clone(),
            },
            DrawOp::Text {
                node: text,
                style: palette.hover_text.clone(),
            },
        ],
    }
}
