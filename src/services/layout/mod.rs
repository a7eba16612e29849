//! Appointment layout pipeline: split multi-slot records, collapse
//! same-slot collisions into one labeled block with an overflow counter,
//! then place the results as rounded blocks on the scheduling grid.

use chrono::NaiveDateTime;
use hashlink::LinkedHashMap;

use crate::models::appointment::Appointment;
use crate::models::geometry::{LongTextNode, Rect, Region, TextNode, Vertex};
use crate::models::settings::LayoutSettings;
use crate::services::grid::week::WeekGrid;
use crate::utils::date;

/// Horizontal pad of a block label inside its block.
const LABEL_PAD: f32 = 5.0;

/// Hover backdrop sizing: per-character width and line height.
const HOVER_CHAR_WIDTH: f32 = 10.0;
const HOVER_HEIGHT: f32 = 25.0;

/// One hour slot's collapsed appointments during grouping.
struct GroupedSlot {
    summary: String,
    /// Number of colliding records hidden behind the representative.
    hidden: u32,
}

/// Display-ready regions and labels for one week of appointments.
///
/// `long_paths`/`long_nodes` are the subset whose labels were truncated;
/// they back the hover affordance without re-filtering at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBlocks {
    pub paths: Vec<Region>,
    pub nodes: Vec<LongTextNode>,
    pub long_paths: Vec<Region>,
    pub long_nodes: Vec<LongTextNode>,
}

/// Replace every record longer than one block-time unit with consecutive
/// one-unit records sharing its summary; the original end time is dropped.
pub fn split_events(records: Vec<Appointment>) -> Vec<Appointment> {
    let mut result = Vec::with_capacity(records.len());
    for record in records {
        let units = record
            .duration_slots()
            .map(|d| d.ceil() as i64)
            .unwrap_or(1);
        if units <= 1 {
            result.push(record);
            continue;
        }
        for i in 0..units {
            result.push(Appointment {
                start: record.start + date::block_time() * i as i32,
                end: None,
                summary: record.summary.clone(),
            });
        }
    }
    result
}

/// Collapse records sharing a truncated-to-hour start. The first record
/// seen for a slot keeps its summary; later arrivals only bump the hidden
/// counter (first-wins policy, insertion-ordered).
fn group_events(records: Vec<Appointment>) -> LinkedHashMap<NaiveDateTime, GroupedSlot> {
    let mut slots: LinkedHashMap<NaiveDateTime, GroupedSlot> = LinkedHashMap::new();
    for record in records {
        let key = date::truncate_to_hour(record.start);
        match slots.get_mut(&key) {
            None => {
                slots.insert(
                    key,
                    GroupedSlot {
                        summary: record.summary,
                        hidden: 0,
                    },
                );
            }
            Some(slot) => slot.hidden += 1,
        }
    }
    slots
}

/// Flatten grouped slots back into one record per hour, formatting the
/// overflow suffix now that the counts are final.
fn expand_groups(slots: LinkedHashMap<NaiveDateTime, GroupedSlot>) -> Vec<Appointment> {
    slots
        .into_iter()
        .map(|(start, slot)| {
            let summary = if slot.hidden > 0 {
                format!("{} and {} more", slot.summary, slot.hidden)
            } else {
                slot.summary
            };
            Appointment {
                start,
                end: None,
                summary,
            }
        })
        .collect()
}

/// The full normalization pipeline: split, group, re-expand.
pub fn process_events(records: Vec<Appointment>) -> Vec<Appointment> {
    expand_groups(group_events(split_events(records)))
}

/// Records whose start falls inside `reference`'s week.
pub fn week_events(records: &[Appointment], reference: NaiveDateTime) -> Vec<Appointment> {
    let in_week = date::is_this_week(reference);
    records
        .iter()
        .filter(|r| in_week(r.start))
        .cloned()
        .collect()
}

/// Place normalized records on the scheduling grid as display pairs.
///
/// Labels over the configured threshold are ellipsis-truncated, with the
/// full summary retained as the node's long form. Records outside the
/// displayable hour window are dropped (and logged); they have no slot.
pub fn display_blocks(
    grid: &WeekGrid,
    records: &[Appointment],
    settings: &LayoutSettings,
) -> EventBlocks {
    let mut blocks = EventBlocks::default();
    for record in records {
        if !date::in_scheduling_window(record.start) {
            log::warn!(
                "dropping appointment '{}' at {}: outside the {}:00-{}:00 window",
                record.summary,
                record.start,
                date::DAY_START_HOUR,
                date::DAY_END_HOUR,
            );
            continue;
        }

        let is_long = record.summary.chars().count() > settings.max_label_chars;
        let text: String = if is_long {
            let head: String = record.summary.chars().take(settings.max_label_chars).collect();
            format!("{}...", head)
        } else {
            record.summary.clone()
        };
        let long_text = is_long.then(|| record.summary.clone());

        let (node, path) = grid.date_to_block_and_node(
            record.start,
            text,
            long_text,
            Vertex::new(LABEL_PAD, 0.0),
        );

        if is_long {
            blocks.long_paths.push(path);
            blocks.long_nodes.push(node.clone());
        }
        blocks.paths.push(path);
        blocks.nodes.push(node);
    }
    blocks
}

/// Scheduling-grid indices occupied by displayable records, for the
/// hit-test exclusion filter.
pub fn main_indices(records: &[Appointment]) -> Vec<usize> {
    records
        .iter()
        .filter(|r| date::in_scheduling_window(r.start))
        .map(|r| date::datetime_to_main_index(r.start))
        .collect()
}

/// Hover reveal for a truncated label: a backdrop sized to the full text
/// plus a node carrying it. `None` when the node has no long form.
pub fn hover_reveal(node: &LongTextNode) -> Option<(Region, TextNode)> {
    let long = node.long_text.as_ref()?;
    let backdrop = Region::Rect(Rect::new(
        node.vertex,
        HOVER_CHAR_WIDTH * long.chars().count() as f32,
        HOVER_HEIGHT,
    ));
    Some((backdrop, TextNode::new(node.vertex, long.clone())))
}
