//! Month-overview grid: 6x7 day cells with adjacent-month padding,
//! navigation arrows and a month-name label.

use chrono::{Datelike, NaiveDateTime};

use super::{arrow_region, GridFrame};
use crate::models::geometry::{Rect, Region, TextNode, Vertex};
use crate::models::settings::LayoutSettings;
use crate::utils::date;

/// Stateless builder for the month grid.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    frame: GridFrame,
    cell: f32,
    arrow_size: f32,
    month_names: Vec<String>,
    day_labels: Vec<String>,
}

/// Derived layout for one selection date.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub date: NaiveDateTime,
    /// Day-number nodes, one per grid cell.
    pub nodes: Vec<TextNode>,
    /// Square cell regions backing each node.
    pub cells: Vec<Region>,
    /// Grid index of the selection date's day.
    pub selected: usize,
    /// Previous/next month navigation triangles, in click order.
    pub arrows: [Region; 2],
    pub month_name: TextNode,
    pub day_initials: Vec<TextNode>,
}

impl MonthGrid {
    pub fn new(settings: &LayoutSettings) -> Self {
        let origin = Vertex::new(settings.edge, settings.edge);
        let width = date::WEEK_DAYS as f32 * settings.month_cell;
        let height = 6.0 * settings.month_cell + settings.month_header;
        Self {
            frame: GridFrame::new(origin, width, height, settings.month_cell, settings.month_header),
            cell: settings.month_cell,
            arrow_size: settings.arrow_size,
            month_names: settings.month_names.clone(),
            day_labels: settings.day_initials.clone(),
        }
    }

    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    /// Navigation arrows tucked under the top-right anchor.
    fn arrows(&self) -> [Region; 2] {
        let size = self.arrow_size;
        let left = self.frame.b.offset(-size, size);
        let right = self.frame.b.offset(-size / 2.0, size);
        [arrow_region(left, -1.0, size), arrow_region(right, 1.0, size)]
    }

    fn month_name(&self, date: NaiveDateTime) -> TextNode {
        let name = self
            .month_names
            .get(date.month0() as usize)
            .cloned()
            .unwrap_or_default();
        TextNode::new(
            self.frame.a.offset(0.25 * self.cell, 0.75 * self.cell),
            name,
        )
    }

    /// Build the full layout for `date`'s month.
    pub fn snapshot(&self, date: NaiveDateTime) -> MonthLayout {
        let e = self.frame.e;
        let cell = self.cell;

        let nodes: Vec<TextNode> = date::days_of_month(date)
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let col = (i % date::WEEK_DAYS) as f32;
                let row = (i / date::WEEK_DAYS) as f32;
                TextNode::new(
                    e.offset(cell * (0.5 + col), cell * (0.5 + row)),
                    day.to_string(),
                )
            })
            .collect();

        let cells: Vec<Region> = nodes
            .iter()
            .map(|node| {
                Region::Rect(Rect::new(
                    node.vertex.offset(-0.15 * cell, -0.5 * cell),
                    0.75 * cell,
                    0.75 * cell,
                ))
            })
            .collect();

        MonthLayout {
            date,
            nodes,
            cells,
            selected: date::day_to_index(date),
            arrows: self.arrows(),
            month_name: self.month_name(date),
            day_initials: self.frame.day_initial_nodes(&self.day_labels),
        }
    }
}

impl MonthLayout {
    /// Cell region of the selected day.
    pub fn selected_cell(&self) -> &Region {
        &self.cells[self.selected]
    }

    /// Day-number node of the selected day.
    pub fn selected_node(&self) -> &TextNode {
        &self.nodes[self.selected]
    }
}
