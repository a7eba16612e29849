//! Hour-by-day scheduling grid: 84 slot cells, hour labels, a day-number
//! header with selector squares, and rounded blocks for highlights and
//! appointments.
//!
//! `date_to_vertex` is the single conversion point between time and pixel
//! space; rendering and hit-testing both go through it.

use chrono::NaiveDateTime;

use super::GridFrame;
use crate::models::geometry::{LongTextNode, Rect, Region, RoundedRect, TextNode, Vertex};
use crate::models::settings::LayoutSettings;
use crate::utils::date;

/// Stateless builder for the scheduling grid.
#[derive(Debug, Clone)]
pub struct WeekGrid {
    frame: GridFrame,
    slot_width: f32,
    slot_height: f32,
    block_inset: f32,
    /// Hour labels hang left of the split anchor by this offset.
    hour_label_offset: Vertex,
    /// Vertical pad between a cell's top edge and its block corner.
    block_pad: f32,
    day_labels: Vec<String>,
    cells: Vec<Region>,
}

/// Derived layout for one selection date.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub date: NaiveDateTime,
    /// Slot cell regions, row-major over the full grid.
    pub cells: Vec<Region>,
    /// Day-number nodes for the selection date's week.
    pub day_nodes: Vec<TextNode>,
    /// Selector squares behind the day numbers.
    pub day_squares: Vec<Region>,
    /// Column of the selected day.
    pub selected_day: usize,
    /// Rounded highlight at the selected slot.
    pub selected_block: Region,
    pub hour_nodes: Vec<TextNode>,
    pub day_initials: Vec<TextNode>,
}

impl WeekGrid {
    pub fn new(settings: &LayoutSettings) -> Self {
        let origin = Vertex::new(2.0 * settings.edge, settings.edge);
        let width = date::WEEK_DAYS as f32 * settings.slot_width;
        let rows = date::MAIN_CELLS / date::WEEK_DAYS;
        let height = (rows + 1) as f32 * settings.slot_height;
        let frame = GridFrame::new(
            origin,
            width,
            height,
            settings.slot_width,
            settings.slot_height,
        );

        let cells = (0..date::MAIN_CELLS)
            .map(|i| {
                let col = (i % date::WEEK_DAYS) as f32;
                let row = (i / date::WEEK_DAYS) as f32;
                Region::Rect(Rect::new(
                    frame.e.offset(col * settings.slot_width, row * settings.slot_height),
                    settings.slot_width,
                    settings.slot_height,
                ))
            })
            .collect();

        Self {
            frame,
            slot_width: settings.slot_width,
            slot_height: settings.slot_height,
            block_inset: settings.block_inset,
            hour_label_offset: Vertex::new(-0.9 * settings.edge, 0.1 * settings.slot_height),
            block_pad: 0.1 * settings.slot_height,
            day_labels: settings.day_initials.clone(),
            cells,
        }
    }

    pub fn frame(&self) -> &GridFrame {
        &self.frame
    }

    /// Slot cell regions; date-independent.
    pub fn cells(&self) -> &[Region] {
        &self.cells
    }

    /// Top-left block corner of `date`'s slot.
    pub fn date_to_vertex(&self, datetime: NaiveDateTime) -> Vertex {
        let idx = date::datetime_to_main_index(datetime);
        let col = (idx % date::WEEK_DAYS) as f32;
        let row = (idx / date::WEEK_DAYS) as f32;
        self.frame
            .e
            .offset(col * self.slot_width, row * self.slot_height + self.block_pad)
    }

    /// Rounded block inset into a slot, anchored at `corner`.
    pub fn rounded_block(&self, corner: Vertex) -> Region {
        Region::Rounded(RoundedRect::new(
            corner,
            self.slot_width - self.block_inset,
            self.slot_height - self.block_inset,
            self.block_inset / 2.0,
        ))
    }

    /// Rounded block at `date`'s slot.
    pub fn date_to_block(&self, datetime: NaiveDateTime) -> Region {
        self.rounded_block(self.date_to_vertex(datetime))
    }

    /// Block region plus a label node offset into it; the engine's display
    /// pair for one appointment.
    pub fn date_to_block_and_node(
        &self,
        datetime: NaiveDateTime,
        text: impl Into<String>,
        long_text: Option<String>,
        offset: Vertex,
    ) -> (LongTextNode, Region) {
        let v = self.date_to_vertex(datetime);
        let node = LongTextNode::new(v.offset(offset.x, offset.y), text, long_text);
        (node, self.rounded_block(v))
    }

    /// Hour labels down the left edge, one per row boundary.
    fn hour_nodes(&self) -> Vec<TextNode> {
        let rows = date::MAIN_CELLS / date::WEEK_DAYS;
        (0..=rows)
            .map(|i| {
                TextNode::new(
                    self.frame.e.offset(
                        self.hour_label_offset.x,
                        i as f32 * self.slot_height + self.hour_label_offset.y,
                    ),
                    format!("{}.00", date::DAY_START_HOUR + i as u32),
                )
            })
            .collect()
    }

    /// Build the full layout for `date`'s week.
    pub fn snapshot(&self, datetime: NaiveDateTime) -> WeekLayout {
        let e = self.frame.e;
        let h = self.slot_height;

        let day_nodes: Vec<TextNode> = date::days_of_week(datetime)
            .iter()
            .enumerate()
            .map(|(i, day)| {
                TextNode::new(
                    e.offset(self.slot_width * (0.45 + i as f32), -0.3 * h),
                    day.to_string(),
                )
            })
            .collect();

        let day_squares: Vec<Region> = day_nodes
            .iter()
            .map(|node| {
                Region::Rect(Rect::new(
                    node.vertex.offset(-0.07 * h, -0.35 * h),
                    0.5 * h,
                    0.5 * h,
                ))
            })
            .collect();

        WeekLayout {
            date: datetime,
            cells: self.cells.clone(),
            day_nodes,
            day_squares,
            selected_day: date::day_of_week(datetime),
            selected_block: self.date_to_block(datetime),
            hour_nodes: self.hour_nodes(),
            day_initials: self.frame.day_initial_nodes(&self.day_labels),
        }
    }
}

impl WeekLayout {
    /// Selector square of the selected day.
    pub fn selected_square(&self) -> &Region {
        &self.day_squares[self.selected_day]
    }

    /// Day-number node of the selected day.
    pub fn selected_node(&self) -> &TextNode {
        &self.day_nodes[self.selected_day]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn grid() -> WeekGrid {
        WeekGrid::new(&LayoutSettings::default())
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_cell_count_and_first_cell_anchor() {
        let grid = grid();
        assert_eq!(grid.cells().len(), date::MAIN_CELLS);
        let e = grid.frame().e;
        assert!(grid.cells()[0].contains(e.offset(1.0, 1.0)));
    }

    #[test]
    fn test_date_to_vertex_walks_columns_and_rows() {
        let grid = grid();
        // 2021-06-02 is a Wednesday: column 2. 10:00 is row 1.
        let v = grid.date_to_vertex(at(2, 10));
        let e = grid.frame().e;
        assert_eq!(v.x, e.x + 2.0 * 160.0);
        assert_eq!(v.y, e.y + 50.0 + 5.0);
    }

    #[test]
    fn test_block_and_cell_agree() {
        let grid = grid();
        let datetime = at(2, 13);
        let idx = date::datetime_to_main_index(datetime);
        let block = grid.date_to_block(datetime);
        // A point in the middle of the block is also inside its slot cell.
        let center = grid
            .date_to_vertex(datetime)
            .offset(70.0, 15.0);
        assert!(block.contains(center));
        assert!(grid.cells()[idx].contains(center));
    }

    #[test]
    fn test_snapshot_week_header() {
        let layout = grid().snapshot(at(2, 10));
        assert_eq!(layout.day_nodes.len(), date::WEEK_DAYS);
        // Week of June 2 2021 runs May 31 .. June 6.
        assert_eq!(layout.day_nodes[0].text, "31");
        assert_eq!(layout.day_nodes[6].text, "6");
        assert_eq!(layout.selected_day, 2);
        assert_eq!(layout.selected_node().text, "2");
    }

    #[test]
    fn test_hour_labels_cover_the_window() {
        let layout = grid().snapshot(at(2, 10));
        assert_eq!(layout.hour_nodes.len(), 13);
        assert_eq!(layout.hour_nodes[0].text, "9.00");
        assert_eq!(layout.hour_nodes[12].text, "21.00");
    }

    #[test]
    fn test_selected_block_tracks_the_date() {
        let layout = grid().snapshot(at(2, 13));
        let v = grid().date_to_vertex(at(2, 13));
        assert!(layout.selected_block.contains(v.offset(70.0, 15.0)));
    }
}
