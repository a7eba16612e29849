//! Grid geometry builders.
//!
//! A grid is parameterized by an origin, outer width/height and an inner
//! split height; six anchor vertices are derived once and every further
//! shape is an affine offset from them. Builders are stateless: each call
//! returns a fresh layout snapshot for a given selection date.

pub mod month;
pub mod week;

use crate::models::geometry::{PathCommand, Region, TextNode, Triangle, Vertex};

/// Anchor vertices of a grid: outer corners `a`-`d` and the inner split
/// line `e`-`f` separating the header band from the cell area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
    pub d: Vertex,
    pub e: Vertex,
    pub f: Vertex,
    cell_width: f32,
}

impl GridFrame {
    pub fn new(origin: Vertex, width: f32, height: f32, cell_width: f32, header_height: f32) -> Self {
        Self {
            a: origin,
            b: origin.offset(width, 0.0),
            c: origin.offset(width, height),
            d: origin.offset(0.0, height),
            e: origin.offset(0.0, header_height),
            f: origin.offset(width, header_height),
            cell_width,
        }
    }

    /// Top and bottom frame edges, as a stroke path.
    pub fn frame_path(&self) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(self.a),
            PathCommand::LineTo(self.b),
            PathCommand::MoveTo(self.c),
            PathCommand::LineTo(self.d),
        ]
    }

    /// Weekday initials along the header band, one per column.
    pub fn day_initial_nodes(&self, labels: &[String]) -> Vec<TextNode> {
        let w = self.cell_width;
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                TextNode::new(
                    self.e.offset(w * (0.475 + i as f32), -w * 0.25),
                    label.clone(),
                )
            })
            .collect()
    }
}

/// Navigation arrow: an isoceles triangle pointing left (`direction` = -1)
/// or right (`direction` = 1) from vertex `v`.
pub(crate) fn arrow_region(v: Vertex, direction: f32, size: f32) -> Region {
    Region::Triangle(Triangle::new(
        v,
        v.offset(0.0, 2.0 * size),
        v.offset(direction * size, size),
    ))
}
