//! Vector primitives shared by rendering and hit-testing.
//!
//! A [`Region`] is a closed outline that can be lowered to path commands for
//! a drawing layer and queried for point containment. Both uses go through
//! the same coordinates, so what is painted is exactly what is clickable.

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// This vertex translated by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One step of a region outline, in drawing-layer terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Vertex),
    LineTo(Vertex),
    QuadTo { control: Vertex, to: Vertex },
    Close,
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vertex,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(origin: Vertex, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Vertex) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }

    fn outline(&self) -> Vec<PathCommand> {
        let o = self.origin;
        vec![
            PathCommand::MoveTo(o),
            PathCommand::LineTo(o.offset(self.width, 0.0)),
            PathCommand::LineTo(o.offset(self.width, self.height)),
            PathCommand::LineTo(o.offset(0.0, self.height)),
            PathCommand::Close,
        ]
    }
}

/// Triangle, used for the month navigation arrows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    pub fn contains(&self, p: Vertex) -> bool {
        // Half-plane sign tests; containment requires all three edges to
        // agree (either orientation).
        let sign = |a: Vertex, b: Vertex| (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y);
        let d1 = sign(self.a, self.b);
        let d2 = sign(self.b, self.c);
        let d3 = sign(self.c, self.a);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    fn outline(&self) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(self.a),
            PathCommand::LineTo(self.b),
            PathCommand::LineTo(self.c),
            PathCommand::Close,
        ]
    }
}

/// Rounded rectangle built from straight edges and quadratic corner curves.
///
/// `corner` is the lower end of the top-left corner curve; `width` and
/// `height` are the straight-edge lengths, `radius` the curve extent. The
/// outer bounding box is therefore `(width + 2*radius) x (height + 2*radius)`
/// with its top-left at `(corner.x, corner.y - radius)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub corner: Vertex,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    pub fn new(corner: Vertex, width: f32, height: f32, radius: f32) -> Self {
        Self {
            corner,
            width,
            height,
            radius,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.corner.offset(0.0, -self.radius),
            self.width + 2.0 * self.radius,
            self.height + 2.0 * self.radius,
        )
    }

    pub fn contains(&self, p: Vertex) -> bool {
        let bb = self.bounds();
        if !bb.contains(p) {
            return false;
        }
        let eps = self.radius;
        if eps <= 0.0 {
            return true;
        }
        // Distances from each outer corner, normalized to the curve extent.
        // A quadratic corner with control at the outer corner satisfies
        // sqrt(u) + sqrt(v) = 1 on the curve; the interior side is >= 1.
        let corners = [
            bb.origin,
            bb.origin.offset(bb.width, 0.0),
            bb.origin.offset(bb.width, bb.height),
            bb.origin.offset(0.0, bb.height),
        ];
        corners.iter().all(|o| {
            let u = (p.x - o.x).abs() / eps;
            let v = (p.y - o.y).abs() / eps;
            u >= 1.0 || v >= 1.0 || u.sqrt() + v.sqrt() >= 1.0
        })
    }

    fn outline(&self) -> Vec<PathCommand> {
        let eps = self.radius;
        let a_bot = self.corner;
        let a_mid = a_bot.offset(0.0, -eps);
        let a_top = a_bot.offset(eps, -eps);

        let b_top = a_top.offset(self.width, 0.0);
        let b_mid = b_top.offset(eps, 0.0);
        let b_bot = b_top.offset(eps, eps);

        let c_top = b_bot.offset(0.0, self.height);
        let c_mid = c_top.offset(0.0, eps);
        let c_bot = c_top.offset(-eps, eps);

        let d_bot = c_bot.offset(-self.width, 0.0);
        let d_mid = d_bot.offset(-eps, 0.0);
        let d_top = d_bot.offset(-eps, -eps);

        vec![
            PathCommand::MoveTo(a_bot),
            PathCommand::QuadTo { control: a_mid, to: a_top },
            PathCommand::LineTo(b_top),
            PathCommand::QuadTo { control: b_mid, to: b_bot },
            PathCommand::LineTo(c_top),
            PathCommand::QuadTo { control: c_mid, to: c_bot },
            PathCommand::LineTo(d_bot),
            PathCommand::QuadTo { control: d_mid, to: d_top },
            PathCommand::Close,
        ]
    }
}

/// A closed outline usable both for painting and point containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Region {
    Rect(Rect),
    Triangle(Triangle),
    Rounded(RoundedRect),
}

impl Region {
    pub fn contains(&self, p: Vertex) -> bool {
        match self {
            Region::Rect(r) => r.contains(p),
            Region::Triangle(t) => t.contains(p),
            Region::Rounded(r) => r.contains(p),
        }
    }

    /// Lower the outline to path commands for the drawing layer.
    pub fn outline(&self) -> Vec<PathCommand> {
        match self {
            Region::Rect(r) => r.outline(),
            Region::Triangle(t) => t.outline(),
            Region::Rounded(r) => r.outline(),
        }
    }
}

/// A positioned piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub vertex: Vertex,
    pub text: String,
}

impl TextNode {
    pub fn new(vertex: Vertex, text: impl Into<String>) -> Self {
        Self {
            vertex,
            text: text.into(),
        }
    }
}

/// A text node whose display text may be a truncation; `long_text` carries
/// the full form revealed on hover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTextNode {
    pub vertex: Vertex,
    pub text: String,
    pub long_text: Option<String>,
}

impl LongTextNode {
    pub fn new(vertex: Vertex, text: impl Into<String>, long_text: Option<String>) -> Self {
        Self {
            vertex,
            text: text.into(),
            long_text,
        }
    }

    /// The display form as a plain node, for draw-op emission.
    pub fn display(&self) -> TextNode {
        TextNode::new(self.vertex, self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(Vertex::new(10.0, 10.0), 20.0, 5.0);
        assert!(r.contains(Vertex::new(10.0, 10.0)));
        assert!(r.contains(Vertex::new(30.0, 15.0)));
        assert!(!r.contains(Vertex::new(30.1, 15.0)));
        assert!(!r.contains(Vertex::new(9.9, 10.0)));
    }

    #[test]
    fn test_triangle_contains() {
        // Right-pointing arrow shape
        let t = Triangle::new(
            Vertex::new(0.0, 0.0),
            Vertex::new(0.0, 20.0),
            Vertex::new(10.0, 10.0),
        );
        assert!(t.contains(Vertex::new(2.0, 10.0)));
        assert!(!t.contains(Vertex::new(9.0, 1.0)));
        assert!(!t.contains(Vertex::new(-1.0, 10.0)));
    }

    #[test]
    fn test_rounded_contains_core_and_corners() {
        let r = RoundedRect::new(Vertex::new(100.0, 100.0), 140.0, 30.0, 7.5);
        // Center of the block
        assert!(r.contains(Vertex::new(170.0, 115.0)));
        // Straight top edge midpoint, just inside
        assert!(r.contains(Vertex::new(170.0, 93.0)));
        // Outer corner of the bounding box is shaved off by the curve
        assert!(!r.contains(Vertex::new(100.1, 92.6)));
        // Inside the corner curve (diagonal towards the center)
        assert!(r.contains(Vertex::new(106.0, 98.0)));
        // Outside the bounding box
        assert!(!r.contains(Vertex::new(99.0, 115.0)));
        assert!(!r.contains(Vertex::new(256.0, 115.0)));
    }

    #[test]
    fn test_outline_shapes() {
        let rect = Region::Rect(Rect::new(Vertex::default(), 1.0, 1.0));
        assert_eq!(rect.outline().len(), 5);

        let rounded = Region::Rounded(RoundedRect::new(Vertex::default(), 4.0, 2.0, 1.0));
        let cmds = rounded.outline();
        assert_eq!(cmds.len(), 9);
        let quads = cmds
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count();
        assert_eq!(quads, 4);
    }
}
