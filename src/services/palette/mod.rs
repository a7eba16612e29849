//! Style bundles attached to draw operations.
//!
//! Styles are opaque to the engine: it only pairs them with regions and
//! text nodes, the drawing layer interprets them.

use serde::{Deserialize, Serialize};

/// A color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

pub const BLACK: Rgba = Rgba::new(7, 36, 44);
pub const GREEN: Rgba = Rgba::new(136, 204, 0);
pub const MAGENTA: Rgba = Rgba::new(123, 135, 145);
pub const WHITE: Rgba = Rgba::new(145, 163, 176);
pub const LAVENDER: Rgba = Rgba::new(179, 102, 255);
pub const BLUE: Rgba = Rgba::new(43, 88, 96);
pub const BG: Rgba = Rgba::new(255, 255, 255);

/// Opaque render hints for one draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Rgba,
    pub size: Option<f32>,
    pub font: Option<String>,
}

impl Style {
    pub fn fill(color: Rgba) -> Self {
        Self {
            color,
            size: None,
            font: None,
        }
    }

    pub fn text(color: Rgba, size: f32) -> Self {
        Self {
            color,
            size: Some(size),
            font: None,
        }
    }

    pub fn mono(mut self) -> Self {
        self.font = Some("monospace".to_string());
        self
    }
}

/// Styles for the month grid's draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPalette {
    pub frame: Style,
    pub arrows: Style,
    pub selected_cell: Style,
    pub month_name: Style,
    pub selected_label: Style,
    pub labels: Style,
    pub initials: Style,
}

impl Default for MonthPalette {
    fn default() -> Self {
        Self {
            frame: Style::fill(WHITE.with_alpha(0.3)),
            arrows: Style::fill(BLACK.with_alpha(0.7)),
            selected_cell: Style::fill(LAVENDER),
            month_name: Style::text(MAGENTA, 14.0),
            selected_label: Style::text(BG, 12.0).mono(),
            labels: Style::text(BLACK.with_alpha(0.7), 12.0).mono(),
            initials: Style::text(BLACK.with_alpha(0.7), 12.0),
        }
    }
}

/// Styles for the scheduling grid's draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPalette {
    pub selected_day: Style,
    pub selected_block: Style,
    pub initials: Style,
    pub hours: Style,
    pub selected_label: Style,
    pub labels: Style,
    pub grid: Style,
}

impl Default for WeekPalette {
    fn default() -> Self {
        Self {
            selected_day: Style::fill(LAVENDER),
            selected_block: Style::fill(GREEN.with_alpha(0.75)),
            initials: Style::text(BLACK.with_alpha(0.7), 16.0),
            hours: Style::text(BLACK.with_alpha(0.5), 12.0).mono(),
            selected_label: Style::text(BG, 16.0).mono(),
            labels: Style::text(BLACK.with_alpha(0.7), 16.0).mono(),
            grid: Style::fill(WHITE.with_alpha(0.3)),
        }
    }
}

/// Styles for appointment blocks and the hover reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPalette {
    pub blocks: Style,
    pub labels: Style,
    pub hover_backdrop: Style,
    pub hover_text: Style,
}

impl Default for EventPalette {
    fn default() -> Self {
        Self {
            blocks: Style::fill(BLUE.with_alpha(0.75)),
            labels: Style::text(BG, 12.0),
            hover_backdrop: Style::fill(BG),
            hover_text: Style::text(BLACK, 10.0),
        }
    }
}
