// Layout settings module
// Grid metrics and fixed label sets, loadable from TOML

use serde::{Deserialize, Serialize};

/// Metrics and labels that parametrize both grids.
///
/// Defaults reproduce the reference deployment: a 1250x1250 canvas, a 50px
/// edge margin, 30px month cells and 160x50 scheduling cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Outer margin; the month grid sits at `(edge, edge)`, the scheduling
    /// grid at `(2 * edge, edge)`.
    pub edge: f32,
    /// Side length of one month-grid cell.
    pub month_cell: f32,
    /// Height of the month grid's header band (month name + weekday row).
    pub month_header: f32,
    /// Scheduling-grid cell size.
    pub slot_width: f32,
    pub slot_height: f32,
    /// Total inset of a rounded block inside its slot; the corner-curve
    /// radius is half of this.
    pub block_inset: f32,
    /// Navigation arrow size.
    pub arrow_size: f32,
    /// Labels longer than this are ellipsis-truncated on the block.
    pub max_label_chars: usize,
    /// Summary used for records synthesized from a selected slot.
    pub booking_summary: String,
    pub month_names: Vec<String>,
    pub day_initials: Vec<String>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            canvas_width: 1250.0,
            canvas_height: 1250.0,
            edge: 50.0,
            month_cell: 30.0,
            month_header: 60.0,
            slot_width: 160.0,
            slot_height: 50.0,
            block_inset: 15.0,
            arrow_size: 10.0,
            max_label_chars: 14,
            booking_summary: "Consulta Psicologica".to_string(),
            month_names: [
                "Enero",
                "Febrero",
                "Marzo",
                "Abril",
                "Mayo",
                "Junio",
                "Julio",
                "Agosto",
                "Septiembre",
                "Octubre",
                "Noviembre",
                "Diciembre",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            day_initials: ["L", "M", "W", "J", "V", "S", "D"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LayoutSettings {
    /// Load settings from TOML text; omitted keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Corner-curve radius of a rounded block.
    pub fn block_radius(&self) -> f32 {
        self.block_inset / 2.0
    }
}
