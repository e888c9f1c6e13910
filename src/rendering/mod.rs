//! Rendering module: page geometry, paint commands and PDF output

pub mod layout;
pub mod metrics;
pub mod paint;
pub mod pdf;

use crate::Result;
use paint::PaintCommand;
use sha2::{Digest, Sha256};

pub use layout::{PageGeometry, Rect};
pub use paint::{Align, FontWeight, Rgb};

/// A finished single-page calendar: page size plus an ordered display list.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Outline stroke width in points
    pub line_width: f64,
    pub commands: Vec<PaintCommand>,
}

impl Document {
    pub fn empty(title: &str, width: f64, height: f64, line_width: f64) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            line_width,
            commands: Vec::new(),
        }
    }

    /// All text strings in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(PaintCommand::text)
    }

    /// Text commands whose box lies inside `area`
    pub fn texts_in(&self, area: Rect) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| {
                let r = c.rect();
                r.x >= area.x - 1e-9
                    && r.y >= area.y - 1e-9
                    && r.right() <= area.right() + 1e-9
                    && r.bottom() <= area.bottom() + 1e-9
            })
            .filter_map(PaintCommand::text)
            .collect()
    }

    /// Display list as pretty JSON, used for golden comparisons
    pub fn display_list_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }

    /// Hex SHA-256 of the display list
    pub fn digest(&self) -> Result<String> {
        let json = self.display_list_json()?;
        Ok(hex::encode(Sha256::digest(json.as_bytes())))
    }

    /// Single-page PDF bytes
    pub fn to_pdf(&self) -> Vec<u8> {
        pdf::write_pdf(self)
    }
}
