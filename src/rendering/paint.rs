/// Paint command set emitted by the calendar renderer

use super::layout::Rect;
use serde::{Deserialize, Serialize};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const LIGHT_BLUE: Self = Self(173, 216, 230);
    pub const PEACH: Self = Self(255, 218, 185);

    /// Components scaled to `0.0..=1.0` for PDF colour operators
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Single draw primitive. Coordinates are layout space: points from the
/// top-left corner of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    /// Filled rectangle with a stroked outline
    FillRect { rect: Rect, fill: Rgb },
    /// Outline only
    StrokeRect { rect: Rect },
    /// One line of text, vertically centred in `rect` and aligned inside it
    Text {
        rect: Rect,
        text: String,
        size: f64,
        weight: FontWeight,
        align: Align,
    },
}

impl PaintCommand {
    pub fn rect(&self) -> Rect {
        match self {
            PaintCommand::FillRect { rect, .. }
            | PaintCommand::StrokeRect { rect }
            | PaintCommand::Text { rect, .. } => *rect,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PaintCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
