// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core geometry types: paper sizes, orientation and margins.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// PDF user-space points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height), portrait.
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A3 => (297, 420),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Tabloid => (279, 432),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }

    /// Dimensions in points (width, height), portrait.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w as f32), mm_to_pt(h as f32))
    }
}

impl FromStr for PaperSize {
    type Err = String;

    /// Accepts a size name (`a4`, `letter`, ...) or `WIDTHxHEIGHT` in millimetres.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "a4" => return Ok(Self::A4),
            "a3" => return Ok(Self::A3),
            "a5" => return Ok(Self::A5),
            "letter" => return Ok(Self::Letter),
            "legal" => return Ok(Self::Legal),
            "tabloid" => return Ok(Self::Tabloid),
            _ => {}
        }

        let (w, h) = name
            .split_once('x')
            .ok_or_else(|| format!("unknown paper size '{s}'"))?;
        let width_mm: u32 = w
            .trim()
            .parse()
            .map_err(|_| format!("invalid paper width in '{s}'"))?;
        let height_mm: u32 = h
            .trim()
            .parse()
            .map_err(|_| format!("invalid paper height in '{s}'"))?;
        if width_mm == 0 || height_mm == 0 {
            return Err(format!("paper size '{s}' has a zero dimension"));
        }
        Ok(Self::Custom {
            width_mm,
            height_mm,
        })
    }
}

/// Page orientation of the word grid.
///
/// The sheet itself is always portrait; landscape grids are drawn rotated
/// by a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Page margins in millimetres, expressed for the portrait sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Margins {
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            left: mm,
            bottom: mm,
            right: mm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_paper_sizes_parse() {
        assert_eq!("A4".parse::<PaperSize>().unwrap(), PaperSize::A4);
        assert_eq!(" letter ".parse::<PaperSize>().unwrap(), PaperSize::Letter);
    }

    #[test]
    fn custom_paper_size_parses() {
        assert_eq!(
            "100x150".parse::<PaperSize>().unwrap(),
            PaperSize::Custom {
                width_mm: 100,
                height_mm: 150
            }
        );
        assert!("0x150".parse::<PaperSize>().is_err());
        assert!("b5".parse::<PaperSize>().is_err());
    }

    #[test]
    fn a4_in_points() {
        let (w, h) = PaperSize::A4.dimensions_pt();
        assert!((w - 595.276).abs() < 0.01);
        assert!((h - 841.89).abs() < 0.01);
    }
}
