// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout and run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HatpackError, Result};
use crate::types::{Margins, Orientation, PaperSize};

/// Grid layout settings, fixed for the whole run.
///
/// Lengths are millimetres, font sizes are points. Margins are given for the
/// portrait sheet; the renderer reinterprets them for landscape grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub columns: u32,
    pub rows: u32,
    pub orientation: Orientation,
    /// Print the per-page title line.
    pub show_title: bool,
    /// Draw the bold outline and full-bleed cutting lines around the grid.
    pub cut_grid: bool,
    pub paper_size: PaperSize,
    pub margins: Margins,
    pub font_size: u32,
    pub title_font_size: u32,
    pub title_height: f32,
    pub title_indent: f32,
    /// Minimum gap between a word and the grid lines of its cell.
    pub word_margin: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 12,
            orientation: Orientation::Landscape,
            show_title: true,
            cut_grid: true,
            paper_size: PaperSize::A4,
            margins: Margins::default(),
            font_size: 16,
            title_font_size: 9,
            title_height: 6.0,
            title_indent: 6.0,
            word_margin: 4.0,
        }
    }
}

impl PageSettings {
    /// Switch to the portrait preset: 3 columns by 16 rows.
    pub fn apply_portrait(&mut self) {
        self.orientation = Orientation::Portrait;
        self.columns = 3;
        self.rows = 16;
    }

    /// Words that fit on one page.
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&text)?;
        Ok(settings)
    }

    /// Check that the grid has cells and the margins leave room for it.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(HatpackError::InvalidSettings(format!(
                "grid must have at least one cell (got {} columns x {} rows)",
                self.columns, self.rows
            )));
        }

        let (w, h) = self.paper_size.dimensions_mm();
        let band = if self.show_title { self.title_height } else { 0.0 };
        let m = &self.margins;

        // The title band always eats into the sheet's long (portrait height)
        // axis: grid height for portrait, grid width for landscape.
        let across = w as f32 - m.left - m.right;
        let along = h as f32 - m.top - m.bottom - band;
        if across <= 0.0 || along <= 0.0 {
            return Err(HatpackError::InvalidSettings(format!(
                "margins leave no grid area on a {w}x{h} mm sheet"
            )));
        }
        if self.word_margin < 0.0 {
            return Err(HatpackError::InvalidSettings(
                "word margin must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Per-run options that are not part of the page layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Copies of the full packet in one document.
    pub copies: u32,
    /// Emit a cover sheet before the content pages.
    pub cover: bool,
    /// Directory the PDFs are written to.
    pub output_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            copies: 1,
            cover: false,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_landscape_four_by_twelve() {
        let settings = PageSettings::default();
        assert_eq!(settings.orientation, Orientation::Landscape);
        assert_eq!(settings.capacity(), 48);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn portrait_preset() {
        let mut settings = PageSettings::default();
        settings.apply_portrait();
        assert_eq!(settings.orientation, Orientation::Portrait);
        assert_eq!((settings.columns, settings.rows), (3, 16));
    }

    #[test]
    fn zero_rows_rejected() {
        let settings = PageSettings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(HatpackError::InvalidSettings(_))
        ));
    }

    #[test]
    fn oversized_margins_rejected() {
        let settings = PageSettings {
            margins: Margins::uniform(150.0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "columns": 5, "orientation": "portrait" }"#).unwrap();

        let settings = PageSettings::load_json(&path).unwrap();
        assert_eq!(settings.columns, 5);
        assert_eq!(settings.orientation, Orientation::Portrait);
        assert_eq!(settings.rows, 12);
        assert_eq!(settings.font_size, 16);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ columns: ").unwrap();

        assert!(matches!(
            PageSettings::load_json(&path),
            Err(HatpackError::Serialization(_))
        ));
    }
}
