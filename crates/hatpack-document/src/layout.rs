// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page geometry: logical page frames, grid cells and word font fitting.
//
// Layout happens in one logical frame per page. Portrait frames are the sheet
// itself; landscape frames are the sheet turned a quarter turn, with the
// portrait margins renamed to match (portrait top becomes landscape right,
// left becomes top, bottom becomes left, right becomes bottom). A single
// matrix maps the logical frame back onto the sheet.

use hatpack_core::config::PageSettings;
use hatpack_core::types::{Orientation, mm_to_pt};

use crate::canvas::{Matrix, TextMetrics};

/// Line widths of the cut grid, in millimetres.
pub const OUTLINE_WIDTH_MM: f32 = 0.4;
pub const CUT_LINE_WIDTH_MM: f32 = 0.3;
pub const GRID_LINE_WIDTH_MM: f32 = 0.2;

/// Logical drawing frame of one content page. All values in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub orientation: Orientation,
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Logical width and height (swapped relative to the sheet in landscape).
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_left: f32,
    pub margin_bottom: f32,
    pub margin_right: f32,
}

impl PageFrame {
    pub fn new(settings: &PageSettings) -> Self {
        let (sheet_width, sheet_height) = settings.paper_size.dimensions_pt();
        let m = &settings.margins;
        let (top, left, bottom, right) = (
            mm_to_pt(m.top),
            mm_to_pt(m.left),
            mm_to_pt(m.bottom),
            mm_to_pt(m.right),
        );

        match settings.orientation {
            Orientation::Portrait => Self {
                orientation: Orientation::Portrait,
                sheet_width,
                sheet_height,
                width: sheet_width,
                height: sheet_height,
                margin_top: top,
                margin_left: left,
                margin_bottom: bottom,
                margin_right: right,
            },
            Orientation::Landscape => Self {
                orientation: Orientation::Landscape,
                sheet_width,
                sheet_height,
                width: sheet_height,
                height: sheet_width,
                margin_top: left,
                margin_left: bottom,
                margin_bottom: right,
                margin_right: top,
            },
        }
    }

    /// Matrix mapping logical coordinates onto the sheet, if they differ.
    pub fn transform(&self) -> Option<Matrix> {
        match self.orientation {
            Orientation::Portrait => None,
            // Rotate 90 degrees counter-clockwise about the origin after
            // shifting down by the logical height: (x, y) -> (h - y, x).
            Orientation::Landscape => Some([0.0, 1.0, -1.0, 0.0, self.height, 0.0]),
        }
    }

    /// Map a logical point to sheet coordinates.
    pub fn to_sheet(&self, x: f32, y: f32) -> (f32, f32) {
        match self.transform() {
            None => (x, y),
            Some([a, b, c, d, e, f]) => (a * x + c * y + e, b * x + d * y + f),
        }
    }

    /// Baseline origin of the page title, in sheet coordinates.
    ///
    /// The title is always drawn upright on the sheet, before the transform.
    pub fn title_origin(&self, settings: &PageSettings) -> (f32, f32) {
        let indent = mm_to_pt(settings.title_indent);
        let half_band = mm_to_pt(settings.title_height) / 2.0;
        match self.orientation {
            Orientation::Portrait => (
                self.margin_left + indent,
                self.height - self.margin_top - half_band,
            ),
            Orientation::Landscape => (
                self.margin_top + indent,
                self.width - self.margin_right - half_band,
            ),
        }
    }

    /// Grid area left after margins and the title band, in logical coordinates.
    pub fn grid(&self, settings: &PageSettings) -> GridGeometry {
        let mut width = self.width - self.margin_left - self.margin_right;
        let mut height = self.height - self.margin_top - self.margin_bottom;

        if settings.show_title {
            let band = mm_to_pt(settings.title_height);
            match self.orientation {
                Orientation::Landscape => width -= band,
                Orientation::Portrait => height -= band,
            }
        }

        let columns = settings.columns.max(1);
        let rows = settings.rows.max(1);
        GridGeometry {
            origin_x: self.margin_left,
            origin_y: self.margin_bottom,
            width,
            height,
            columns,
            rows,
            cell_width: width / columns as f32,
            cell_height: height / rows as f32,
        }
    }
}

/// The cell grid of a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl GridGeometry {
    /// X positions of the vertical grid lines, left to right.
    pub fn column_lines(&self) -> Vec<f32> {
        (0..=self.columns)
            .map(|i| self.origin_x + i as f32 * self.cell_width)
            .collect()
    }

    /// Y positions of the horizontal grid lines, bottom to top.
    pub fn row_lines(&self) -> Vec<f32> {
        (0..=self.rows)
            .map(|j| self.origin_y + j as f32 * self.cell_height)
            .collect()
    }

    /// Centre of the cell at `row` (0 = top) and `column` (0 = left).
    ///
    /// PDF y grows upwards, so row indices are inverted to fill from the top
    /// and leave empty cells at the bottom.
    pub fn cell_centre(&self, row: u32, column: u32) -> (f32, f32) {
        let x = self.origin_x + self.cell_width / 2.0 + column as f32 * self.cell_width;
        let from_bottom = self.rows.saturating_sub(1).saturating_sub(row);
        let y = self.origin_y + self.cell_height / 2.0 + from_bottom as f32 * self.cell_height;
        (x, y)
    }
}

/// Largest font size `<= start` at which `word` is narrower than `max_width`.
///
/// Steps down one point at a time and returns 0 when nothing fits; callers
/// still draw the word at that size.
pub fn fit_font_size(word: &str, max_width: f32, start: u32, metrics: &impl TextMetrics) -> u32 {
    let mut size = start;
    while size > 0 && metrics.text_width(word, size as f32) >= max_width {
        size -= 1;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::MonospaceMetrics;
    use hatpack_core::types::Margins;

    const EPS: f32 = 1e-3;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn portrait_grid_loses_title_band_in_height() {
        let mut settings = PageSettings::default();
        settings.apply_portrait();
        let frame = PageFrame::new(&settings);
        let grid = frame.grid(&settings);

        assert!(frame.transform().is_none());
        assert!(close(grid.width, mm_to_pt(190.0)));
        assert!(close(grid.height, mm_to_pt(297.0 - 20.0 - 6.0)));
        assert!(close(grid.cell_width, mm_to_pt(190.0) / 3.0));
    }

    #[test]
    fn landscape_swaps_dimensions_and_margins() {
        let settings = PageSettings {
            margins: Margins {
                top: 1.0,
                left: 2.0,
                bottom: 3.0,
                right: 4.0,
            },
            ..Default::default()
        };
        let frame = PageFrame::new(&settings);

        assert!(close(frame.width, frame.sheet_height));
        assert!(close(frame.height, frame.sheet_width));
        assert!(close(frame.margin_right, mm_to_pt(1.0)));
        assert!(close(frame.margin_top, mm_to_pt(2.0)));
        assert!(close(frame.margin_left, mm_to_pt(3.0)));
        assert!(close(frame.margin_bottom, mm_to_pt(4.0)));

        let grid = frame.grid(&settings);
        assert!(close(grid.width, mm_to_pt(297.0 - 3.0 - 1.0 - 6.0)));
        assert!(close(grid.height, mm_to_pt(210.0 - 2.0 - 4.0)));
    }

    #[test]
    fn landscape_transform_keeps_layout_on_the_sheet() {
        let settings = PageSettings::default();
        let frame = PageFrame::new(&settings);

        let (x, y) = frame.to_sheet(0.0, 0.0);
        assert!(close(x, frame.sheet_width) && close(y, 0.0));
        let (x, y) = frame.to_sheet(frame.width, frame.height);
        assert!(close(x, 0.0) && close(y, frame.sheet_height));
    }

    #[test]
    fn title_sits_in_the_sheet_top_band_in_both_orientations() {
        let mut settings = PageSettings::default();
        let landscape = PageFrame::new(&settings).title_origin(&settings);
        settings.apply_portrait();
        let portrait = PageFrame::new(&settings).title_origin(&settings);

        let expected_y = mm_to_pt(297.0 - 10.0 - 3.0);
        assert!(close(landscape.1, expected_y));
        assert!(close(portrait.1, expected_y));
        assert!(close(portrait.0, mm_to_pt(16.0)));
    }

    #[test]
    fn no_title_band_without_title() {
        let settings = PageSettings {
            show_title: false,
            ..Default::default()
        };
        let grid = PageFrame::new(&settings).grid(&settings);
        assert!(close(grid.width, mm_to_pt(277.0)));
    }

    #[test]
    fn first_row_is_topmost() {
        let grid = GridGeometry {
            origin_x: 0.0,
            origin_y: 0.0,
            width: 40.0,
            height: 30.0,
            columns: 4,
            rows: 3,
            cell_width: 10.0,
            cell_height: 10.0,
        };
        assert_eq!(grid.cell_centre(0, 0), (5.0, 25.0));
        assert_eq!(grid.cell_centre(2, 3), (35.0, 5.0));
        assert_eq!(grid.column_lines(), [0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(grid.row_lines(), [0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn fit_keeps_size_when_word_fits() {
        let metrics = MonospaceMetrics::default();
        // "cat" at 16pt is 24pt wide.
        assert_eq!(fit_font_size("cat", 100.0, 16, &metrics), 16);
    }

    #[test]
    fn fit_picks_largest_size_under_limit() {
        let metrics = MonospaceMetrics::default();
        // 10 chars * 0.5em: width = 5 * size; strictly below 42 => 8.
        assert_eq!(fit_font_size("abcdefghij", 42.0, 16, &metrics), 8);
        // Exactly at the limit does not fit.
        assert_eq!(fit_font_size("abcdefghij", 40.0, 16, &metrics), 7);
    }

    #[test]
    fn fit_bottoms_out_at_zero() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(fit_font_size("anything", 0.0, 16, &metrics), 0);
        assert_eq!(fit_font_size("anything", -5.0, 16, &metrics), 0);
    }
}
