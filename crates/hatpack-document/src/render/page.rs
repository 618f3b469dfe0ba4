// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content page renderer: title line, cut grid and one word per cell.

use hatpack_core::config::PageSettings;
use hatpack_core::packet::Page;
use hatpack_core::types::mm_to_pt;
use tracing::debug;

use crate::canvas::{Canvas, DrawCommand};
use crate::layout::{
    CUT_LINE_WIDTH_MM, GRID_LINE_WIDTH_MM, OUTLINE_WIDTH_MM, PageFrame, fit_font_size,
};

/// Draw one page of words onto the canvas. Does not finish the page.
pub fn render_page<C: Canvas>(canvas: &mut C, page: &Page, settings: &PageSettings, title: &str) {
    let frame = PageFrame::new(settings);

    if settings.show_title {
        let (x, y) = frame.title_origin(settings);
        canvas.draw_string(x, y, settings.title_font_size, title);
    }

    if let Some(matrix) = frame.transform() {
        canvas.draw(DrawCommand::Transform(matrix));
    }

    let grid = frame.grid(settings);

    if settings.cut_grid {
        canvas.draw(DrawCommand::LineWidth(mm_to_pt(OUTLINE_WIDTH_MM)));
        canvas.draw(DrawCommand::Rect {
            x: grid.origin_x,
            y: grid.origin_y,
            width: grid.width,
            height: grid.height,
        });

        // Full-bleed cutting lines along the grid edges.
        let top = grid.origin_y + grid.height;
        let right = grid.origin_x + grid.width;
        canvas.draw(DrawCommand::LineWidth(mm_to_pt(CUT_LINE_WIDTH_MM)));
        canvas.line(0.0, grid.origin_y, frame.width, grid.origin_y);
        canvas.line(0.0, top, frame.width, top);
        canvas.line(grid.origin_x, 0.0, grid.origin_x, frame.height);
        canvas.line(right, 0.0, right, frame.height);
    }

    canvas.draw(DrawCommand::LineWidth(mm_to_pt(GRID_LINE_WIDTH_MM)));
    canvas.grid(&grid.column_lines(), &grid.row_lines());

    let max_width = grid.cell_width - 2.0 * mm_to_pt(settings.word_margin);
    for (row_index, row) in page.rows.iter().enumerate() {
        for (column_index, word) in row.iter().enumerate() {
            let size = fit_font_size(word, max_width, settings.font_size, &*canvas);
            let (x, y) = grid.cell_centre(row_index as u32, column_index as u32);
            // Half the font size is a rough stand-in for the glyph height.
            canvas.draw_centred_string(x, y - size as f32 / 2.0, size, word);
        }
    }

    debug!(
        words = page.word_count(),
        cell_width = grid.cell_width,
        cell_height = grid.cell_height,
        "Page rendered"
    );
}
