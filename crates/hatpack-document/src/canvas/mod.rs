// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drawing surface abstraction.
//
// Renderers only emit `DrawCommand`s into a `Canvas`; the PDF backend turns
// them into printpdf operations and the recording canvas keeps them for
// inspection. All coordinates are PDF points with the origin bottom-left.

pub mod recording;

pub use recording::{MonospaceMetrics, RecordingCanvas};

/// An affine matrix `[a, b, c, d, e, f]` as used by the PDF `cm` operator.
pub type Matrix = [f32; 6];

/// One drawing operation on the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Concatenate `matrix` to the current transform for the rest of the page.
    Transform(Matrix),
    /// Stroke width for subsequent lines and rectangles.
    LineWidth(f32),
    Line {
        from: (f32, f32),
        to: (f32, f32),
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Text with its baseline starting at `(x, y)`.
    Text {
        x: f32,
        y: f32,
        size: u32,
        text: String,
    },
}

/// Width of rendered text in the document font.
pub trait TextMetrics {
    /// Advance width of `text` at `size` points, in points.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// A page-oriented drawing surface.
pub trait Canvas: TextMetrics {
    /// Sheet size (width, height) in points.
    fn page_size(&self) -> (f32, f32);

    fn draw(&mut self, command: DrawCommand);

    /// Finish the current page; later commands go to a new page.
    fn show_page(&mut self);

    /// Draw `text` horizontally centred on `x`.
    fn draw_centred_string(&mut self, x: f32, y: f32, size: u32, text: &str) {
        let width = self.text_width(text, size as f32);
        self.draw(DrawCommand::Text {
            x: x - width / 2.0,
            y,
            size,
            text: text.to_owned(),
        });
    }

    fn draw_string(&mut self, x: f32, y: f32, size: u32, text: &str) {
        self.draw(DrawCommand::Text {
            x,
            y,
            size,
            text: text.to_owned(),
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.draw(DrawCommand::Line {
            from: (x1, y1),
            to: (x2, y2),
        });
    }

    /// Lines along every `xs` column (spanning the `ys` range) and every `ys`
    /// row (spanning the `xs` range).
    fn grid(&mut self, xs: &[f32], ys: &[f32]) {
        let (Some(&x_min), Some(&x_max)) = (xs.first(), xs.last()) else {
            return;
        };
        let (Some(&y_min), Some(&y_max)) = (ys.first(), ys.last()) else {
            return;
        };
        for &x in xs {
            self.line(x, y_min, x, y_max);
        }
        for &y in ys {
            self.line(x_min, y, x_max, y);
        }
    }
}
