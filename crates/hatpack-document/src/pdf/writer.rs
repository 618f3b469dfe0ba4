// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF canvas: turns draw commands into printpdf 0.8 operations.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use hatpack_core::types::PaperSize;
use printpdf::{
    Color, CurTransMat, FontId, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions,
    PdfWarnMsg, Point, Pt, Rgb, TextItem,
};
use tracing::debug;

use crate::canvas::{Canvas, DrawCommand, TextMetrics};
use crate::pdf::font::WordFont;

/// A `Canvas` backed by an in-memory printpdf document.
///
/// Every page is a portrait sheet of the configured paper size; pages are
/// collected until [`PdfCanvas::finish`] serialises the document.
pub struct PdfCanvas<'f> {
    doc: PdfDocument,
    font: &'f WordFont,
    font_id: FontId,
    paper_size: PaperSize,
    ops: Vec<Op>,
    dirty: bool,
    pages: Vec<PdfPage>,
}

impl<'f> PdfCanvas<'f> {
    /// Start a new document; `title` goes into the PDF metadata.
    pub fn new(title: &str, font: &'f WordFont, paper_size: PaperSize) -> Self {
        let mut doc = PdfDocument::new(title);
        let font_id = doc.add_font(font.parsed());
        Self {
            doc,
            font,
            font_id,
            paper_size,
            ops: page_prelude(),
            dirty: false,
            pages: Vec::new(),
        }
    }

    /// Serialise the document. A page with pending drawing is finished first.
    pub fn finish(mut self) -> Vec<u8> {
        if self.dirty {
            self.show_page();
        }

        let page_count = self.pages.len();
        self.doc.with_pages(self.pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = self.doc.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(
            pages = page_count,
            bytes = output.len(),
            warnings = warnings.len(),
            "PDF serialised"
        );
        output
    }

    fn push_text(&mut self, x: f32, y: f32, size: u32, text: String) {
        self.ops.extend([
            Op::StartTextSection,
            Op::SetTextCursor {
                pos: Point { x: Pt(x), y: Pt(y) },
            },
            Op::SetFontSize {
                size: Pt(size as f32),
                font: self.font_id.clone(),
            },
            Op::WriteText {
                items: vec![TextItem::Text(text)],
                font: self.font_id.clone(),
            },
            Op::EndTextSection,
        ]);
    }
}

impl TextMetrics for PdfCanvas<'_> {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.font.metrics().text_width(text, size)
    }
}

impl Canvas for PdfCanvas<'_> {
    fn page_size(&self) -> (f32, f32) {
        self.paper_size.dimensions_pt()
    }

    fn draw(&mut self, command: DrawCommand) {
        self.dirty = true;
        match command {
            DrawCommand::Transform(matrix) => self.ops.push(Op::SetTransformationMatrix {
                matrix: CurTransMat::Raw(matrix),
            }),
            DrawCommand::LineWidth(width) => {
                self.ops.push(Op::SetOutlineThickness { pt: Pt(width) })
            }
            DrawCommand::Line { from, to } => self.ops.push(Op::DrawLine {
                line: Line {
                    points: vec![line_point(from), line_point(to)],
                    is_closed: false,
                },
            }),
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
            } => self.ops.push(Op::DrawLine {
                line: Line {
                    points: vec![
                        line_point((x, y)),
                        line_point((x + width, y)),
                        line_point((x + width, y + height)),
                        line_point((x, y + height)),
                    ],
                    is_closed: true,
                },
            }),
            DrawCommand::Text { x, y, size, text } => self.push_text(x, y, size, text),
        }
    }

    fn show_page(&mut self) {
        let (w_mm, h_mm) = self.paper_size.dimensions_mm();
        let ops = std::mem::replace(&mut self.ops, page_prelude());
        self.pages
            .push(PdfPage::new(Mm(w_mm as f32), Mm(h_mm as f32), ops));
        self.dirty = false;
    }
}

/// Operations every page starts with: black strokes.
fn page_prelude() -> Vec<Op> {
    vec![Op::SetOutlineColor {
        col: Color::Rgb(Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            icc_profile: None,
        }),
    }]
}

fn line_point((x, y): (f32, f32)) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}
