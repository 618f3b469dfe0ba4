// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// hatpack-document: Packet parsing, grid layout and PDF output.
//
// Provides the packet file parser, the drawing-surface abstraction with a
// recording implementation, the page and cover renderers, and the printpdf
// backend that assembles and writes one PDF per packet.

pub mod assemble;
pub mod canvas;
pub mod layout;
pub mod parse;
pub mod pdf;
pub mod render;

// Re-export the primary entry points so callers can use `hatpack_document::load_packet` etc.
pub use assemble::{render_packet, write_packet_pdf};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, TextMetrics};
pub use layout::{PageFrame, fit_font_size};
pub use parse::{ParsedPacket, load_packet, parse_packet};
pub use pdf::{PdfCanvas, WordFont};
