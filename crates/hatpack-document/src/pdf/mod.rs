// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF backend: font loading and a `Canvas` that builds printpdf pages.

pub mod font;
pub mod writer;

pub use font::{FontMetrics, WordFont};
pub use writer::PdfCanvas;
