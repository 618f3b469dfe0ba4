// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page renderers: content pages and the cover sheet.

pub mod cover;
pub mod page;

pub use cover::{cover_lines, render_cover};
pub use page::render_page;
