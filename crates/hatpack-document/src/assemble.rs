// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembly: cover sheet, repeated copies of every page, and the
// final write of one PDF per packet.

use std::io::Write;
use std::path::PathBuf;

use hatpack_core::config::{PageSettings, RunOptions};
use hatpack_core::error::{HatpackError, Result};
use hatpack_core::packet::Packet;
use tempfile::NamedTempFile;
use tracing::{info, instrument};

use crate::canvas::Canvas;
use crate::pdf::{PdfCanvas, WordFont};
use crate::render::{render_cover, render_page};

/// Draw the complete packet onto `canvas`: the optional cover, then every
/// page once per copy. Returns the number of sheets drawn.
pub fn render_packet<C: Canvas>(
    canvas: &mut C,
    packet: &Packet,
    settings: &PageSettings,
    options: &RunOptions,
) -> usize {
    let copies = options.copies.max(1);
    let mut sheets = 0;

    if options.cover {
        render_cover(canvas, packet, settings, copies);
        canvas.show_page();
        sheets += 1;
    }

    for _copy in 0..copies {
        for (index, page) in packet.pages().iter().enumerate() {
            render_page(canvas, page, settings, &packet.page_title(index));
            canvas.show_page();
            sheets += 1;
        }
    }

    sheets
}

/// Render `packet` to a PDF in `options.output_dir` and return its path.
///
/// The document is built in memory and then written through a temporary file
/// in the target directory, so a failed run never leaves a truncated PDF
/// behind.
#[instrument(skip_all, fields(packet = %packet.title()))]
pub fn write_packet_pdf(
    packet: &Packet,
    settings: &PageSettings,
    options: &RunOptions,
    font: &WordFont,
) -> Result<PathBuf> {
    let path = options.output_dir.join(packet.output_file_name());

    let mut canvas = PdfCanvas::new(packet.title(), font, settings.paper_size);
    let sheets = render_packet(&mut canvas, packet, settings, options);
    let bytes = canvas.finish();

    std::fs::create_dir_all(&options.output_dir)?;
    let mut tmp = NamedTempFile::new_in(&options.output_dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path)
        .map_err(|err| HatpackError::Io(err.error))?;

    info!(
        path = %path.display(),
        words = packet.words.len(),
        pages = packet.pages().len(),
        copies = options.copies,
        sheets,
        bytes = bytes.len(),
        "Wrote packet PDF"
    );
    Ok(path)
}
