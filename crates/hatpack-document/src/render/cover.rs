// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover sheet: a short summary of the packet, centred on a portrait page.

use hatpack_core::config::PageSettings;
use hatpack_core::packet::Packet;

use crate::canvas::Canvas;

/// Summary lines printed on the cover, top to bottom.
pub fn cover_lines(packet: &Packet, copies: u32) -> Vec<String> {
    let pages = packet.pages().len();
    let mut lines = vec![
        packet.title().to_owned(),
        format!("{} words", packet.words.len()),
        format!("({pages} pages)"),
    ];
    if copies > 1 {
        lines.push(format!("{copies} copies"));
        lines.push(format!("{} pages total", copies as usize * pages));
    }
    lines
}

/// Draw the cover sheet. Always portrait, regardless of the grid orientation.
pub fn render_cover<C: Canvas>(canvas: &mut C, packet: &Packet, settings: &PageSettings, copies: u32) {
    let (width, height) = canvas.page_size();
    let size = settings.font_size;
    let interval = size as f32 * 2.0;

    let lines = cover_lines(packet, copies);
    let top = height / 2.0 + interval * lines.len() as f32 / 2.0;
    for (index, line) in lines.iter().enumerate() {
        canvas.draw_centred_string(width / 2.0, top - interval * index as f32, size, line);
    }
}
