// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Packet parser: splits a word-list file into header metadata and words.
//
// Format:
//
//     <title>
//     <output file name>
//     -----
//     word
//     # comment
//     word

use std::path::Path;

use hatpack_core::error::{HatpackError, Result};
use hatpack_core::packet::{Packet, PacketMeta};
use tracing::{debug, info, instrument, warn};

/// Lines starting with this token end the header.
pub const SEPARATOR: &str = "-----";

/// A header line that had no metadata slot left and was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraHeaderLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub text: String,
}

/// Parsed packet plus the non-fatal problems found along the way.
#[derive(Debug, Clone)]
pub struct ParsedPacket {
    pub packet: Packet,
    pub warnings: Vec<ExtraHeaderLine>,
}

/// Parse packet text. Never fails: malformed headers only produce warnings.
pub fn parse_packet(text: &str) -> ParsedPacket {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut meta = PacketMeta::default();
    let mut words = Vec::new();
    let mut warnings = Vec::new();
    let mut in_header = true;
    let mut header_index = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line.starts_with(SEPARATOR) {
            in_header = false;
            continue;
        }

        if in_header {
            let slot = match header_index {
                0 => &mut meta.title,
                1 => &mut meta.filename,
                _ => {
                    warn!(line = index + 1, text = line, "extra header line ignored");
                    warnings.push(ExtraHeaderLine {
                        line_number: index + 1,
                        text: line.to_owned(),
                    });
                    continue;
                }
            };
            *slot = line.to_owned();
            header_index += 1;
        } else if !line.is_empty() && !line.starts_with('#') {
            words.push(line.to_owned());
        }
    }

    debug!(words = words.len(), title = %meta.title, "packet parsed");

    ParsedPacket {
        packet: Packet::new(meta, words),
        warnings,
    }
}

/// Read and parse a packet file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_packet(path: impl AsRef<Path>) -> Result<ParsedPacket> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| HatpackError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| HatpackError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_packet(&text);
    info!(
        words = parsed.packet.words.len(),
        output = %parsed.packet.output_file_name(),
        "Loaded packet"
    );
    Ok(parsed)
}
