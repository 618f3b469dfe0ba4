// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The single word font: loaded once, embedded in every document, and measured
// with `ttf-parser` for the shrink-to-fit loop.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use hatpack_core::error::{HatpackError, Result};
use printpdf::{ParsedFont, PdfWarnMsg};
use tracing::{debug, info, instrument};
use ttf_parser::{Face, GlyphId};

use crate::canvas::TextMetrics;

/// Horizontal advances of every mapped character, in font units.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    units_per_em: f32,
    advances: HashMap<char, u16>,
    /// Advance of the `.notdef` glyph, used for unmapped characters.
    missing_advance: u16,
}

impl FontMetrics {
    /// Read metrics from TrueType/OpenType bytes (first face of a collection).
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let face = Face::parse(bytes, 0).ok()?;
        let mut advances = HashMap::new();

        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|code_point| {
                    let Some(ch) = char::from_u32(code_point) else {
                        return;
                    };
                    if let Some(advance) = subtable
                        .glyph_index(code_point)
                        .and_then(|glyph| face.glyph_hor_advance(glyph))
                    {
                        advances.entry(ch).or_insert(advance);
                    }
                });
            }
        }

        Some(Self {
            units_per_em: f32::from(face.units_per_em()),
            missing_advance: face.glyph_hor_advance(GlyphId(0)).unwrap_or(0),
            advances,
        })
    }

    /// Number of characters with a glyph.
    pub fn mapped_chars(&self) -> usize {
        self.advances.len()
    }
}

impl TextMetrics for FontMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u64 = text
            .chars()
            .map(|ch| u64::from(*self.advances.get(&ch).unwrap_or(&self.missing_advance)))
            .sum();
        units as f32 * size / self.units_per_em
    }
}

/// The word font, parsed for both embedding and measuring.
pub struct WordFont {
    path: PathBuf,
    parsed: ParsedFont,
    metrics: FontMetrics,
}

impl WordFont {
    /// Load the font file. Missing or unparsable fonts are fatal errors.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| HatpackError::FontMissing {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, &bytes)
    }

    /// Build from font bytes already in memory; `path` is only for messages.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Result<Self> {
        let path = path.into();
        let metrics =
            FontMetrics::from_bytes(bytes).ok_or_else(|| HatpackError::FontInvalid(path.clone()))?;

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let parsed = ParsedFont::from_bytes(bytes, 0, &mut warnings)
            .ok_or_else(|| HatpackError::FontInvalid(path.clone()))?;
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "font parser reported warnings");
        }

        info!(
            font = %path.display(),
            glyphs = metrics.mapped_chars(),
            "Loaded word font"
        );
        Ok(Self {
            path,
            parsed,
            metrics,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parsed(&self) -> &ParsedFont {
        &self.parsed
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }
}

/// A TrueType font from the host, if one of the usual ones is installed.
#[cfg(test)]
pub(crate) fn system_font() -> Option<WordFont> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial.ttf",
    ]
    .iter()
    .find_map(|path| WordFont::load(path).ok())
}
