// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for hatpack.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all hatpack operations.
#[derive(Debug, Error)]
pub enum HatpackError {
    // -- Input errors --
    #[error("cannot read packet {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("packet {} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // -- Font errors --
    #[error("font file {} is missing or unreadable: {source}", path.display())]
    FontMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {} is not a usable TrueType font", .0.display())]
    FontInvalid(PathBuf),

    // -- Layout / output --
    #[error("invalid page settings: {0}")]
    InvalidSettings(String),

    #[error("PDF generation failed: {0}")]
    PdfError(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HatpackError>;
