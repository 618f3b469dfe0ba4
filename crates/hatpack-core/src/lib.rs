// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// hatpack: Core types, settings and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod packet;
pub mod types;

pub use config::{PageSettings, RunOptions};
pub use error::HatpackError;
pub use packet::{Packet, PacketMeta, Page, paginate};
pub use types::*;
