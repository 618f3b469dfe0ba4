// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// hatpack: word list to printable packet PDF.
//
// Entry point. Initialises logging, parses the command line, loads the word
// font, then converts every packet file into its own PDF.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use hatpack_core::config::{PageSettings, RunOptions};
use hatpack_core::error::Result;
use hatpack_document::{WordFont, load_packet, write_packet_pdf};

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Usage errors exit here with status 2; --help and --version with 0.
    let cli = Cli::parse_ordered();

    let settings = match cli.page_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "invalid layout");
            return ExitCode::FAILURE;
        }
    };

    // The font is needed for every packet; fail before producing anything.
    let font = match WordFont::load(&cli.font_file) {
        Ok(font) => font,
        Err(e) => {
            tracing::error!(error = %e, "cannot load word font");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(font = %font.path().display(), ?settings, "layout ready");

    let failed = run(&cli, &settings, &font);
    if failed > 0 {
        tracing::warn!(failed, total = cli.packets.len(), "some packets were not converted");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Convert every packet on the command line and return how many failed.
///
/// A failing packet is logged and the rest are still converted, unless
/// `--fail-fast` is set, in which case the first failure stops the run.
fn run(cli: &Cli, settings: &PageSettings, font: &WordFont) -> usize {
    let options = cli.run_options();
    let mut failed = 0;

    for path in &cli.packets {
        if let Err(e) = convert(path, settings, &options, font) {
            tracing::error!(packet = %path.display(), error = %e, "packet failed");
            failed += 1;
            if cli.fail_fast {
                break;
            }
        }
    }

    failed
}

/// Parse, paginate and write one packet.
fn convert(path: &Path, settings: &PageSettings, options: &RunOptions, font: &WordFont) -> Result<()> {
    let mut packet = load_packet(path)?.packet;
    packet.paginate(settings);
    write_packet_pdf(&packet, settings, options, font)?;
    Ok(())
}
