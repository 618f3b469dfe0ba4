// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line interface and its translation into run settings.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use hatpack_core::config::{PageSettings, RunOptions};
use hatpack_core::error::Result;
use hatpack_core::types::PaperSize;

/// Turn word lists into printable, cuttable word-card packets (PDF).
///
/// Each packet file starts with a title line and an output file name line,
/// then a `-----` separator, then one word per line. Blank lines and lines
/// starting with `#` are ignored.
#[derive(Debug, Parser)]
#[command(name = "hatpack", version, about)]
pub struct Cli {
    /// Packet files to convert; each produces its own PDF.
    #[arg(required = true, value_name = "PACKET")]
    pub packets: Vec<PathBuf>,

    /// Print a cover sheet.
    #[arg(long)]
    pub cover: bool,

    /// Do not print the title line on content pages.
    #[arg(long = "notitle")]
    pub no_title: bool,

    /// Portrait mode (3 columns, 16 rows unless given explicitly).
    #[arg(short, long)]
    pub portrait: bool,

    /// Rows per page (default: 12, portrait: 16).
    #[arg(short, long, value_name = "R", value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: Option<u32>,

    /// Columns per page (default: 4, portrait: 3).
    #[arg(short, long, value_name = "C", value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// Word font size in points (default: 16).
    #[arg(short, long = "font", value_name = "SIZE")]
    pub font_size: Option<u32>,

    /// Number of copies of the packet in one PDF.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub copies: u32,

    /// Skip the bold outline and full-bleed cutting lines.
    #[arg(long = "nocut")]
    pub no_cut: bool,

    /// Paper size: a4, a3, a5, letter, legal, tabloid or WIDTHxHEIGHT in mm.
    #[arg(long, value_name = "SIZE")]
    pub paper: Option<PaperSize>,

    /// TrueType font used for all text.
    #[arg(long, value_name = "PATH", env = "HATPACK_FONT", default_value = "DroidSans.ttf")]
    pub font_file: PathBuf,

    /// JSON file with page settings; command-line flags override it.
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Directory the PDFs are written to.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Stop at the first packet that fails instead of continuing with the rest.
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// Parse the process arguments, exiting with usage on error.
    pub fn parse_ordered() -> Self {
        Self::try_parse_ordered_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` keeping the argument-order semantics of `-p`: the preset
    /// resets rows and columns, so only values given after it survive.
    pub fn try_parse_ordered_from<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut cli = Self::from_arg_matches(&matches)?;
        cli.drop_values_before_portrait(&matches);
        Ok(cli)
    }

    fn drop_values_before_portrait(&mut self, matches: &ArgMatches) {
        let Some(preset) = matches.index_of("portrait").filter(|_| self.portrait) else {
            return;
        };
        let before = |id: &str| matches.index_of(id).is_some_and(|index| index < preset);
        if before("rows") {
            self.rows = None;
        }
        if before("columns") {
            self.columns = None;
        }
    }

    /// Page settings: defaults or the settings file, then the flags on top.
    pub fn page_settings(&self) -> Result<PageSettings> {
        let mut settings = match &self.settings {
            Some(path) => PageSettings::load_json(path)?,
            None => PageSettings::default(),
        };

        if self.portrait {
            settings.apply_portrait();
        }
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        if let Some(size) = self.font_size {
            settings.font_size = size;
        }
        if let Some(paper) = self.paper {
            settings.paper_size = paper;
        }
        if self.no_title {
            settings.show_title = false;
        }
        if self.no_cut {
            settings.cut_grid = false;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            copies: self.copies,
            cover: self.cover,
            output_dir: self.output_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use hatpack_core::error::HatpackError;
    use hatpack_core::types::Orientation;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_ordered_from(std::iter::once("hatpack").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["words.txt"]);
        let settings = cli.page_settings().unwrap();
        assert_eq!(settings, PageSettings::default());
        assert_eq!(cli.run_options(), RunOptions::default());
        assert_eq!(cli.font_file, PathBuf::from("DroidSans.ttf"));
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["--cover", "--notitle", "-r", "10", "--columns=5", "-f", "20", "-n", "3", "a.txt", "b.txt"]);
        assert_eq!(cli.packets.len(), 2);

        let settings = cli.page_settings().unwrap();
        assert_eq!((settings.rows, settings.columns, settings.font_size), (10, 5, 20));
        assert!(!settings.show_title);

        let options = cli.run_options();
        assert_eq!(options.copies, 3);
        assert!(options.cover);
    }

    #[test]
    fn portrait_preset_and_explicit_override() {
        let settings = parse(&["-p", "a.txt"]).page_settings().unwrap();
        assert_eq!(settings.orientation, Orientation::Portrait);
        assert_eq!((settings.columns, settings.rows), (3, 16));

        let settings = parse(&["--portrait", "--rows=20", "a.txt"]).page_settings().unwrap();
        assert_eq!((settings.columns, settings.rows), (3, 20));

        let settings = parse(&["-p", "-c", "2", "a.txt"]).page_settings().unwrap();
        assert_eq!((settings.columns, settings.rows), (2, 16));
    }

    #[test]
    fn portrait_resets_values_given_before_it() {
        let settings = parse(&["-r", "5", "-p", "a.txt"]).page_settings().unwrap();
        assert_eq!(settings.rows, 16);

        let settings = parse(&["--columns=2", "-r", "5", "--portrait", "a.txt"])
            .page_settings()
            .unwrap();
        assert_eq!((settings.columns, settings.rows), (3, 16));

        let settings = parse(&["-c", "2", "-p", "-r", "9", "a.txt"]).page_settings().unwrap();
        assert_eq!((settings.columns, settings.rows), (3, 9));

        // Without the preset nothing is dropped.
        let settings = parse(&["-r", "5", "a.txt"]).page_settings().unwrap();
        assert_eq!(settings.rows, 5);
    }

    #[test]
    fn supplementary_flags() {
        let cli = parse(&["--nocut", "--paper", "letter", "-o", "out", "--fail-fast", "a.txt"]);
        let settings = cli.page_settings().unwrap();
        assert!(!settings.cut_grid);
        assert_eq!(settings.paper_size, PaperSize::Letter);
        assert_eq!(cli.run_options().output_dir, PathBuf::from("out"));
        assert!(cli.fail_fast);
    }

    #[test]
    fn settings_file_is_overridden_by_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "rows": 8, "columns": 2, "font_size": 12 }"#).unwrap();
        let path = path.to_str().unwrap();

        let settings = parse(&["--settings", path, "-f", "14", "a.txt"]).page_settings().unwrap();
        assert_eq!((settings.rows, settings.columns, settings.font_size), (8, 2, 14));
    }

    #[test]
    fn invalid_settings_file_layout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "margins": { "top": 200, "left": 10, "bottom": 200, "right": 10 } }"#).unwrap();
        let path = path.to_str().unwrap();

        assert!(matches!(
            parse(&["--settings", path, "a.txt"]).page_settings(),
            Err(HatpackError::InvalidSettings(_))
        ));
    }

    #[test]
    fn unknown_option_is_an_error() {
        let err = Cli::try_parse_from(["hatpack", "--bogus", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = Cli::try_parse_from(["hatpack", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn zero_rows_and_missing_packets_are_rejected() {
        assert!(Cli::try_parse_ordered_from(["hatpack", "-r", "0", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["hatpack", "-n", "0", "a.txt"]).is_err());
        assert_eq!(
            Cli::try_parse_from(["hatpack", "--cover"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }
}
