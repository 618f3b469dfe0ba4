// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Packets (one input word list) and their pagination into grid pages.

use crate::config::PageSettings;

/// Title used when the packet header does not provide one.
pub const DEFAULT_TITLE: &str = "Пакет слов";
/// Output file name used when the packet header does not provide one.
pub const DEFAULT_FILENAME: &str = "out.pdf";

/// Header metadata of a packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketMeta {
    pub title: String,
    pub filename: String,
}

impl Default for PacketMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            filename: DEFAULT_FILENAME.to_owned(),
        }
    }
}

/// One sheet of words: rows of up to `columns` words each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub rows: Vec<Vec<String>>,
}

impl Page {
    /// Number of words on this page.
    pub fn word_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Words in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// A parsed word list together with its pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Packet {
    pub meta: PacketMeta,
    pub words: Vec<String>,
    pages: Vec<Page>,
}

impl Packet {
    pub fn new(meta: PacketMeta, words: Vec<String>) -> Self {
        Self {
            meta,
            words,
            pages: Vec::new(),
        }
    }

    /// Split the words into pages for the given grid.
    pub fn paginate(&mut self, settings: &PageSettings) {
        self.pages = paginate(&self.words, settings.rows, settings.columns);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// Title line printed on content page `index` (0-based).
    pub fn page_title(&self, index: usize) -> String {
        format!(
            "{} ({} words, page {}/{})",
            self.meta.title,
            self.words.len(),
            index + 1,
            self.pages.len()
        )
    }

    /// File name of the generated PDF, always ending in `.pdf`.
    pub fn output_file_name(&self) -> String {
        let name = &self.meta.filename;
        if name.ends_with(".pdf") {
            name.clone()
        } else {
            format!("{name}.pdf")
        }
    }
}

/// Chunk `words` into pages of `rows` x `columns`, preserving order.
///
/// The last page may have fewer rows and its last row fewer words. An empty
/// word list gives no pages.
pub fn paginate(words: &[String], rows: u32, columns: u32) -> Vec<Page> {
    let columns = columns.max(1) as usize;
    let per_page = rows.max(1) as usize * columns;

    words
        .chunks(per_page)
        .map(|page_words| Page {
            rows: page_words.chunks(columns).map(<[String]>::to_vec).collect(),
        })
        .collect()
}
