// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory canvas that records draw commands per page.

use super::{Canvas, DrawCommand, TextMetrics};

/// Metrics where every character has the same advance (in em).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_em: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance_em: 0.5 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_em * size
    }
}

/// Canvas that keeps every command, grouped by finished page.
#[derive(Debug, Clone)]
pub struct RecordingCanvas<M = MonospaceMetrics> {
    width: f32,
    height: f32,
    metrics: M,
    current: Vec<DrawCommand>,
    pages: Vec<Vec<DrawCommand>>,
}

impl<M: TextMetrics> RecordingCanvas<M> {
    pub fn new(page_size: (f32, f32), metrics: M) -> Self {
        Self {
            width: page_size.0,
            height: page_size.1,
            metrics,
            current: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Finished pages.
    pub fn pages(&self) -> &[Vec<DrawCommand>] {
        &self.pages
    }

    /// Commands drawn since the last `show_page`.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.current
    }

    /// Text strings of a finished page, in drawing order.
    pub fn page_texts(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|commands| {
                commands
                    .iter()
                    .filter_map(|command| match command {
                        DrawCommand::Text { text, .. } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<M: TextMetrics> TextMetrics for RecordingCanvas<M> {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.metrics.text_width(text, size)
    }
}

impl<M: TextMetrics> Canvas for RecordingCanvas<M> {
    fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw(&mut self, command: DrawCommand) {
        self.current.push(command);
    }

    fn show_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }
}
