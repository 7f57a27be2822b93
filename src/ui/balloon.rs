//! Balloon Renderer
//!
//! Wraps a message to the room left beside the art, frames it in a bordered
//! balloon and merges the balloon rows into the art rows:
//!
//! ```text
//!         _
//!      .-' '-.       .--------------------------------------------------------.
//!     /       \     |                                                          |
//!    |,-,-,-,-,|    |           Installed dev-nanny pre-commit hook            |
//!         |   ___   |                                                          |
//!         |  _)_(_   `--------------------------------------------------------`
//! ```
//!
//! The art's first row is a header and never carries balloon content. When the
//! message needs more rows than the art has, blank art rows are drawn so the
//! balloon can keep growing downward.

use std::iter;

use tracing::debug;

use super::art::ArtTemplate;
use crate::config::BalloonSettings;
use crate::errors::{NannyError, Result};

/// Border and padding characters around the interior of a content row:
/// one vertical bar and one padding glyph on each side.
pub const BORDER_OVERHEAD: usize = 4;

/// Widest row a renderer will lay out
pub const MAX_LINE_BUDGET: usize = 4096;

/// Most blank rows allowed above and below the message
pub const MAX_VERTICAL_PADDING: usize = 64;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

const TOP_CORNER: char = '.';
const BOTTOM_CORNER: char = '`';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';

/// Renders messages in a speech balloon next to an [`ArtTemplate`].
///
/// Immutable once built, so one renderer can be shared across threads.
#[derive(Debug, Clone)]
pub struct BalloonRenderer {
    art: ArtTemplate,
    interior_width: usize,
    padding_glyph: char,
    vertical_padding: usize,
}

impl BalloonRenderer {
    /// Build a renderer, failing fast when the art leaves no room for text.
    pub fn new(art: ArtTemplate, settings: &BalloonSettings) -> Result<Self> {
        check_limits(settings)?;

        let interior_width = settings
            .line_budget
            .checked_sub(art.width() + BORDER_OVERHEAD)
            .filter(|width| *width > 0)
            .ok_or_else(|| {
                NannyError::Config(format!(
                    "line budget {} leaves no room for text beside art of width {} \
                     (need more than {})",
                    settings.line_budget,
                    art.width(),
                    art.width() + BORDER_OVERHEAD
                ))
            })?;

        debug!(
            line_budget = settings.line_budget,
            art_width = art.width(),
            interior_width,
            "Balloon renderer ready"
        );

        Ok(Self {
            art,
            interior_width,
            padding_glyph: settings.padding_glyph,
            vertical_padding: settings.vertical_padding,
        })
    }

    /// Usable text columns inside the balloon
    pub fn interior_width(&self) -> usize {
        self.interior_width
    }

    pub fn art(&self) -> &ArtTemplate {
        &self.art
    }

    /// Render `message` as one block of text, rows joined by the platform
    /// line separator.
    pub fn decorate(&self, message: &str) -> String {
        self.render_rows(message).join(LINE_SEPARATOR)
    }

    /// The merged art and balloon rows, top to bottom.
    pub fn render_rows(&self, message: &str) -> Vec<String> {
        let wrapped = self.wrap(message);
        let balloon = self.box_lines(&wrapped);

        let mut art_rows = self.art.rows();
        let header = art_rows.next().map(str::to_owned);

        let mut art_rows = art_rows.fuse();
        let mut balloon_rows = balloon.into_iter().fuse();
        let merged = iter::from_fn(move || match (art_rows.next(), balloon_rows.next()) {
            (None, None) => None,
            (Some(art), None) => Some(art.to_owned()),
            (art, Some(row)) => Some(self.art_segment(art) + &row),
        });

        header.into_iter().chain(merged).collect()
    }

    /// Greedily wrap `message` to the interior width without splitting words.
    ///
    /// Messages shorter than the interior width stay on one line. Otherwise
    /// words are accumulated while `current + " " + word` stays under the
    /// width; the very first word is measured with that separator too. Every
    /// line is trimmed, and a word longer than the width gets a line of its
    /// own.
    pub fn wrap(&self, message: &str) -> Vec<String> {
        let limit = self.interior_width;
        if char_len(message) < limit {
            return vec![message.trim().to_string()];
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        for word in message.split(' ').filter(|word| !word.is_empty()) {
            if char_len(&current) + 1 + char_len(word) < limit {
                current.push(' ');
                current.push_str(word);
            } else {
                push_line(&mut lines, &current);
                current = word.to_string();
            }
        }
        push_line(&mut lines, &current);

        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    /// Top border, content rows (with blank rows above and below when
    /// vertical padding is set), bottom border.
    pub fn box_lines(&self, wrapped: &[String]) -> Vec<String> {
        let padding = iter::repeat("").take(self.vertical_padding);
        let content = padding
            .clone()
            .chain(wrapped.iter().map(String::as_str))
            .chain(padding)
            .map(|line| self.content_row(line));

        iter::once(self.border(TOP_CORNER))
            .chain(content)
            .chain(iter::once(self.border(BOTTOM_CORNER)))
            .collect()
    }

    fn border(&self, corner: char) -> String {
        let mut row = String::with_capacity(self.interior_width + 3);
        row.push(self.padding_glyph);
        row.push(corner);
        row.extend(iter::repeat(HORIZONTAL).take(self.interior_width));
        row.push(corner);
        row
    }

    fn content_row(&self, line: &str) -> String {
        let remaining = self.interior_width.saturating_sub(char_len(line));
        let left = remaining / 2;
        let right = remaining - left;

        let mut row = String::with_capacity(self.interior_width + BORDER_OVERHEAD);
        row.push(VERTICAL);
        row.push(self.padding_glyph);
        row.extend(iter::repeat(self.padding_glyph).take(left));
        row.push_str(line);
        row.extend(iter::repeat(self.padding_glyph).take(right));
        row.push(self.padding_glyph);
        row.push(VERTICAL);
        row
    }

    /// The art part of a merged row, right-padded to the art width. Below the
    /// figure this is a blank row.
    fn art_segment(&self, art: Option<&str>) -> String {
        match art {
            Some(row) => {
                let fill = self.art.width().saturating_sub(char_len(row));
                let mut segment = row.to_string();
                segment.extend(iter::repeat(self.padding_glyph).take(fill));
                segment
            }
            None => self.art.blank_row(self.padding_glyph),
        }
    }
}

/// Upper bounds on the layout, so a valid renderer never allocates rows
/// larger than a terminal could show.
pub(crate) fn check_limits(settings: &BalloonSettings) -> Result<()> {
    if settings.line_budget > MAX_LINE_BUDGET {
        return Err(NannyError::Config(format!(
            "line budget {} exceeds the maximum of {}",
            settings.line_budget, MAX_LINE_BUDGET
        )));
    }
    if settings.vertical_padding > MAX_VERTICAL_PADDING {
        return Err(NannyError::Config(format!(
            "vertical padding {} exceeds the maximum of {}",
            settings.vertical_padding, MAX_VERTICAL_PADDING
        )));
    }
    Ok(())
}

fn push_line(lines: &mut Vec<String>, line: &str) {
    let line = line.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
