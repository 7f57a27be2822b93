//! Art Template
//!
//! The fixed figure drawn to the left of the speech balloon. Rows are never
//! mutated after load; `width` and `height` are measured once.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::errors::{NannyError, Result};

/// The nanny figure shipped with the binary.
pub const NANNY: &[&str] = &[
    r"        _",
    r"     .-' '-.",
    r"    /       \",
    r"   |,-,-,-,-,|",
    r"        |   ___",
    r"        |  _)_(_",
    r"        |  (/ \) /",
    r"       (\  _\_/_",
    r"        \\/ \ / \",
    r"         \/(   )|",
    r"            )_(||",
    r"           /   \|",
    r"           |   |n",
    r"           |   / \",
    r"           |___|_|",
    r"            \|/",
    r"    jgs    _/L\_",
];

/// An immutable multi-line figure plus its metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtTemplate {
    rows: Vec<String>,
    width: usize,
}

impl ArtTemplate {
    /// Create a template from rows
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        Self { rows, width }
    }

    /// The built-in nanny figure
    pub fn nanny() -> Self {
        Self::new(NANNY.iter().copied())
    }

    /// Split text into rows. A trailing line break does not add a row.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Load a template from a text file.
    ///
    /// There is no fallback figure: a missing, unreadable or empty file is a
    /// [`NannyError::ResourceLoad`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NannyError::ResourceLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let art = Self::parse(&content);
        if art.height() == 0 {
            return Err(NannyError::ResourceLoad {
                path: path.to_path_buf(),
                message: "art contains no rows".to_string(),
            });
        }

        debug!(
            path = %path.display(),
            width = art.width(),
            height = art.height(),
            "Loaded art template"
        );
        Ok(art)
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Rows in their original order. Each call starts from the top.
    pub fn rows(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.rows.iter().map(String::as_str)
    }

    /// The row at `index`, or `None` past the bottom of the figure.
    ///
    /// Callers that keep drawing below the figure ask for [`Self::blank_row`].
    pub fn row_at(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// A row of `width` padding glyphs
    pub fn blank_row(&self, glyph: char) -> String {
        std::iter::repeat(glyph).take(self.width).collect()
    }
}

impl Default for ArtTemplate {
    fn default() -> Self {
        Self::nanny()
    }
}

impl fmt::Display for ArtTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
