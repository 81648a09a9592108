//! Source text as an ordered list of decoded lines.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One row of source text with its line break removed.
///
/// The length is counted in decoded `char`s, which is the unit used for
/// both canvas width and column indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    len: usize,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self { text, len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes) in the line
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

/// An immutable, ordered sequence of lines read top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Line::new).collect(),
        }
    }

    /// Split already-decoded text into lines.
    ///
    /// Follows the same line rules as [`Document::from_reader`].
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<Line> = text.split('\n').map(|l| Line::new(strip_cr(l))).collect();
        if text.is_empty() || text.ends_with('\n') {
            lines.pop();
        }
        Self { lines }
    }

    /// Read every line from `reader`.
    ///
    /// Lines end at `\n`, a trailing `\r` is dropped, and a final newline
    /// does not start an extra empty line. Invalid UTF-8 is replaced with
    /// U+FFFD rather than rejected.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf)?;
            if n == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            lines.push(Line::new(String::from_utf8_lossy(&buf)));
        }
        Ok(Self { lines })
    }

    /// Open `path` and read it fully. Nothing is returned on a partial read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let input_err = |source| Error::InputUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(input_err)?;
        let doc = Self::from_reader(BufReader::new(file)).map_err(input_err)?;
        log::debug!("read {} lines from {}", doc.len(), path.display());
        Ok(doc)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
