//! `///` doc block extraction.
//!
//! A line-prefix scanner, not a parser. The scan is a two-state machine:
//!
//! - **SeekingMarker** walks the cursor forward until a `///` line, then
//!   consumes the whole contiguous run of `///` lines.
//! - **SeekingSignature** peeks past blank and `//` comment lines for the
//!   first other line and emits the block. The peek leaves the cursor on the
//!   line after the `///` run, so two blocks separated only by blank or `//`
//!   comment lines report the same signature.

use crate::model::DocBlock;
use regex::Regex;
use std::sync::LazyLock;

/// `///` after optional indentation; captures the text after at most one space.
static RE_DOC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/// ?(.*)$").unwrap());

/// Blank, or any `//` comment (doc comments included).
static RE_SKIPPABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?://.*)?$").unwrap());

/// Line terminators: `\r\n`, `\n`, a lone `\r`, and the rarer vertical-tab,
/// form-feed, separator and Unicode line/paragraph breaks.
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c\x1d\x1e\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Start a lazy scan over `text`.
pub fn extract(text: &str) -> Blocks<'_> {
    Blocks {
        lines: split_lines(text),
        cursor: 0,
        state: State::SeekingMarker,
    }
}

/// Iterator over the doc blocks of one file, in file order.
pub struct Blocks<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    state: State<'a>,
}

#[derive(Debug)]
enum State<'a> {
    SeekingMarker,
    /// Holds the marker-stripped lines of the run just consumed
    SeekingSignature(Vec<&'a str>),
    Done,
}

/// Result of one [`step`].
struct Transition<'a> {
    state: State<'a>,
    cursor: usize,
    emitted: Option<DocBlock>,
}

/// Split on every line terminator; a final terminator does not open an empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = RE_LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

impl Iterator for Blocks<'_> {
    type Item = DocBlock;

    fn next(&mut self) -> Option<DocBlock> {
        loop {
            let state = std::mem::replace(&mut self.state, State::Done);
            if matches!(state, State::Done) {
                return None;
            }
            let t = step(state, &self.lines, self.cursor);
            self.state = t.state;
            self.cursor = t.cursor;
            if t.emitted.is_some() {
                return t.emitted;
            }
        }
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

fn step<'a>(state: State<'a>, lines: &[&'a str], cursor: usize) -> Transition<'a> {
    match state {
        State::SeekingMarker => seek_marker(lines, cursor),
        State::SeekingSignature(doc) => Transition {
            state: State::SeekingMarker,
            cursor,
            emitted: Some(DocBlock {
                doc: join_doc(&doc),
                signature: find_signature(lines, cursor).to_string(),
            }),
        },
        State::Done => Transition {
            state: State::Done,
            cursor,
            emitted: None,
        },
    }
}

fn seek_marker<'a>(lines: &[&'a str], mut cursor: usize) -> Transition<'a> {
    while cursor < lines.len() && doc_text(lines[cursor]).is_none() {
        cursor += 1;
    }
    if cursor == lines.len() {
        return Transition {
            state: State::Done,
            cursor,
            emitted: None,
        };
    }

    let mut doc = Vec::new();
    while let Some(text) = lines.get(cursor).and_then(|&l| doc_text(l)) {
        doc.push(text);
        cursor += 1;
    }
    Transition {
        state: State::SeekingSignature(doc),
        cursor,
        emitted: None,
    }
}

/// Text after the marker and one optional space, if `line` is a doc line.
fn doc_text(line: &str) -> Option<&str> {
    RE_DOC_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First non-blank, non-comment line at or after `from`, trimmed.
fn find_signature<'a>(lines: &[&'a str], from: usize) -> &'a str {
    lines[from.min(lines.len())..]
        .iter()
        .find(|l| !RE_SKIPPABLE.is_match(l))
        .map(|l| l.trim())
        .unwrap_or("")
}

fn join_doc(lines: &[&str]) -> String {
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    // Last kept line is non-blank, so this only trims its trailing whitespace
    lines[..end].join("\n").trim_end().to_string()
}
