//! Marker based text extraction.
//!
//! Pages are scraped by locating literal delimiter text rather than by building
//! a DOM. All positions are byte offsets into the original document and always
//! land on a `char` boundary, as they are derived from the ends of matches.

use super::error::{Marker, MissingMarker};
use regex::Regex;
use std::{iter::FusedIterator, sync::LazyLock};

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("html tag regex should be valid"));

/// Returns the text between `begin` and `end`, searching from `pos`, along with
/// the position just past `end`.
///
/// `None` if either marker is missing or `pos` is outside of `text`.
pub(crate) fn extract<'a>(
    text: &'a str,
    begin: &str,
    end: &str,
    pos: usize,
) -> Option<(&'a str, usize)> {
    let first = pos + text.get(pos..)?.find(begin)? + begin.len();
    let last = first + text.get(first..)?.find(end)?;
    Some((text.get(first..last)?, last + end.len()))
}

/// Lazily yields every non-overlapping capture between `begin` and `end`.
pub(crate) fn extract_iter<'a>(
    text: &'a str,
    begin: &'static str,
    end: &'static str,
) -> Extractions<'a> {
    Extractions {
        text,
        begin,
        end,
        pos: Some(0),
    }
}

/// Iterator returned by [`extract_iter`].
///
/// Each step resumes at the end of the previous match. It cannot be rewound;
/// a second pass needs a fresh call on the original text.
#[derive(Debug)]
pub(crate) struct Extractions<'a> {
    text: &'a str,
    begin: &'static str,
    end: &'static str,
    pos: Option<usize>,
}

impl<'a> Iterator for Extractions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos?;

        if let Some((captured, next)) = extract(self.text, self.begin, self.end, pos) {
            self.pos = Some(next);
            Some(captured)
        } else {
            self.pos = None;
            None
        }
    }
}

impl FusedIterator for Extractions<'_> {}

/// A forward-only cursor over a document.
///
/// Every extraction consumes the scanner and hands back a new one positioned
/// after the capture, so captures are taken strictly in document order and can
/// never overlap or go back to an earlier occurrence of a marker.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Positions a scanner at the first occurrence of `anchor`.
    pub(crate) fn seek(text: &'a str, anchor: &'static str) -> Result<Self, MissingMarker> {
        let pos = text.find(anchor).marker(anchor)?;
        Ok(Self { text, pos })
    }

    /// Captures the text between the next `begin` and the `end` following it.
    pub(crate) fn extract(
        self,
        begin: &'static str,
        end: &'static str,
    ) -> Result<(&'a str, Self), MissingMarker> {
        let first = self
            .text
            .get(self.pos..)
            .and_then(|rest| rest.find(begin))
            .marker(begin)?
            + self.pos
            + begin.len();

        let last = self
            .text
            .get(first..)
            .and_then(|rest| rest.find(end))
            .marker(end)?
            + first;

        let captured = self.text.get(first..last).marker(end)?;

        let next = Self {
            text: self.text,
            pos: last + end.len(),
        };

        Ok((captured, next))
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

/// Replaces html tags with spaces and collapses the remaining whitespace.
pub(crate) fn remove_html(text: &str) -> String {
    collapse_whitespace(&TAG.replace_all(text, " "))
}

/// Decodes html entities, e.g. `&amp;` to `&`.
pub(crate) fn unescape(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Joins whitespace separated words with a single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every whitespace separated word, joining them with a single space.
pub(crate) fn capwords(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of a forgiving integer parse.
///
/// Malformed input is not an error: it falls back to a default so that a bad
/// identifier is carried along instead of aborting the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lenient<T> {
    Parsed(T),
    Fallback(T),
}

pub(crate) fn parse_int(text: &str) -> Lenient<u64> {
    match text.trim().parse::<u64>() {
        Ok(value) => Lenient::Parsed(value),
        Err(_) => Lenient::Fallback(0),
    }
}
