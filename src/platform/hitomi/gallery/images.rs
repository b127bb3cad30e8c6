//! Module containing the image urls of a gallery.

use crate::stdx::text::{Extractions, extract_iter};
use std::iter::FusedIterator;

/// Number of image servers the site spreads galleries across.
const FRONTENDS: u64 = 2;

/// Returns the image server subdomain for a gallery, e.g. `aa` or `ba`.
///
/// Galleries are spread over the servers by `id % 2`, except that ids ending
/// in `1` always live on the first server. Asking the wrong server for an image
/// gives a broken link, so this has to match the site exactly.
#[must_use]
pub fn subdomain(id: u64) -> String {
    let offset = if id % 10 == 1 { 0 } else { id % FRONTENDS };

    // `offset` is always below `FRONTENDS`.
    let letter = u8::try_from(offset).map_or('a', |offset| char::from(b'a' + offset));

    format!("{letter}a")
}

/// Returns the url that thumbnail paths of the gallery are appended to.
#[must_use]
pub fn base_url(id: u64) -> String {
    format!("https://{}.hitomi.la/galleries/", subdomain(id))
}

/// Represents a single image of a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    pub(super) url: String,
    pub(super) hint: Option<String>,
}

impl Image {
    /// Returns the absolute download url.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns a filename to save the image as, if the site suggests one.
    ///
    /// `hitomi.la` never does, so this is always `None`.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Consumes the image, returning the `(url, hint)` pair.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.url, self.hint)
    }
}

/// Lazily yields the images of a gallery in page order.
///
/// Each step scans forward from the previous thumbnail. The iterator borrows
/// the page and cannot be rewound; call [`Gallery::images`](super::Gallery::images)
/// again for a second pass.
#[derive(Debug)]
pub struct Images<'a> {
    base: String,
    paths: Extractions<'a>,
}

impl<'a> Images<'a> {
    pub(super) fn new(id: u64, html: &'a str) -> Self {
        let base = base_url(id);
        tracing::debug!(gallery = id, "serving images from `{base}`");

        Self {
            base,
            paths: extract_iter(html, "'//tn.hitomi.la/smalltn/", ".jpg',"),
        }
    }
}

impl Iterator for Images<'_> {
    type Item = Image;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;

        Some(Image {
            url: format!("{}{path}", self.base),
            hint: None,
        })
    }
}

impl FusedIterator for Images<'_> {}
