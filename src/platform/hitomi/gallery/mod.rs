//! Module containing things related to a gallery on `hitomi.la`.

pub mod images;
pub mod metadata;

use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::stdx::text::{Lenient, parse_int};

pub use images::{Image, Images};
pub use metadata::Metadata;

use super::errors::GalleryError;

static GALLERY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?hitomi\.la/(?:galleries|reader)/(\d+)")
        .expect("gallery url regex should be valid")
});

/// Represents a gallery on `hitomi.la`.
///
/// Holds only the id and the url of its page. Scraping is done on a page that
/// was fetched separately, see [`Client::gallery`](super::Client::gallery).
///
/// # Example
///
/// ```
/// # use hitomi::platform::hitomi::Gallery;
/// let gallery = Gallery::from_url("https://hitomi.la/reader/867789.html")?;
///
/// assert_eq!(867789, gallery.id());
/// assert_eq!("https://hitomi.la/galleries/867789.html", gallery.url());
/// # Ok::<(), hitomi::platform::hitomi::errors::GalleryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gallery {
    id: u64,
    url: String,
}

impl Gallery {
    /// Constructs a [`Gallery`] from its `id`.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            url: format!("https://hitomi.la/galleries/{id}.html"),
        }
    }

    /// Constructs a [`Gallery`] from a decimal id as it appears in a url.
    ///
    /// Anything that doesn't parse as an id becomes gallery `0` rather than an
    /// error. This mirrors how ids are read from matched urls, where a bad id is
    /// passed along and surfaces later as a missing page.
    #[must_use]
    pub fn from_id_str(id: &str) -> Self {
        let id = match parse_int(id) {
            Lenient::Parsed(id) => id,
            Lenient::Fallback(fallback) => {
                tracing::debug!("`{id}` is not a valid gallery id, falling back to `{fallback}`");
                fallback
            }
        };

        Self::new(id)
    }

    /// Constructs a [`Gallery`] from a `galleries` or `reader` url.
    ///
    /// The scheme is optional and the host is matched case-insensitively, e.g.
    /// `hitomi.la/galleries/867789.html` or `HTTPS://HITOMI.LA/reader/867789`.
    pub fn from_url(url: &str) -> Result<Self, GalleryError> {
        let id = GALLERY_URL
            .captures(url)
            .and_then(|captures| captures.get(1))
            .ok_or(GalleryError::InvalidUrl(
                "url should be of the form `hitomi.la/galleries/<id>` or `hitomi.la/reader/<id>`",
            ))?;

        Ok(Self::from_id_str(id.as_str()))
    }

    /// Returns the id of the gallery.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the url of the gallery page.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the url of the gallery reader.
    #[must_use]
    pub fn reader_url(&self) -> String {
        format!("https://hitomi.la/reader/{}.html", self.id)
    }

    /// Scrapes the metadata from the gallery page `html`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::StructuralMismatch`] if any of the fields can't be
    /// found, in the order the page lists them.
    pub fn metadata(&self, html: &str) -> Result<Metadata, GalleryError> {
        metadata::parse(self.id, html).map_err(|err| {
            tracing::warn!(gallery = self.id, "{err}");
            GalleryError::StructuralMismatch(err)
        })
    }

    /// Returns the images listed on the gallery page `html`, in page order.
    ///
    /// A page without thumbnails gives an empty iterator, not an error.
    #[must_use]
    pub fn images<'a>(&self, html: &'a str) -> Images<'a> {
        Images::new(self.id, html)
    }
}

impl fmt::Display for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_template_page_url() {
        let gallery = Gallery::new(867_789);

        assert_eq!("https://hitomi.la/galleries/867789.html", gallery.url());
        assert_eq!("https://hitomi.la/reader/867789.html", gallery.reader_url());
    }

    #[test]
    fn should_fall_back_to_zero_for_malformed_id() {
        assert_eq!(0, Gallery::from_id_str("not-a-number").id());
        assert_eq!(42, Gallery::from_id_str("42").id());
    }

    #[test]
    fn should_match_gallery_and_reader_urls() -> Result<(), GalleryError> {
        assert_eq!(867_789, Gallery::from_url("https://hitomi.la/galleries/867789.html")?.id());
        assert_eq!(867_789, Gallery::from_url("https://hitomi.la/reader/867789.html")?.id());
        assert_eq!(1_036_181, Gallery::from_url("hitomi.la/galleries/1036181")?.id());
        assert_eq!(12, Gallery::from_url("HTTP://HITOMI.LA/Reader/12.html")?.id());

        Ok(())
    }

    #[test]
    fn should_keep_ids_past_u32() -> Result<(), GalleryError> {
        let gallery = Gallery::from_url("hitomi.la/galleries/4294967296")?;

        assert_eq!(4_294_967_296, gallery.id());
        assert_eq!("https://hitomi.la/galleries/4294967296.html", gallery.url());
        assert_eq!(
            4_294_967_296,
            Gallery::from_url("https://hitomi.la/reader/4294967296.html")?.id()
        );

        Ok(())
    }

    #[test]
    fn should_reject_other_urls() {
        assert!(matches!(
            Gallery::from_url("https://example.com/galleries/867789.html"),
            Err(GalleryError::InvalidUrl(_))
        ));
        assert!(matches!(
            Gallery::from_url("https://hitomi.la/tag/glasses-all-1.html"),
            Err(GalleryError::InvalidUrl(_))
        ));
    }
}
