use thiserror::Error;

/// A literal marker the scraper depends on was not found in the page.
///
/// The markup of `hitomi.la` is the contract this library is built against,
/// so a missing marker means the page changed shape underneath us (or the
/// document is not a gallery page at all). Nothing is salvaged from such a
/// page: a partially filled, possibly misaligned, set of fields is worse than
/// no fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed page: failed to find `{0}` marker")]
pub struct MissingMarker(pub(crate) &'static str);

impl MissingMarker {
    /// The marker text that could not be found.
    #[inline]
    #[must_use]
    pub fn marker(&self) -> &'static str {
        self.0
    }
}

pub(crate) trait Marker<T> {
    /// Converts an absent value into a [`MissingMarker`] naming `marker`.
    fn marker(self, marker: &'static str) -> Result<T, MissingMarker>;
}

impl<T> Marker<T> for Option<T> {
    #[inline]
    fn marker(self, marker: &'static str) -> Result<T, MissingMarker> {
        self.ok_or(MissingMarker(marker))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_name_missing_marker() {
        let err = None::<usize>.marker("<h2>").unwrap_err();

        pretty_assertions::assert_eq!("<h2>", err.marker());
        pretty_assertions::assert_eq!(
            "malformed page: failed to find `<h2>` marker",
            err.to_string()
        );
    }

    #[test]
    fn should_pass_through_present_value() {
        pretty_assertions::assert_eq!(Ok(7), Some(7).marker("unused"));
    }
}
