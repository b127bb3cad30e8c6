//! Module containing the metadata scraped from a gallery page.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::platform::hitomi::meta::language_to_code;
use crate::stdx::error::MissingMarker;
use crate::stdx::text::{
    Scanner, capitalize, capwords, collapse_whitespace, extract_iter, remove_html, unescape,
};

/// Introduces the gallery header; every other field is searched for after it.
pub(super) const ANCHOR: &str = r#"<h1><a href="/reader/"#;

/// Value the site shows in the language row when a gallery has no language.
const NO_LANGUAGE: &str = "N/A";

/// Represents the metadata of a gallery on `hitomi.la`.
///
/// Serializes to a flat mapping with the keys `gallery_id`, `title`, `artist`,
/// `group`, `type`, `lang`, `language`, `date`, `series`, `characters` and
/// `tags`. Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub(super) gallery_id: u64,
    pub(super) title: String,
    pub(super) artist: String,
    pub(super) group: String,
    #[serde(rename = "type")]
    pub(super) kind: String,
    pub(super) lang: Option<String>,
    pub(super) language: Option<String>,
    pub(super) date: String,
    pub(super) series: String,
    pub(super) characters: String,
    pub(super) tags: String,
}

impl Metadata {
    /// Returns the id of the gallery.
    #[must_use]
    pub const fn gallery_id(&self) -> u64 {
        self.gallery_id
    }

    /// Returns the title with entities decoded and whitespace collapsed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the artists as a comma separated list, or an empty string if none are listed.
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Returns the groups as a comma separated list, or an empty string if none are listed.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the gallery type, e.g. `Doujinshi` or `Manga`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the two letter code of [`language`](Self::language), if it is a known language.
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Returns the language name, or `None` if the site lists it as `N/A`.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the date exactly as found on the page.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the series as a comma separated list, or an empty string if none are listed.
    #[must_use]
    pub fn series(&self) -> &str {
        &self.series
    }

    /// Returns the characters as a comma separated list, or an empty string if none are listed.
    #[must_use]
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// Returns the tags as a comma separated list, or an empty string if none are listed.
    #[must_use]
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Attempts to interpret [`date`](Self::date) as a timestamp.
    ///
    /// The site writes dates like `2015-10-22 20:43:00-05`, with an hour only
    /// offset. Returns `None` if the date is in any other shape.
    #[must_use]
    pub fn published(&self) -> Option<DateTime<FixedOffset>> {
        let mut date = self.date.trim().to_owned();

        let hour_only_offset = date
            .len()
            .checked_sub(3)
            .and_then(|idx| date.get(idx..=idx))
            .is_some_and(|sign| sign == "+" || sign == "-");

        if hour_only_offset {
            date.push_str("00");
        }

        DateTime::parse_from_str(&date, "%Y-%m-%d %H:%M:%S%z").ok()
    }
}

/// Scans `html` once, front to back, for the gallery fields.
///
/// Each field is searched for only after the end of the previous one, so the
/// fields must appear in this exact order. The first marker that cannot be
/// found aborts the whole parse.
pub(super) fn parse(gallery_id: u64, html: &str) -> Result<Metadata, MissingMarker> {
    let scanner = Scanner::seek(html, ANCHOR)?;

    let (title, scanner) = scanner.extract(r#".html">"#, "<")?;
    let (artist, scanner) = scanner.extract("<h2>", "</h2>")?;
    let (group, scanner) = scanner.extract("<td>Group</td><td>", "</td>")?;
    let (kind, scanner) = scanner.extract("<td>Type</td><td>", "</td>")?;
    let (language, scanner) = scanner.extract("<td>Language</td><td>", "</td>")?;
    let (series, scanner) = scanner.extract("<td>Series</td><td>", "</td>")?;
    let (characters, scanner) = scanner.extract("<td>Characters</td><td>", "</td>")?;
    let (tags, scanner) = scanner.extract("<td>Tags</td><td>", "</td>")?;
    let (date, _) = scanner.extract(r#"<span class="date">"#, "</span>")?;

    let language = if language == NO_LANGUAGE {
        None
    } else {
        Some(remove_html(language))
    };

    Ok(Metadata {
        gallery_id,
        title: collapse_whitespace(&unescape(title)),
        artist: prepare(artist),
        group: prepare(group),
        kind: capitalize(&remove_html(kind)),
        lang: language_to_code(language.as_deref()).map(str::to_owned),
        language,
        date: date.to_owned(),
        series: prepare(series),
        characters: prepare(characters),
        tags: prepare(tags),
    })
}

/// Flattens a `<ul>` of links into `Name, Other Name`.
///
/// Anything that isn't a list, including an empty cell, is treated as no entries.
fn prepare(value: &str) -> String {
    if !value.contains("<ul ") {
        return String::new();
    }

    let names = extract_iter(value, r#".html">"#, "<")
        .collect::<Vec<_>>()
        .join(", ");

    capwords(&unescape(&names))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(language: &str) -> String {
        format!(
            r#"<html><head><title>Sample Title | Hitomi.la</title></head><body>
<div class="gallery">
<h1><a href="/reader/867789.html">  Sample &amp;   Title
</a></h1>
<h2><ul class="comma-list"><li><a href="/artist/someone-all-1.html">some ONE</a></li></ul></h2>
<table>
<tr><td>Group</td><td>N/A</td></tr>
<tr><td>Type</td><td><a href="/type/doujinshi-all-1.html">doujinshi</a></td></tr>
<tr><td>Language</td><td>{language}</td></tr>
<tr><td>Series</td><td><ul class="tags"><li><a href="/series/original-all-1.html">original</a></li></ul></td></tr>
<tr><td>Characters</td><td></td></tr>
<tr><td>Tags</td><td><ul class="tags"><li><a href="/tag/female%3Aglasses-all-1.html">glasses ♀</a></li><li><a href="/tag/full%20color-all-1.html">full color</a></li></ul></td></tr>
</table>
<span class="date">2015-10-22 20:43:00-05</span>
</div></body></html>"#
        )
    }

    #[test]
    fn should_parse_every_field() -> Result<(), MissingMarker> {
        let html = page(r#"<a href="/index-english-1.html">English</a>"#);
        let metadata = parse(867_789, &html)?;

        assert_eq!(867_789, metadata.gallery_id());
        assert_eq!("Sample & Title", metadata.title());
        assert_eq!("Some One", metadata.artist());
        assert_eq!("", metadata.group());
        assert_eq!("Doujinshi", metadata.kind());
        assert_eq!(Some("English"), metadata.language());
        assert_eq!(Some("en"), metadata.lang());
        assert_eq!("Original", metadata.series());
        assert_eq!("", metadata.characters());
        assert_eq!("Glasses ♀, Full Color", metadata.tags());
        assert_eq!("2015-10-22 20:43:00-05", metadata.date());

        Ok(())
    }

    #[test]
    fn should_leave_language_absent_for_placeholder() -> Result<(), MissingMarker> {
        let html = page("N/A");
        let metadata = parse(1, &html)?;

        assert_eq!(None, metadata.language());
        assert_eq!(None, metadata.lang());

        Ok(())
    }

    #[test]
    fn should_keep_unknown_language_without_code() -> Result<(), MissingMarker> {
        let html = page(r#"<a href="/index-klingon-1.html">Klingon</a>"#);
        let metadata = parse(1, &html)?;

        assert_eq!(Some("Klingon"), metadata.language());
        assert_eq!(None, metadata.lang());

        Ok(())
    }

    #[test]
    fn should_fail_without_header_anchor() {
        let html = page("N/A").replace("/reader/", "/galleries/");
        let err = parse(1, &html).unwrap_err();

        assert_eq!(ANCHOR, err.marker());
    }

    #[test]
    fn should_fail_when_a_row_is_missing() {
        let html = page("N/A").replace("<td>Series</td>", "<td>Parody</td>");
        let err = parse(1, &html).unwrap_err();

        assert_eq!("<td>Series</td><td>", err.marker());
    }

    #[test]
    fn should_not_match_rows_out_of_order() {
        // `Type` moved ahead of the header can't be picked up from before the anchor.
        let html = page("N/A").replace(
            r#"<tr><td>Type</td><td><a href="/type/doujinshi-all-1.html">doujinshi</a></td></tr>"#,
            "",
        );
        let html = html.replace(
            "<div class=\"gallery\">",
            "<td>Type</td><td>manga</td><div class=\"gallery\">",
        );
        let err = parse(1, &html).unwrap_err();

        assert_eq!("<td>Type</td><td>", err.marker());
    }

    #[test]
    fn should_not_read_rows_before_the_previous_field() {
        // Date before the tags row can't be matched once the scan has passed it.
        let html = page("N/A").replace(
            r#"<span class="date">2015-10-22 20:43:00-05</span>"#,
            "",
        );
        let html = html.replace(
            "<tr><td>Group</td>",
            r#"<span class="date">misplaced</span><tr><td>Group</td>"#,
        );
        let err = parse(1, &html).unwrap_err();

        assert_eq!(r#"<span class="date">"#, err.marker());
    }

    #[test]
    fn should_prepare_lists() {
        assert_eq!("", prepare(""));
        assert_eq!("", prepare("<span>no list</span>"));
        assert_eq!(
            "John Smith, Jane Doe",
            prepare(
                r#"<ul class="x"><li><a href="/a.html">john smith</a></li><li><a href="/b.html">JANE DOE</a></li></ul>"#
            )
        );
    }

    #[test]
    fn should_unescape_prepared_lists() {
        assert_eq!(
            "Tom & Jerry",
            prepare(r#"<ul class="x"><li><a href="/a.html">tom &amp; jerry</a></li></ul>"#)
        );
    }

    #[test]
    fn should_parse_published_date() -> Result<(), MissingMarker> {
        let metadata = parse(1, &page("N/A"))?;
        let published = metadata.published().expect("date should be parsable");

        assert_eq!(
            "2015-10-22T20:43:00-05:00",
            published.to_rfc3339(),
            "hour only offset should be expanded"
        );

        Ok(())
    }

    #[test]
    fn should_not_parse_unknown_date_shape() -> Result<(), MissingMarker> {
        let mut metadata = parse(1, &page("N/A"))?;
        metadata.date = "yesterday".to_owned();

        assert_eq!(None, metadata.published());

        Ok(())
    }
}
