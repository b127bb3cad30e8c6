//! Represents a client abstraction for `hitomi.la`.

use super::{
    errors::{ClientError, GalleryError},
    gallery::{Gallery, Images, Metadata},
};
use std::time::Duration;

/// Default user agent: `hitomi/VERSION`.
pub(crate) static DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// A builder for configuring and creating instances of [`Client`] with custom settings.
///
/// # Example
///
/// ```
/// # use hitomi::platform::hitomi::ClientBuilder;
/// # use std::time::Duration;
/// let client = ClientBuilder::new()
///     .user_agent("custom-agent/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok::<(), hitomi::platform::hitomi::errors::ClientError>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    builder: reqwest::ClientBuilder,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    ///
    /// This includes a default user agent (`hitomi/VERSION`), and is the starting point for configuring a `Client`.
    #[must_use]
    pub fn new() -> Self {
        let builder = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .use_rustls_tls()
            .https_only(true)
            .brotli(true);

        Self { builder }
    }

    /// Sets a custom `User-Agent` header for the [`Client`].
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        Self {
            builder: self.builder.user_agent(user_agent),
        }
    }

    /// Sets a timeout for each request, from connecting until the body has been read.
    ///
    /// There is no timeout by default.
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            builder: self.builder.timeout(timeout),
        }
    }

    /// Consumes the `ClientBuilder` and returns a fully-configured [`Client`].
    ///
    /// # Errors
    ///
    /// This method returns a [`ClientError`] if the underlying HTTP client could not be built,
    /// such as when TLS initialization fails or the DNS resolver cannot load the system configuration.
    pub fn build(self) -> Result<Client, ClientError> {
        Ok(Client {
            http: self
                .builder
                .build()
                .map_err(|err| ClientError::Unexpected(err.into()))?,
        })
    }
}

/// A high-level, asynchronous client to fetch gallery pages from `hitomi.la`.
///
/// Fetching is the only thing the client does; everything scraped from a page
/// is computed from the page text alone. Requests are not retried or throttled.
///
/// # Example
///
/// ```
/// # use hitomi::platform::hitomi::Client;
/// let client = Client::new();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
}

// Creation impls
impl Client {
    /// Instantiates a new [`Client`] with the default user agent: `hitomi/VERSION`.
    ///
    /// # Panics
    ///
    /// This function will panic if the TLS backend cannot be initialized or if the DNS resolver
    /// fails to load the system's configuration. Use [`ClientBuilder`] to handle that as an error.
    #[must_use]
    pub fn new() -> Self {
        ClientBuilder::new().build().expect("Client::new()")
    }

    /// Returns a [`ClientBuilder`] for creating a custom-configured `Client`.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

// Public facing impls
impl Client {
    /// Fetches the page of the gallery with the given `id`.
    ///
    /// Returns `None` if no gallery exists for the `id`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use hitomi::platform::hitomi::{Client, errors::Error};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Error> {
    /// let client = Client::new();
    ///
    /// let Some(page) = client.gallery(867789).await? else {
    ///     unreachable!("gallery is known to exist");
    /// };
    ///
    /// println!("{}", page.metadata()?.title());
    ///
    /// for image in page.images() {
    ///     println!("{}", image.url());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn gallery(&self, id: u64) -> Result<Option<GalleryPage>, GalleryError> {
        self.fetch(Gallery::new(id)).await
    }

    /// Fetches the page of a gallery from a `galleries` or `reader` url.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidUrl`] if the url isn't a gallery url.
    pub async fn gallery_from_url(&self, url: &str) -> Result<Option<GalleryPage>, GalleryError> {
        self.fetch(Gallery::from_url(url)?).await
    }

    /// Fetches the raw html of the page of `gallery`.
    ///
    /// Returns `None` if the site responds with `404 Not Found`.
    pub async fn page(&self, gallery: &Gallery) -> Result<Option<String>, ClientError> {
        tracing::debug!("fetching `{gallery}`");

        let response = self.http.get(gallery.url()).send().await?;
        let status = response.status();

        tracing::debug!("`{gallery}` responded with `{status}`");

        if status == 404 {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(
                status.as_u16(),
                gallery.url().to_owned(),
            ));
        }

        Ok(Some(response.text().await?))
    }
}

// Internal only impls
impl Client {
    async fn fetch(&self, gallery: Gallery) -> Result<Option<GalleryPage>, GalleryError> {
        let Some(html) = self.page(&gallery).await? else {
            return Ok(None);
        };

        Ok(Some(GalleryPage { gallery, html }))
    }
}

/// A fetched gallery page, ready to be scraped.
///
/// Every call scrapes the same snapshot of the page, so repeated calls give
/// identical results.
#[derive(Debug, Clone)]
pub struct GalleryPage {
    gallery: Gallery,
    html: String,
}

impl GalleryPage {
    /// Pairs a page fetched elsewhere with its gallery.
    #[must_use]
    pub fn new(gallery: Gallery, html: String) -> Self {
        Self { gallery, html }
    }

    /// Returns the gallery the page belongs to.
    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Returns the raw html of the page.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Scrapes the gallery metadata, see [`Gallery::metadata`].
    pub fn metadata(&self) -> Result<Metadata, GalleryError> {
        self.gallery.metadata(&self.html)
    }

    /// Lazily lists the gallery images, see [`Gallery::images`].
    #[must_use]
    pub fn images(&self) -> Images<'_> {
        self.gallery.images(&self.html)
    }
}
