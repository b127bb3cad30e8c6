//! An abstraction for the `hitomi.la` website.
//!
//! Galleries are addressed by a numeric id alone. Everything this module
//! scrapes comes from the gallery page (`/galleries/<id>.html`): the metadata
//! from the header and info table, and the images from the thumbnail paths
//! embedded in its inline script.

pub mod client;
pub mod errors;
pub mod gallery;
pub mod meta;

pub use client::{Client, ClientBuilder, GalleryPage};
pub use gallery::{Gallery, Image, Images, Metadata};
pub use meta::{Language, language_to_code};
