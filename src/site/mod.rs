//! Static site rendering.
//!
//! Produces the index page, one detail page per restaurant, an `index.json`
//! manifest and the default stylesheet. Pages are plain HTML with no
//! JavaScript; all record data is HTML-escaped.

pub mod build;
pub mod detail_html;
pub mod html;
pub mod manifest;
pub mod style;

pub use build::{BuildReport, INDEX_FILE, PageFailure, build_site, build_site_with};
pub use detail_html::render_detail_html;
pub use html::{RenderOptions, html_escape, render_index_html, render_page};
pub use manifest::{MANIFEST_FILE, ManifestEntry, render_manifest};
pub use style::{STYLESHEET, STYLESHEET_PATH, write_stylesheet};
