//! Per-restaurant detail page generator.
//!
//! Lists every column of the record in header order. Uses <details> for the
//! raw record block, so no JavaScript is needed.

use crate::core::schema::SiteEntry;
use crate::{SiteError, SiteResult};

use super::html::{RenderOptions, html_escape, is_web_url, render_image, render_page};

/// Detail pages live at `restaurants/<slug>/index.html`.
const DETAIL_DEPTH: usize = 2;

/// Render one field value for the detail table.
fn render_value(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        "&mdash;".to_string()
    } else if is_web_url(value) {
        let escaped = html_escape(value);
        format!(r#"<a href="{escaped}" target="_blank" rel="noopener">{escaped}</a>"#)
    } else {
        html_escape(value)
    }
}

/// Render a detail page as static HTML.
///
/// The output is a complete HTML document with:
/// - Back link to the index
/// - Restaurant name, and the hero image when an image column is configured
/// - Table of all columns
/// - Raw record as JSON (collapsible)
///
/// # Errors
/// Returns `SiteError::Record` if the raw record cannot be serialized.
pub fn render_detail_html(entry: &SiteEntry, options: &RenderOptions) -> SiteResult<String> {
    let name = html_escape(&entry.record.name);

    let rows: Vec<String> = entry
        .record
        .fields
        .iter()
        .map(|(column, value)| {
            format!(
                "<tr><th scope=\"row\">{}</th><td>{}</td></tr>",
                html_escape(column),
                render_value(value)
            )
        })
        .collect();

    let raw_json = serde_json::to_string_pretty(&entry.record.fields).map_err(|e| SiteError::Record {
        row: entry.record.row,
        message: format!("failed to serialize record: {e}"),
    })?;

    let hero = render_image(entry, options, "hero")
        .map(|img| format!("\n{img}"))
        .unwrap_or_default();

    let body = format!(
        r#"<main class="detail">
<a class="back-link" href="../../index.html">&larr; Back to all restaurants</a>
<header>
<h1>{name}</h1>
</header>{hero}
<section>
<table class="fields">
{rows}
</table>
</section>
<details>
<summary>Raw record</summary>
<pre>{raw_json}</pre>
</details>
</main>"#,
        name = name,
        hero = hero,
        rows = rows.join("\n"),
        raw_json = html_escape(&raw_json),
    );

    Ok(render_page(&entry.record.name, &body, DETAIL_DEPTH, options))
}
