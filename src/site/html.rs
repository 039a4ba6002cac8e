//! Page layout and index page generator.
//!
//! Pages are static HTML with no JavaScript. Every record value and every
//! configured string passes through `html_escape` before insertion.

use crate::core::schema::SiteEntry;

use super::style::STYLESHEET_PATH;

/// Options shared by all rendered pages.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Site title shown on the index page and in its `<title>`
    pub title: String,
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
    /// Columns shown under each name on the index page, when non-blank
    pub summary_columns: Vec<String>,
    /// Column holding an image URL, shown as card thumbnail and detail hero
    pub image_column: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: "Restaurants".to_string(),
            lang: "en".to_string(),
            summary_columns: vec!["category".to_string(), "address".to_string()],
            image_column: None,
        }
    }
}

/// HTML-escape a string for safe insertion into element content or a quoted attribute.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Returns true for absolute http(s) URLs, the only values rendered as links or images.
pub(crate) fn is_web_url(value: &str) -> bool {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://"))
        && !value.chars().any(char::is_whitespace)
}

/// Render the configured image of `entry` as an `<img>` with the given class.
///
/// Returns `None` when no image column is configured or its value is not a web URL.
pub(crate) fn render_image(entry: &SiteEntry, options: &RenderOptions, class: &str) -> Option<String> {
    let column = options.image_column.as_deref()?;
    let url = entry.record.get(column)?.trim();
    if !is_web_url(url) {
        return None;
    }
    Some(format!(
        r#"<img class="{class}" src="{src}" alt="{alt}" loading="lazy">"#,
        class = class,
        src = html_escape(url),
        alt = html_escape(&entry.record.name),
    ))
}

/// Wrap `body` in the shared document layout.
///
/// `depth` is the number of directories between the page and the output
/// root; it decides the relative stylesheet link.
pub fn render_page(title: &str, body: &str, depth: usize, options: &RenderOptions) -> String {
    let prefix = "../".repeat(depth);
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{prefix}{stylesheet}">
</head>
<body>
<div class="page">
{body}
</div>
</body>
</html>
"#,
        lang = html_escape(&options.lang),
        title = html_escape(title),
        prefix = prefix,
        stylesheet = STYLESHEET_PATH,
        body = body,
    )
}

/// Render one index list item.
fn render_card(entry: &SiteEntry, options: &RenderOptions) -> String {
    let summary: Vec<String> = options
        .summary_columns
        .iter()
        .filter_map(|column| {
            entry.record.get(column).map(|value| {
                format!(
                    r#"<span class="field field-{}">{}</span>"#,
                    html_escape(&crate::core::normalize(column)),
                    html_escape(value)
                )
            })
        })
        .collect();

    let summary_block = if summary.is_empty() {
        String::new()
    } else {
        format!("\n<p class=\"summary\">{}</p>", summary.join(" "))
    };

    let image_block = render_image(entry, options, "card-image")
        .map(|img| format!("{img}\n"))
        .unwrap_or_default();

    format!(
        r#"<li class="card">{image}<a class="card-link" href="{href}">{name}</a>{summary}</li>"#,
        image = image_block,
        href = html_escape(&entry.href()),
        name = html_escape(&entry.record.name),
        summary = summary_block,
    )
}

/// Render the index page listing every entry, in order, with a link to its detail page.
pub fn render_index_html(entries: &[SiteEntry], options: &RenderOptions) -> String {
    let count = entries.len();
    let noun = if count == 1 { "restaurant" } else { "restaurants" };

    let listing = if entries.is_empty() {
        "<p class=\"muted\">No restaurants listed.</p>".to_string()
    } else {
        let cards: Vec<String> = entries.iter().map(|e| render_card(e, options)).collect();
        format!("<ul class=\"grid\">\n{}\n</ul>", cards.join("\n"))
    };

    let body = format!(
        r#"<header class="hero-header">
<h1>{title}</h1>
<p>{count} {noun}</p>
</header>
{listing}"#,
        title = html_escape(&options.title),
        count = count,
        noun = noun,
        listing = listing,
    );

    render_page(&options.title, &body, 0, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, assign_slugs};
    use indexmap::IndexMap;

    fn entries(rows: &[&[(&str, &str)]]) -> Vec<SiteEntry> {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, pairs)| {
                let fields: IndexMap<String, String> = pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                Record::new(i + 1, fields, "name")
            })
            .collect();
        assign_slugs(records)
    }

    #[test]
    fn test_html_escape_basic() {
        assert_eq!(html_escape("hello"), "hello");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_html_escape_unicode_passthrough() {
        assert_eq!(html_escape("餐廳 Café"), "餐廳 Café");
    }

    #[test]
    fn test_render_page_depth_prefix() {
        let options = RenderOptions::default();
        let root = render_page("T", "", 0, &options);
        let nested = render_page("T", "", 2, &options);
        assert!(root.contains(r#"href="assets/style.css""#));
        assert!(nested.contains(r#"href="../../assets/style.css""#));
        assert!(root.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn test_render_index_lists_in_order() {
        let entries = entries(&[
            &[("name", "Golden Dragon"), ("address", "123 Main St")],
            &[("name", "Noodle Bar"), ("address", "9 Side St")],
        ]);
        let html = render_index_html(&entries, &RenderOptions::default());

        let first = html.find(r#"href="restaurants/golden-dragon/""#).unwrap();
        let second = html.find(r#"href="restaurants/noodle-bar/""#).unwrap();
        assert!(first < second);
        assert!(html.contains("123 Main St"));
        assert!(html.contains("<p>2 restaurants</p>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_render_index_empty() {
        let html = render_index_html(&[], &RenderOptions::default());
        assert!(html.contains("<p>0 restaurants</p>"));
        assert!(html.contains("No restaurants listed."));
        assert!(!html.contains("restaurants/"));
    }

    #[test]
    fn test_render_index_escapes_names() {
        let entries = entries(&[&[("name", "<script>alert(1)</script> & Co")]]);
        let html = render_index_html(&entries, &RenderOptions::default());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; Co"));
    }

    #[test]
    fn test_render_index_escapes_title() {
        let options = RenderOptions {
            title: "Eat <here>".to_string(),
            ..RenderOptions::default()
        };
        let html = render_index_html(&[], &options);
        assert!(html.contains("<title>Eat &lt;here&gt;</title>"));
        assert!(html.contains("<h1>Eat &lt;here&gt;</h1>"));
    }

    #[test]
    fn test_render_index_skips_blank_summary_columns() {
        let entries = entries(&[&[("name", "A"), ("category", ""), ("address", "")]]);
        let html = render_index_html(&entries, &RenderOptions::default());
        assert!(!html.contains("class=\"summary\""));
    }

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://example.com"));
        assert!(is_web_url("HTTP://EXAMPLE.COM"));
        assert!(!is_web_url("ftp://example.com"));
        assert!(!is_web_url("https://exa mple.com"));
        assert!(!is_web_url("example.com"));
    }

    #[test]
    fn test_render_index_card_image() {
        let entries = entries(&[
            &[("name", "Sushi \"Go\""), ("photo", "https://img.example.com/a.jpg?w=1&h=2")],
            &[("name", "Noodle Bar"), ("photo", "")],
            &[("name", "Diner"), ("photo", "javascript:alert(1)")],
        ]);
        let options = RenderOptions {
            image_column: Some("photo".to_string()),
            ..RenderOptions::default()
        };
        let html = render_index_html(&entries, &options);

        assert!(html.contains(
            "<li class=\"card\"><img class=\"card-image\" src=\"https://img.example.com/a.jpg?w=1&amp;h=2\" \
             alt=\"Sushi &quot;Go&quot;\" loading=\"lazy\">\n<a class=\"card-link\""
        ));
        assert_eq!(html.matches("<img").count(), 1);
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_render_index_no_image_column_no_img() {
        let entries = entries(&[&[("name", "A"), ("photo", "https://img.example.com/a.jpg")]]);
        let html = render_index_html(&entries, &RenderOptions::default());
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_render_index_deterministic() {
        let make = || entries(&[&[("name", "Cafe!!")], &[("name", "Cafe!!")]]);
        let options = RenderOptions::default();
        assert_eq!(render_index_html(&make(), &options), render_index_html(&make(), &options));
    }
}
