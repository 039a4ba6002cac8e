//! Site assembly: detail pages, index, manifest and stylesheet.
//!
//! The previous index and manifest are removed before any old page is, so an
//! interrupted rebuild never leaves links to deleted pages. Detail pages are
//! written next. The index and manifest are rendered from the pages that were
//! actually written, so a page that failed never gets a link.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::core::schema::{RESTAURANTS_DIR, SiteEntry};
use crate::storage::{FsSink, PageSink};
use crate::{SiteError, SiteResult};

use super::detail_html::render_detail_html;
use super::html::{RenderOptions, render_index_html};
use super::manifest::{MANIFEST_FILE, ManifestEntry, render_manifest};
use super::style::write_stylesheet;

/// Index page location relative to the output root.
pub const INDEX_FILE: &str = "index.html";

/// A detail page that could not be written.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFailure {
    pub row: usize,
    pub name: String,
    pub slug: String,
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a site build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// Number of entries handed to the build
    pub total: usize,
    /// Pages written and linked from the index, in input order
    pub written: Vec<ManifestEntry>,
    /// Pages that failed; absent from the index
    pub failures: Vec<PageFailure>,
    /// Whether the default stylesheet was written this run
    pub stylesheet_written: bool,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into an error if any page failed.
    pub fn into_result(self) -> SiteResult<BuildReport> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(SiteError::RenderFailures {
                failed: self.failures.len(),
                total: self.total,
            })
        }
    }
}

/// Remove the previous index and manifest.
fn remove_previous_listing(out_dir: &Path) -> SiteResult<()> {
    for name in [INDEX_FILE, MANIFEST_FILE] {
        let path = out_dir.join(name);
        if path.is_file() {
            debug!(path = %path.display(), "removing previous listing");
            fs::remove_file(&path)
                .map_err(|e| SiteError::output(&path, format!("failed to remove file: {e}")))?;
        }
    }
    Ok(())
}

/// Remove pages left over from a previous build so stale slugs never survive.
fn clear_restaurants_dir(out_dir: &Path) -> SiteResult<()> {
    let dir = out_dir.join(RESTAURANTS_DIR);
    if dir.exists() {
        debug!(path = %dir.display(), "removing previous restaurant pages");
        fs::remove_dir_all(&dir)
            .map_err(|e| SiteError::output(&dir, format!("failed to clear directory: {e}")))?;
    }
    Ok(())
}

/// Build the site under `out_dir` on the local filesystem.
pub fn build_site(
    entries: &[SiteEntry],
    out_dir: &Path,
    options: &RenderOptions,
) -> SiteResult<BuildReport> {
    build_site_with(entries, out_dir, options, &mut FsSink)
}

/// Build the site, writing every file through `sink`.
///
/// # Errors
/// Returns `SiteError::Output` if the output root cannot be prepared or the
/// index, manifest or stylesheet cannot be written. Individual detail page
/// failures do not abort the build; they are collected in the report.
pub fn build_site_with<S: PageSink>(
    entries: &[SiteEntry],
    out_dir: &Path,
    options: &RenderOptions,
    sink: &mut S,
) -> SiteResult<BuildReport> {
    fs::create_dir_all(out_dir)
        .map_err(|e| SiteError::output(out_dir, format!("failed to create output directory: {e}")))?;
    remove_previous_listing(out_dir)?;
    clear_restaurants_dir(out_dir)?;

    let mut report = BuildReport {
        total: entries.len(),
        ..BuildReport::default()
    };
    let mut linked: Vec<SiteEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        let path = out_dir.join(entry.page_path());
        let outcome = render_detail_html(entry, options)
            .and_then(|html| sink.write_page(&path, html.as_bytes()));
        match outcome {
            Ok(()) => {
                debug!(slug = %entry.slug, "wrote detail page");
                report.written.push(ManifestEntry::from(entry));
                linked.push(entry.clone());
            }
            Err(e) => {
                error!(
                    row = entry.record.row,
                    name = %entry.record.name,
                    path = %path.display(),
                    "failed to write detail page: {e}"
                );
                report.failures.push(PageFailure {
                    row: entry.record.row,
                    name: entry.record.name.clone(),
                    slug: entry.slug.to_string(),
                    path,
                    message: e.to_string(),
                });
            }
        }
    }

    let index_path = out_dir.join(INDEX_FILE);
    sink.write_page(&index_path, render_index_html(&linked, options).as_bytes())?;

    let manifest_path = out_dir.join(MANIFEST_FILE);
    sink.write_page(&manifest_path, render_manifest(&linked)?.as_bytes())?;

    report.stylesheet_written = write_stylesheet(out_dir, sink)?;

    info!(
        written = report.written.len(),
        failed = report.failures.len(),
        out = %out_dir.display(),
        "site build finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, assign_slugs};
    use crate::storage::FaultySink;
    use indexmap::IndexMap;

    fn entries(names: &[&str]) -> Vec<SiteEntry> {
        let records = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut fields = IndexMap::new();
                fields.insert("name".to_string(), name.to_string());
                fields.insert("address".to_string(), format!("{} Main St", i + 1));
                Record::new(i + 1, fields, "name")
            })
            .collect();
        assign_slugs(records)
    }

    #[test]
    fn test_build_writes_all_pages() {
        let dir = tempfile::tempdir().unwrap();
        let report = build_site(&entries(&["A", "B"]), dir.path(), &RenderOptions::default()).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.written.len(), 2);
        assert!(report.stylesheet_written);
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("index.json").exists());
        assert!(dir.path().join("assets/style.css").exists());
        assert!(dir.path().join("restaurants/a/index.html").exists());
        assert!(dir.path().join("restaurants/b/index.html").exists());
    }

    #[test]
    fn test_build_failed_page_is_not_linked() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FaultySink::new(["restaurants/b/"]);
        let report = build_site_with(
            &entries(&["A", "B", "C"]),
            dir.path(),
            &RenderOptions::default(),
            &mut sink,
        )
        .unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].row, 2);
        assert_eq!(report.failures[0].name, "B");
        assert!(report.failures[0].path.ends_with("restaurants/b/index.html"));

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"href="restaurants/a/""#));
        assert!(!index.contains(r#"href="restaurants/b/""#));
        assert!(index.contains(r#"href="restaurants/c/""#));
        assert!(!dir.path().join("restaurants/b").exists());

        let err = report.into_result().unwrap_err();
        assert!(matches!(err, SiteError::RenderFailures { failed: 1, total: 3 }));
    }

    #[test]
    fn test_build_index_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Detail pages are also named index.html, so match the full root index path
        let mut sink = FaultySink::new([dir.path().join("index.html").to_string_lossy()]);
        let result = build_site_with(&entries(&["A"]), dir.path(), &RenderOptions::default(), &mut sink);
        assert!(matches!(result, Err(SiteError::Output { .. })));
    }

    #[test]
    fn test_build_index_failure_on_rebuild_leaves_no_stale_links() {
        let dir = tempfile::tempdir().unwrap();
        build_site(&entries(&["Old Place"]), dir.path(), &RenderOptions::default()).unwrap();
        assert!(dir.path().join("index.html").exists());

        let mut sink = FaultySink::new([dir.path().join("index.html").to_string_lossy()]);
        let result = build_site_with(
            &entries(&["New Place"]),
            dir.path(),
            &RenderOptions::default(),
            &mut sink,
        );
        assert!(matches!(result, Err(SiteError::Output { .. })));

        assert!(!dir.path().join("restaurants/old-place").exists());
        assert!(!dir.path().join("index.html").exists());
        assert!(!dir.path().join("index.json").exists());
    }

    #[test]
    fn test_build_removes_stale_pages() {
        let dir = tempfile::tempdir().unwrap();
        build_site(&entries(&["Old Place"]), dir.path(), &RenderOptions::default()).unwrap();
        assert!(dir.path().join("restaurants/old-place/index.html").exists());

        build_site(&entries(&["New Place"]), dir.path(), &RenderOptions::default()).unwrap();
        assert!(!dir.path().join("restaurants/old-place").exists());
        assert!(dir.path().join("restaurants/new-place/index.html").exists());
    }

    #[test]
    fn test_build_empty_has_no_restaurants_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = build_site(&[], dir.path(), &RenderOptions::default()).unwrap();
        assert!(report.is_complete());
        assert!(dir.path().join("index.html").exists());
        assert!(!dir.path().join("restaurants").exists());
    }

    #[test]
    fn test_build_output_root_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = build_site(&entries(&["A"]), &blocker.join("site"), &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, SiteError::Output { .. }));
    }
}
