//! CLI command handler for building the site.
//!
//! Loads the CSV dataset, assigns slugs and writes the static site.

use tracing::info;

use crate::SiteResult;
use crate::config::SiteConfig;
use crate::core::assign_slugs;
use crate::site::{BuildReport, build_site};
use crate::storage::CsvLoader;

/// Run a full build.
///
/// Writes under the configured output directory:
/// - index.html - list of every restaurant
/// - index.json - manifest of written pages
/// - restaurants/<slug>/index.html - one page per restaurant
/// - assets/style.css - default stylesheet, unless one exists
///
/// # Errors
/// Fails if the dataset cannot be loaded, the output root cannot be
/// prepared, or any detail page failed to write. In the last case the
/// site on disk is still consistent: the index only links written pages.
pub fn run(config: &SiteConfig) -> SiteResult<BuildReport> {
    let input = &config.dataset.input;
    let out_dir = &config.output.dir;

    info!(input = %input.display(), "loading dataset");
    let records = CsvLoader::new(config.load_options()).load(input)?;
    info!(records = records.len(), "loaded dataset");

    let entries = assign_slugs(records);

    // Per-page failures are logged by the build; here they only fail the run.
    let report = build_site(&entries, out_dir, &config.render_options())?.into_result()?;

    info!(
        pages = report.written.len(),
        out = %out_dir.display(),
        "generated restaurant site"
    );
    Ok(report)
}
