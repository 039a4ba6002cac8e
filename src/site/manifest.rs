//! Machine-readable manifest of the generated pages (`index.json`).

use serde::{Deserialize, Serialize};

use crate::core::schema::SiteEntry;
use crate::{SiteError, SiteResult};

/// Manifest location relative to the output root.
pub const MANIFEST_FILE: &str = "index.json";

/// One written detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-based data-row number in the source CSV
    pub row: usize,
    pub name: String,
    pub slug: String,
    /// Relative href from the index page, e.g. "restaurants/golden-dragon/"
    pub href: String,
}

impl From<&SiteEntry> for ManifestEntry {
    fn from(entry: &SiteEntry) -> Self {
        ManifestEntry {
            row: entry.record.row,
            name: entry.record.name.clone(),
            slug: entry.slug.to_string(),
            href: entry.href(),
        }
    }
}

/// Serialize the manifest for `entries`.
///
/// Uses compact JSON so the same input always produces identical bytes.
pub fn render_manifest(entries: &[SiteEntry]) -> SiteResult<String> {
    let manifest: Vec<ManifestEntry> = entries.iter().map(ManifestEntry::from).collect();
    serde_json::to_string(&manifest)
        .map_err(|e| SiteError::output(MANIFEST_FILE, format!("failed to serialize manifest: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, assign_slugs};
    use indexmap::IndexMap;

    #[test]
    fn test_manifest_round_trips_entries() {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), "Golden Dragon".to_string());
        let entries = assign_slugs(vec![Record::new(1, fields, "name")]);

        let json = render_manifest(&entries).unwrap();
        let parsed: Vec<ManifestEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            vec![ManifestEntry {
                row: 1,
                name: "Golden Dragon".to_string(),
                slug: "golden-dragon".to_string(),
                href: "restaurants/golden-dragon/".to_string(),
            }]
        );
    }

    #[test]
    fn test_manifest_empty() {
        assert_eq!(render_manifest(&[]).unwrap(), "[]");
    }
}
