//! Slug generation.
//!
//! Slugs are derived from the record name, made unique with a numeric suffix
//! (`cafe`, `cafe-2`, `cafe-3`, ...) and assigned in dataset order, so the same
//! input always yields the same slugs.

use std::collections::HashSet;

use tracing::debug;

use super::schema::{Record, SiteEntry, Slug};

/// Prefix used when a name normalizes to nothing, e.g. `restaurant-4`.
pub const FALLBACK_PREFIX: &str = "restaurant";

/// Longest base slug, before any collision suffix. Keeps directory names
/// well under common filesystem limits.
pub const MAX_SLUG_LEN: usize = 80;

/// ASCII replacement for common Latin letters with diacritics.
fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' | 'ľ' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ś' | 'š' | 'ş' => "s",
        'ß' => "ss",
        'ť' | 'ţ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(s)
}

/// Normalize free text into slug form.
///
/// Lowercases, transliterates common accented Latin letters, and turns every
/// run of other characters into a single hyphen. Leading and trailing hyphens
/// are trimmed. May return an empty string (e.g. for `"!!!"` or CJK-only text).
pub fn normalize(text: &str) -> String {
    fn push(part: &str, slug: &mut String, pending_dash: &mut bool) {
        if *pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(part);
        *pending_dash = false;
    }

    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            let mut buf = [0u8; 4];
            push(c.encode_utf8(&mut buf), &mut slug, &mut pending_dash);
        } else if let Some(ascii) = transliterate(c) {
            push(ascii, &mut slug, &mut pending_dash);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Shorten a normalized slug to `MAX_SLUG_LEN` bytes without a trailing hyphen.
fn truncate_slug(mut slug: String) -> String {
    if slug.len() > MAX_SLUG_LEN {
        // normalized slugs are ASCII, any byte index is a char boundary
        slug.truncate(MAX_SLUG_LEN);
        let kept = slug.trim_end_matches('-').len();
        slug.truncate(kept);
    }
    slug
}

/// Set of slugs already handed out during one generation pass.
///
/// Threaded explicitly through the pass; a fresh registry per run.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    used: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slugs assigned so far.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.used.contains(slug)
    }

    /// Assign a unique slug to `record` and remember it.
    pub fn assign(&mut self, record: &Record) -> Slug {
        let mut base = truncate_slug(normalize(&record.name));
        if base.is_empty() {
            base = format!("{}-{}", FALLBACK_PREFIX, record.row);
        }

        let mut candidate = base.clone();
        let mut counter = 2usize;
        while self.used.contains(&candidate) {
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
        if counter > 2 {
            debug!(row = record.row, base = %base, slug = %candidate, "slug collision resolved");
        }

        self.used.insert(candidate.clone());
        Slug::from_normalized(candidate)
    }
}

/// Pair every record with a unique slug, preserving dataset order.
pub fn assign_slugs(records: Vec<Record>) -> Vec<SiteEntry> {
    let mut registry = SlugRegistry::new();
    records
        .into_iter()
        .map(|record| {
            let slug = registry.assign(&record);
            SiteEntry { record, slug }
        })
        .collect()
}
