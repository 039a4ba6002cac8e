//! Default stylesheet shipped with every generated site.

use std::path::Path;

use tracing::debug;

use crate::SiteResult;
use crate::storage::PageSink;

/// Stylesheet location relative to the output root.
pub const STYLESHEET_PATH: &str = "assets/style.css";

pub const STYLESHEET: &str = r#":root {
  --bg: #f6f8fb;
  --card: #ffffff;
  --ink: #111827;
  --muted: #6b7280;
  --accent: #2563eb;
  --pill: #e5e7eb;
  --border: #e5e7eb;
  --shadow: 0 10px 40px rgba(17, 24, 39, 0.08);
  --radius: 16px;
  font-family: "Inter", system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; }

body { margin: 0; padding: 0; background: var(--bg); color: var(--ink); }

.page { max-width: 1200px; margin: 0 auto; padding: 24px 20px 64px; }

h1, h2 { margin: 0 0 8px; }

.hero-header { text-align: center; margin-bottom: 24px; }
.hero-header p { margin: 0; color: var(--muted); }

.grid {
  list-style: none;
  padding: 0;
  margin: 0;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 20px;
}

.card {
  background: var(--card);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 16px 16px 20px;
}

.card-image { display: block; width: 100%; height: 180px; object-fit: cover; border-radius: 12px; margin-bottom: 12px; background: var(--pill); }

.card-link { color: var(--ink); font-size: 18px; font-weight: 600; text-decoration: none; }
.card-link:hover { color: var(--accent); }

.summary { display: flex; flex-wrap: wrap; gap: 8px; color: var(--muted); font-size: 14px; margin: 8px 0 0; }
.field { background: var(--pill); border-radius: 999px; padding: 4px 10px; }

.detail header { margin-bottom: 12px; }
.hero { display: block; width: 100%; max-height: 420px; object-fit: cover; border-radius: var(--radius); margin-bottom: 20px; box-shadow: var(--shadow); }

.fields { width: 100%; border-collapse: collapse; background: var(--card); border-radius: var(--radius); box-shadow: var(--shadow); }
.fields th, .fields td { padding: 10px 14px; text-align: left; border-bottom: 1px solid var(--border); vertical-align: top; }
.fields th { color: var(--muted); font-weight: 600; width: 30%; }
.fields a { color: var(--accent); word-break: break-all; }

details { margin: 24px 0; }
summary { cursor: pointer; color: var(--muted); }
pre { background: var(--card); padding: 16px; border-radius: 8px; overflow-x: auto; font-size: 12px; white-space: pre-wrap; }

.muted { color: var(--muted); }

.back-link { color: var(--accent); text-decoration: none; font-weight: 600; display: inline-block; margin-bottom: 12px; }

@media (max-width: 640px) {
  .grid { grid-template-columns: 1fr; }
  .fields th { width: 40%; }
}
"#;

/// Write the stylesheet under `out_dir` unless one is already there.
///
/// Returns true if the file was written.
pub fn write_stylesheet<S: PageSink>(out_dir: &Path, sink: &mut S) -> SiteResult<bool> {
    let path = out_dir.join(STYLESHEET_PATH);
    if path.exists() {
        debug!(path = %path.display(), "keeping existing stylesheet");
        return Ok(false);
    }
    sink.write_page(&path, STYLESHEET.as_bytes())?;
    Ok(true)
}
