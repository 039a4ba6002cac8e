//! Destination for rendered pages.

use std::path::{Path, PathBuf};

use crate::{SiteError, SiteResult};

use super::atomic::write_atomic;

/// Something that can persist a rendered page.
pub trait PageSink {
    /// Write `contents` to `path`, replacing any existing file.
    fn write_page(&mut self, path: &Path, contents: &[u8]) -> SiteResult<()>;
}

/// Writes pages to the local filesystem atomically.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl PageSink for FsSink {
    fn write_page(&mut self, path: &Path, contents: &[u8]) -> SiteResult<()> {
        write_atomic(path, contents)
    }
}

/// Filesystem sink that refuses selected paths.
///
/// Used to exercise per-page failure handling without touching permissions.
#[derive(Debug, Clone, Default)]
pub struct FaultySink {
    /// Any path containing one of these fragments fails to write
    pub fail_on: Vec<String>,
    /// Paths that were refused
    pub refused: Vec<PathBuf>,
}

impl FaultySink {
    pub fn new<I, S>(fail_on: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FaultySink {
            fail_on: fail_on.into_iter().map(Into::into).collect(),
            refused: Vec::new(),
        }
    }
}

impl PageSink for FaultySink {
    fn write_page(&mut self, path: &Path, contents: &[u8]) -> SiteResult<()> {
        let shown = path.to_string_lossy();
        if self.fail_on.iter().any(|f| shown.contains(f.as_str())) {
            self.refused.push(path.to_path_buf());
            return Err(SiteError::output(path, "injected write failure"));
        }
        write_atomic(path, contents)
    }
}
