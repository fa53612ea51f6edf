//! Real directory import
//!
//! Mirrors a directory tree from the host into the virtual tree. Only the
//! one-time read happens here; nothing is ever written back.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use chrono::{DateTime, Local};
use tokio::io::AsyncReadExt;

use super::in_memory_fs::VirtualFs;
use super::path;
use super::types::FsError;

/// Default cap on the number of characters kept per imported file.
pub const DEFAULT_CHAR_LIMIT: usize = 10_000;

/// Content stored for files that are not valid UTF-8.
pub const BINARY_PLACEHOLDER: &str = "[binary file: content not shown]";

/// An entry the import could not mirror.
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Nodes created, root excluded.
    pub imported: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl ImportReport {
    fn skip(&mut self, path: &Path, reason: impl ToString) {
        let reason = reason.to_string();
        log::warn!("skipping {}: {}", path.display(), reason);
        self.skipped.push(SkippedEntry { path: path.to_path_buf(), reason });
    }
}

impl VirtualFs {
    /// Recursively mirror `real_root` into this tree, with the real root
    /// mapped onto `/`. Unreadable entries are skipped along with their
    /// subtrees; only an unusable root fails the whole import.
    pub async fn import_from_directory(
        &mut self,
        real_root: &Path,
        char_limit: usize,
    ) -> Result<ImportReport, FsError> {
        let display = real_root.display().to_string();
        let meta = tokio::fs::metadata(real_root)
            .await
            .map_err(|e| FsError::io(display.clone(), &e))?;
        if !meta.is_dir() {
            return Err(FsError::not_a_directory(display));
        }

        let mut report = ImportReport::default();
        import_into(self, real_root.to_path_buf(), "/".to_string(), char_limit, &mut report).await;
        log::info!(
            "imported {} nodes from {} ({} skipped)",
            report.imported,
            real_root.display(),
            report.skipped.len()
        );
        Ok(report)
    }
}

fn import_into<'a>(
    fs: &'a mut VirtualFs,
    real_dir: PathBuf,
    virt_dir: String,
    char_limit: usize,
    report: &'a mut ImportReport,
) -> Pin<Box<dyn Future<Output = ()> + 'a>> {
    Box::pin(async move {
        let mut entries = match tokio::fs::read_dir(&real_dir).await {
            Ok(entries) => entries,
            Err(e) => {
                report.skip(&real_dir, e);
                return;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    report.skip(&real_dir, e);
                    break;
                }
            };
            let real_path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let virt_path = path::join(&virt_dir, &name);

            let file_type = match entry.file_type().await {
                Ok(t) => t,
                Err(e) => {
                    report.skip(&real_path, e);
                    continue;
                }
            };
            let mtime = entry
                .metadata()
                .await
                .ok()
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Local>::from);

            if file_type.is_dir() {
                if let Err(e) = fs.create_directory(&virt_path) {
                    report.skip(&real_path, e);
                    continue;
                }
                report.imported += 1;
                stamp(fs, &virt_path, mtime);
                import_into(fs, real_path, virt_path, char_limit, report).await;
            } else if file_type.is_file() {
                if fs.exists(&virt_path) {
                    report.skip(&real_path, FsError::already_exists(virt_path.as_str()));
                    continue;
                }
                let content = match read_prefix(&real_path, char_limit).await {
                    Ok(bytes) => decode_text(&bytes, char_limit),
                    Err(e) => {
                        report.skip(&real_path, e);
                        continue;
                    }
                };
                if let Err(e) = fs.write_file(&virt_path, &content) {
                    report.skip(&real_path, e);
                    continue;
                }
                report.imported += 1;
                stamp(fs, &virt_path, mtime);
            } else {
                report.skip(&real_path, "unsupported file type");
            }
        }
    })
}

fn stamp(fs: &mut VirtualFs, virt_path: &str, mtime: Option<DateTime<Local>>) {
    if let (Some(when), Some(node)) = (mtime, fs.get_mut(virt_path)) {
        node.set_mtime(when);
    }
}

/// Read at most enough bytes to hold `char_limit` characters.
async fn read_prefix(real_path: &Path, char_limit: usize) -> std::io::Result<Vec<u8>> {
    let file = tokio::fs::File::open(real_path).await?;
    let limit = u64::try_from(char_limit).unwrap_or(u64::MAX).saturating_mul(4);
    let mut bytes = Vec::new();
    file.take(limit).read_to_end(&mut bytes).await?;
    Ok(bytes)
}

/// Decode a file prefix as text, keeping at most `char_limit` characters.
/// A sequence cut off at the end of the prefix is dropped; any other
/// invalid UTF-8 makes the content [`BINARY_PLACEHOLDER`].
pub fn decode_text(bytes: &[u8], char_limit: usize) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) if e.error_len().is_none() => {
            // valid_up_to() always lands on a char boundary
            std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return BINARY_PLACEHOLDER.to_string(),
    };
    match text.char_indices().nth(char_limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
