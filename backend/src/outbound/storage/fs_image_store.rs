//! Filesystem-backed image store.
//!
//! Uploads land in a single public directory that the HTTP layer serves
//! under `/assets`. Stored names are prefixed with a UUID so concurrent
//! uploads of the same filename never collide.

use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{ImageStore, ImageStoreError, ImageUpload};

/// Image store writing uploads to a local directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

/// Reduce a client-supplied filename to a safe relative name.
///
/// Path components are discarded and anything outside a conservative
/// character set becomes `_`, so a hostile filename cannot escape the
/// assets directory or smuggle shell metacharacters into URLs.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let cleaned: String = base
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches(['.', '_']).is_empty() {
        "upload".to_owned()
    } else {
        cleaned
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, upload: ImageUpload) -> Result<String, ImageStoreError> {
        let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(&upload.file_name));
        let path = self.root.join(&stored_name);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ImageStoreError::io(err.to_string()))?;
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|err| ImageStoreError::io(err.to_string()))?;

        Ok(stored_name)
    }
}
