//! Asset URL resolution.
//!
//! Item icons and point photos are stored as relative filenames; every
//! payload returned to clients carries a fully-qualified URL built from the
//! configured public base.

use url::Url;

/// Public base URL under which stored asset filenames are served.
///
/// ## Invariants
/// - The wrapped URL always ends with a `/` so joins append rather than
///   replace the final path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrlBase {
    base: Url,
}

/// Errors raised while constructing an [`AssetUrlBase`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetUrlBaseError {
    #[error("asset base URL is not a valid absolute URL: {message}")]
    InvalidUrl { message: String },
}

impl AssetUrlBase {
    /// Parse and normalise the configured base URL.
    pub fn parse(raw: &str) -> Result<Self, AssetUrlBaseError> {
        let normalised = if raw.ends_with('/') {
            raw.to_owned()
        } else {
            format!("{raw}/")
        };
        let base = Url::parse(&normalised).map_err(|err| AssetUrlBaseError::InvalidUrl {
            message: err.to_string(),
        })?;
        Ok(Self { base })
    }

    /// Resolve a stored relative filename into an absolute URL string.
    pub fn resolve(&self, filename: &str) -> String {
        match self.base.join(filename) {
            Ok(url) => url.into(),
            // Filenames are sanitised on upload; a join can only fail on a
            // cannot-be-a-base URL, which parse() already excludes.
            Err(_) => format!("{}{filename}", self.base),
        }
    }
}
