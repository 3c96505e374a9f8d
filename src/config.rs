//! Host configuration parsed from environment variables.

use canvas::geometry::Size;

use crate::error::HostError;

pub const DEFAULT_PHOTOS_URL: &str = "https://jsonplaceholder.typicode.com/photos";
pub const DEFAULT_PHOTOS_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PHOTOS_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub photos_url: String,
    pub timeouts: FetchTimeouts,
    /// Initial container size; `None` until the host is told otherwise.
    pub container: Option<Size>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PHOTOS_URL`: image listing endpoint
    /// - `PHOTOS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `PHOTOS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `CONTAINER_WIDTH` / `CONTAINER_HEIGHT`: set both or neither
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ConfigParse`] for malformed numbers or a half-specified container,
    /// and [`HostError::InvalidContainer`] for negative or non-finite extents.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let photos_url = lookup("PHOTOS_URL")
            .unwrap_or_else(|| DEFAULT_PHOTOS_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = FetchTimeouts {
            request_secs: parse_u64(&lookup, "PHOTOS_REQUEST_TIMEOUT_SECS", DEFAULT_PHOTOS_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_u64(&lookup, "PHOTOS_CONNECT_TIMEOUT_SECS", DEFAULT_PHOTOS_CONNECT_TIMEOUT_SECS)?,
        };
        let container = parse_container(&lookup)?;

        Ok(Self { photos_url, timeouts, container })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64, HostError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| HostError::ConfigParse(format!("{key}={raw}: {e}"))),
    }
}

/// Validate container extents, whether from config or the command stream.
///
/// # Errors
///
/// Returns [`HostError::InvalidContainer`] if either extent is negative or not finite.
pub fn container_size(width: f64, height: f64) -> Result<Size, HostError> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if !valid(width) || !valid(height) {
        return Err(HostError::InvalidContainer { width, height });
    }
    Ok(Size::new(width, height))
}

fn parse_extent(key: &str, raw: &str) -> Result<f64, HostError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| HostError::ConfigParse(format!("{key}={raw}: {e}")))
}

fn parse_container(lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<Size>, HostError> {
    match (lookup("CONTAINER_WIDTH"), lookup("CONTAINER_HEIGHT")) {
        (None, None) => Ok(None),
        (Some(w), Some(h)) => {
            container_size(parse_extent("CONTAINER_WIDTH", &w)?, parse_extent("CONTAINER_HEIGHT", &h)?).map(Some)
        }
        _ => Err(HostError::ConfigParse(
            "CONTAINER_WIDTH and CONTAINER_HEIGHT must be set together".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
