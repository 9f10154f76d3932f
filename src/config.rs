//! Credentials lookup compatible with the Python `cdsapi` client.
//!
//! Order: `CDSAPI_URL` / `CDSAPI_KEY` environment variables, then the rc file
//! named by `CDSAPI_RC`, then `~/.cdsapirc`. The rc file holds `key: value`
//! lines:
//!
//! ```text
//! url: https://cds.climate.copernicus.eu/api
//! key: 00000000-0000-0000-0000-000000000000
//! verify: 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

pub const ENV_URL: &str = "CDSAPI_URL";
pub const ENV_KEY: &str = "CDSAPI_KEY";
pub const ENV_RC: &str = "CDSAPI_RC";
pub const RC_FILE_NAME: &str = ".cdsapirc";

/// Contents of an rc file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcFile {
    pub url: Option<String>,
    pub key: Option<String>,
    pub verify: Option<bool>,
}

impl RcFile {
    pub fn parse(text: &str) -> Self {
        let mut rc = RcFile::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((k, v)) = line.split_once(':') else {
                continue;
            };
            let v = v.trim().to_string();
            match k.trim() {
                "url" => rc.url = Some(v),
                "key" => rc.key = Some(v),
                "verify" => rc.verify = Some(!matches!(v.as_str(), "0" | "false" | "False")),
                _ => {}
            }
        }
        rc
    }

    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }
}

/// Where the rc file is looked up: `CDSAPI_RC`, else `~/.cdsapirc`.
pub fn rc_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    env(ENV_RC)
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(RC_FILE_NAME)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API base URL, if configured; callers fall back to their default source.
    pub url: Option<String>,
    pub key: String,
    pub verify_tls: bool,
}

/// Resolve credentials from `env` (normally `std::env::var(..).ok()`) and the
/// rc file it points to.
pub fn resolve_credentials(env: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
    let mut url = env(ENV_URL);
    let mut key = env(ENV_KEY);
    let mut verify = None;

    if url.is_none() || key.is_none() {
        if let Some(path) = rc_path(&env).filter(|p| p.is_file()) {
            debug!("reading credentials from {}", path.display());
            let rc = RcFile::read(&path)?;
            url = url.or(rc.url);
            key = key.or(rc.key);
            verify = rc.verify;
        }
    }

    let key = key.filter(|k| !k.is_empty()).ok_or(Error::MissingCredentials)?;
    Ok(Credentials {
        url,
        key,
        verify_tls: verify.unwrap_or(true),
    })
}
