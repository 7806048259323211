//! Command-line and environment configuration.
//!
//! Every flag has an environment fallback; `.env` is loaded by `main`
//! before parsing, so a local `.env` file works too.
//!
//! | Variable                 | Flag               | Default                                   |
//! |--------------------------|--------------------|-------------------------------------------|
//! | `RAGLOAD_PORT`           | `serve --port`     | `3000`                                    |
//! | `RAGLOAD_DIST_DIR`       | `serve --dist`     | `frontend/dist`                           |
//! | `RAGLOAD_PROCESSOR_URL`  | `serve --processor-url` | `http://localhost:8000/process-files` |
//! | `RAGLOAD_MAX_UPLOAD_MB`  | `serve --max-upload-mb` | `50`                                 |
//! | `RAGLOAD_ENDPOINT`       | `submit --endpoint`| `http://localhost:3000/api/process-files` |

use clap::Args;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default address of the external processing service.
pub const DEFAULT_PROCESSOR_URL: &str = "http://localhost:8000/process-files";

/// Default endpoint for `ragload submit` (the dev server's relay).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/process-files";

const BYTES_PER_MB: u64 = 1024 * 1024;

// =============================================================================
// serve
// =============================================================================

/// Arguments of `ragload serve`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "RAGLOAD_PORT", default_value = "3000")]
    pub port: u16,

    /// Directory holding the built frontend (index.html, wasm, js)
    #[arg(long, env = "RAGLOAD_DIST_DIR", default_value = "frontend/dist")]
    pub dist: PathBuf,

    /// URL the relay forwards uploads to
    #[arg(long, env = "RAGLOAD_PROCESSOR_URL", default_value = DEFAULT_PROCESSOR_URL)]
    pub processor_url: String,

    /// Largest accepted upload body, in MiB
    #[arg(long, env = "RAGLOAD_MAX_UPLOAD_MB", default_value = "50")]
    pub max_upload_mb: u64,
}

/// Validated configuration of the dev server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub processor_url: String,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn from_args(args: ServeArgs) -> Result<Self, ConfigError> {
        let processor_url = validate_url(&args.processor_url)?;

        if args.max_upload_mb == 0 {
            return Err(ConfigError::InvalidUploadLimit(args.max_upload_mb));
        }
        let max_upload_bytes = args
            .max_upload_mb
            .checked_mul(BYTES_PER_MB)
            .and_then(|bytes| usize::try_from(bytes).ok())
            .ok_or(ConfigError::InvalidUploadLimit(args.max_upload_mb))?;

        Ok(Self {
            port: args.port,
            dist_dir: args.dist,
            processor_url,
            max_upload_bytes,
        })
    }
}

// =============================================================================
// submit
// =============================================================================

/// Arguments of `ragload submit`.
#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    /// Files to submit, in order (become file_0, file_1, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Processing endpoint
    #[arg(short, long, env = "RAGLOAD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Apply the drop-zone document filter instead of sending every file
    #[arg(long)]
    pub filter: bool,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the raw result record as JSON
    #[arg(long)]
    pub json: bool,
}

impl SubmitArgs {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Check that `url` is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(ConfigError::InvalidUrl {
            url: url.to_string(),
            message: format!("unsupported scheme '{}'", other),
        }),
    }
}
