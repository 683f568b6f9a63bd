//! cpdf binary provisioning.
//!
//! Resolves the platform-specific prebuilt cpdf binary, downloads it from
//! the coherentgraphics release mirror on first use, and marks it
//! executable. Provisioning is idempotent: once the binary exists in the
//! tools directory, no network access happens.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Base URL of the prebuilt cpdf binaries, templated by platform directory.
const CPDF_DOWNLOAD_BASE: &str =
    "https://github.com/coherentgraphics/cpdf-binaries/raw/master";

/// Errors that can occur while provisioning the tool.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to download cpdf: HTTP {status} for {url}")]
    Download { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Platform identity used to pick the prebuilt binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Directory name in the release mirror (e.g. `Linux-Intel-64bit`).
    pub ident: &'static str,
    /// Binary filename (`cpdf`, or `cpdf.exe` on Windows).
    pub binary: &'static str,
}

impl Platform {
    /// Download URL for this platform's binary.
    pub fn download_url(&self) -> String {
        format!("{CPDF_DOWNLOAD_BASE}/{}/{}", self.ident, self.binary)
    }

    /// Destination path of the binary inside `dir`.
    pub fn binary_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.binary)
    }
}

/// Resolve the current OS family and architecture to a release platform.
///
/// Anything outside Linux/macOS/Windows is fatal for the attempted action.
pub fn current_platform() -> Result<Platform, ProvisionError> {
    if cfg!(target_os = "linux") {
        Ok(Platform {
            ident: "Linux-Intel-64bit",
            binary: "cpdf",
        })
    } else if cfg!(target_os = "macos") {
        let ident = if cfg!(target_arch = "x86_64") {
            "OSX-Intel"
        } else {
            "OSX-ARM"
        };
        Ok(Platform {
            ident,
            binary: "cpdf",
        })
    } else if cfg!(target_os = "windows") {
        Ok(Platform {
            ident: "Windows64bit",
            binary: "cpdf.exe",
        })
    } else {
        Err(ProvisionError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}

/// Outcome of a provisioning call.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    /// Path to the executable binary.
    pub tool: PathBuf,
    /// Whether a download happened on this call.
    pub downloaded: bool,
}

/// Ensure the cpdf binary is present in `dir`, downloading it if absent.
pub async fn ensure_tool(dir: &Path) -> Result<ProvisionOutcome, ProvisionError> {
    let platform = current_platform()?;
    let dest = platform.binary_path(dir);

    if dest.exists() {
        debug!("cpdf already present at {}", dest.display());
        return Ok(ProvisionOutcome {
            tool: dest,
            downloaded: false,
        });
    }

    if !dir.exists() {
        tokio::fs::create_dir_all(dir).await?;
    }

    download_binary(&platform, &dest).await?;

    #[cfg(unix)]
    set_executable(&dest).await?;

    info!("cpdf downloaded to {}", dest.display());
    Ok(ProvisionOutcome {
        tool: dest,
        downloaded: true,
    })
}

/// Stream the binary to `dest`, chunk by chunk.
async fn download_binary(platform: &Platform, dest: &Path) -> Result<(), ProvisionError> {
    use futures_util::StreamExt;

    let url = platform.download_url();
    info!("Downloading cpdf from {}", url);

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        return Err(ProvisionError::Download {
            status: response.status().as_u16(),
            url,
        });
    }

    let mut file = std::fs::File::create(dest)?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
    }

    Ok(())
}

#[cfg(unix)]
async fn set_executable(path: &Path) -> Result<(), ProvisionError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = tokio::fs::metadata(path).await?.permissions();
    perms.set_mode(0o755);
    tokio::fs::set_permissions(path, perms).await?;
    Ok(())
}
