//! Running the cpdf scale-to-fit invocation.
//!
//! One external-process call per run: the job's page size, input, and
//! output are passed straight through to cpdf. The call blocks its
//! background task until the tool exits; no timeout is applied.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::ScaleJob;

/// Fallback detail when cpdf fails without writing to stderr.
const UNKNOWN_ERROR: &str = "Unknown error.";

/// Errors from a scale run.
///
/// Variants are `Clone` so outcomes can travel through UI message types.
#[derive(Error, Debug, Clone)]
pub enum ScaleError {
    /// cpdf ran and exited non-zero; `detail` is the last non-empty line of
    /// its stderr.
    #[error("cpdf exited with code {code}: {detail}")]
    ToolFailed { code: i32, detail: String },

    /// cpdf could not be executed at all.
    #[error("failed to run cpdf: {0}")]
    Launch(String),
}

/// Successful run result.
#[derive(Debug, Clone)]
pub struct ScaleOutcome {
    /// The output file written by cpdf.
    pub output: PathBuf,
}

/// Execute `<tool> -scale-to-fit <size> <input> -o <output>`.
pub async fn run_scale(tool: &Path, job: &ScaleJob) -> Result<ScaleOutcome, ScaleError> {
    debug!(
        "Running {} -scale-to-fit {} {} -o {}",
        tool.display(),
        job.page_size,
        job.input.display(),
        job.output.display()
    );

    let output = tokio::process::Command::new(tool)
        .arg("-scale-to-fit")
        .arg(&job.page_size)
        .arg(&job.input)
        .arg("-o")
        .arg(&job.output)
        .output()
        .await
        .map_err(|e| ScaleError::Launch(e.to_string()))?;

    if output.status.success() {
        Ok(ScaleOutcome {
            output: job.output.clone(),
        })
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ScaleError::ToolFailed {
            code: output.status.code().unwrap_or(-1),
            detail: last_error_line(&stderr),
        })
    }
}

/// Last non-empty line of the tool's stderr, used as the failure reason.
pub fn last_error_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_error_line_takes_final_nonempty() {
        assert_eq!(last_error_line("Error\nFile not found"), "File not found");
        assert_eq!(
            last_error_line("Error\nFile not found\n\n"),
            "File not found"
        );
    }

    #[test]
    fn empty_stderr_falls_back() {
        assert_eq!(last_error_line(""), "Unknown error.");
        assert_eq!(last_error_line("\n \n"), "Unknown error.");
    }

    #[tokio::test]
    async fn missing_tool_is_launch_error() {
        let job = ScaleJob::from_form(
            "in.pdf",
            "out.pdf",
            Some("a4portrait".to_string()),
        )
        .unwrap();

        let err = run_scale(Path::new("/nonexistent/cpdf"), &job)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaleError::Launch(_)));
    }

    #[cfg(unix)]
    fn fake_tool(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let tool = dir.join("fake-cpdf");
        std::fs::write(&tool, script).unwrap();
        let mut perms = std::fs::metadata(&tool).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&tool, perms).unwrap();
        tool
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_reports_last_stderr_line() {
        // A stand-in tool that fails the way cpdf does: diagnostic lines on
        // stderr, non-zero exit.
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(
            dir.path(),
            "#!/bin/sh\nprintf 'Error\\nFile not found\\n' >&2\nexit 2\n",
        );

        let job = ScaleJob::from_form(
            "in.pdf",
            "out.pdf",
            Some("a4portrait".to_string()),
        )
        .unwrap();

        let err = run_scale(&tool, &job).await.unwrap_err();
        match err {
            ScaleError::ToolFailed { code, detail } => {
                assert_eq!(code, 2);
                assert_eq!(detail, "File not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn success_returns_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "#!/bin/sh\nexit 0\n");

        let job = ScaleJob::from_form(
            "in.pdf",
            "/tmp/x-output.pdf",
            Some("a4portrait".to_string()),
        )
        .unwrap();

        let outcome = run_scale(&tool, &job).await.unwrap();
        assert_eq!(outcome.output, PathBuf::from("/tmp/x-output.pdf"));
    }
}
