//! Run-action handlers: validate, provision, invoke, report.
//!
//! Every stage runs on a background task via `Task::perform`; only its
//! completion message touches application state. The external process call
//! blocks its worker, never the UI thread.

use std::path::{Path, PathBuf};

use iced::Task;

use psa_core::models::ScaleJob;
use psa_core::provision::{self, ProvisionOutcome};
use psa_core::scale::{self, ScaleError, ScaleOutcome};

use crate::app::{App, Message};

impl App {
    /// Handle the Run button: validate the form, then kick off provisioning.
    pub fn handle_run(&mut self) -> Task<Message> {
        if self.is_running {
            return Task::none();
        }

        let page_size = self.page_size.resolve(&self.custom_size);
        let job = match ScaleJob::from_form(&self.input_path, &self.output_path, page_size) {
            Ok(job) => job,
            Err(e) => {
                return self.append_log(&format!("Error: {}", e));
            }
        };

        // Platform resolution happens up front so an unsupported platform
        // aborts before any side effect, and so a first-time download can be
        // announced in the log before the worker starts.
        let platform = match provision::current_platform() {
            Ok(platform) => platform,
            Err(e) => {
                return self.append_log(&format!("Error: {}", e));
            }
        };

        let tools_dir = PathBuf::from(&self.settings.paths.tools_folder);

        self.is_running = true;
        self.pending_job = Some(job);

        let announce = if platform.binary_path(&tools_dir).exists() {
            Task::none()
        } else {
            self.append_log(&format!("Downloading CPDF for {}...", platform.ident))
        };

        let provision_task = Task::perform(
            async move {
                provision::ensure_tool(&tools_dir)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::ToolProvisioned,
        );

        Task::batch([announce, provision_task])
    }

    /// Provisioning finished: log a fresh download, then invoke cpdf on the
    /// parked job.
    pub fn handle_tool_provisioned(
        &mut self,
        result: Result<ProvisionOutcome, String>,
    ) -> Task<Message> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.is_running = false;
                self.pending_job = None;
                return self.append_log(&format!("Error: {}", e));
            }
        };

        let Some(job) = self.pending_job.take() else {
            self.is_running = false;
            return Task::none();
        };

        let announce = if outcome.downloaded {
            self.append_log(&format!("CPDF downloaded to {}.", outcome.tool.display()))
        } else {
            Task::none()
        };

        let tool = outcome.tool;
        let run_task = Task::perform(
            async move { scale::run_scale(&tool, &job).await },
            Message::RunFinished,
        );

        Task::batch([announce, run_task])
    }

    /// cpdf finished: report the outcome in the status log.
    pub fn handle_run_finished(
        &mut self,
        result: Result<ScaleOutcome, ScaleError>,
    ) -> Task<Message> {
        self.is_running = false;

        let message = completion_message(&result);
        match &result {
            Ok(_) => tracing::info!("{}", message),
            Err(e) => tracing::error!("Run failed: {}", e),
        }

        self.append_log(&message)
    }
}

/// Status-log line for a finished run.
fn completion_message(result: &Result<ScaleOutcome, ScaleError>) -> String {
    match result {
        Ok(outcome) => format!(
            "Success: Adjusted PDF saved to {}",
            base_name(&outcome.output)
        ),
        Err(ScaleError::ToolFailed { detail, .. }) => format!("CPDF error: {}", detail),
        Err(e) => format!("Error: {}", e),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reports_base_name_only() {
        let result = Ok(ScaleOutcome {
            output: PathBuf::from("/tmp/x-output.pdf"),
        });

        let message = completion_message(&result);
        assert!(message.contains("x-output.pdf"));
        assert!(!message.contains("/tmp"));
    }

    #[test]
    fn tool_failure_reports_last_stderr_line() {
        let result = Err(ScaleError::ToolFailed {
            code: 2,
            detail: "File not found".to_string(),
        });

        assert_eq!(completion_message(&result), "CPDF error: File not found");
    }

    #[test]
    fn launch_failure_reports_fault_message() {
        let result = Err(ScaleError::Launch(
            "No such file or directory".to_string(),
        ));

        assert_eq!(
            completion_message(&result),
            "Error: failed to run cpdf: No such file or directory"
        );
    }
}
