//! Scale job construction and output path derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Suffix spliced onto the input filename to produce the default output.
const OUTPUT_SUFFIX: &str = "-output.pdf";

/// Error building a job from the form fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// A required field was empty.
    #[error("File, output path or page size not given.")]
    MissingField,
}

/// A validated scale invocation: input, output, and resolved size argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleJob {
    /// Source PDF chosen in the file dialog.
    pub input: PathBuf,
    /// Destination path, derived from the input and editable by the user.
    pub output: PathBuf,
    /// Size argument passed to cpdf (preset token or raw dimensions).
    pub page_size: String,
}

impl ScaleJob {
    /// Build a job from raw form values.
    ///
    /// `page_size` is the already-resolved size argument; `None` means the
    /// custom field was left empty. Any empty field fails validation, and
    /// nothing is executed for an invalid form.
    pub fn from_form(
        input: &str,
        output: &str,
        page_size: Option<String>,
    ) -> Result<Self, JobError> {
        let page_size = page_size.ok_or(JobError::MissingField)?;
        if input.is_empty() || output.is_empty() || page_size.is_empty() {
            return Err(JobError::MissingField);
        }

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            page_size,
        })
    }
}

/// Derive the default output path for a chosen input path.
///
/// A `.pdf` extension (any case) is replaced by `-output.pdf`. Paths without
/// one get every literal `.pdf` occurrence spliced instead, or the suffix
/// appended when nothing matches at all.
pub fn default_output_path(input: &str) -> String {
    let bytes = input.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".pdf") {
        return format!("{}{}", &input[..input.len() - 4], OUTPUT_SUFFIX);
    }

    let replaced = input.replace(".pdf", OUTPUT_SUFFIX);
    if replaced == input {
        format!("{input}{OUTPUT_SUFFIX}")
    } else {
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_extension_is_replaced() {
        assert_eq!(default_output_path("/tmp/x.pdf"), "/tmp/x-output.pdf");
    }

    #[test]
    fn uppercase_extension_is_replaced() {
        assert_eq!(default_output_path("scan.PDF"), "scan-output.pdf");
    }

    #[test]
    fn mixed_case_extension_is_replaced() {
        assert_eq!(default_output_path("report.Pdf"), "report-output.pdf");
    }

    #[test]
    fn non_pdf_path_gains_suffix() {
        assert_eq!(default_output_path("notes.txt"), "notes.txt-output.pdf");
    }

    #[test]
    fn interior_pdf_substring_is_spliced() {
        assert_eq!(default_output_path("a.pdf.bak"), "a-output.pdf.bak");
    }

    #[test]
    fn job_requires_all_fields() {
        assert_eq!(
            ScaleJob::from_form("", "out.pdf", Some("a4portrait".to_string())),
            Err(JobError::MissingField)
        );
        assert_eq!(
            ScaleJob::from_form("in.pdf", "", Some("a4portrait".to_string())),
            Err(JobError::MissingField)
        );
        assert_eq!(
            ScaleJob::from_form("in.pdf", "out.pdf", None),
            Err(JobError::MissingField)
        );
    }

    #[test]
    fn job_accepts_complete_form() {
        let job =
            ScaleJob::from_form("in.pdf", "out.pdf", Some("297mm 210mm".to_string())).unwrap();
        assert_eq!(job.input, PathBuf::from("in.pdf"));
        assert_eq!(job.output, PathBuf::from("out.pdf"));
        assert_eq!(job.page_size, "297mm 210mm");
    }
}
