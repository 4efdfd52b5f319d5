use thiserror::Error;

/// Failures surfaced to the user. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("Please select a supported file type (PDF, Word, PowerPoint, Excel, or image).")]
    UnsupportedType { mime: String },
    #[error("No processed file available for download.")]
    NoArtifact,
    #[error("A file is already being processed. Please wait for it to finish.")]
    RunInProgress,
    #[error("Please choose a tool before selecting a file.")]
    NoToolSelected,
    #[error("The processed file could not be saved: {reason}")]
    DownloadFailed { reason: String },
}
