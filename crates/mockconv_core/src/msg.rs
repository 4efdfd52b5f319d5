#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a tool card.
    ToolSelected(String),
    /// User went back from the upload view to the tool list.
    BackToToolsClicked,
    /// File provider (picker or drop target) delivered a file.
    FileSelected(crate::FileDescriptor),
    /// Upload delay for a run has elapsed.
    UploadElapsed { run_id: crate::RunId },
    /// One step interval for a run has elapsed.
    StepElapsed {
        run_id: crate::RunId,
        /// Wall-clock time the timer fired, human readable.
        fired_at: String,
    },
    /// User dismissed the result view. Does not stop a run.
    ResultClosed,
    /// User aborted the current run.
    CancelClicked,
    /// User asked for the processed file.
    DownloadClicked,
    /// The download sink stored the artifact of `run_id`.
    DownloadSaved {
        run_id: crate::RunId,
        path: std::path::PathBuf,
    },
    /// The download sink could not store the artifact of `run_id`.
    DownloadFailed { run_id: crate::RunId, reason: String },
    /// User acknowledged the current notice.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
