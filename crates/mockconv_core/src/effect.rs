use crate::{OutputArtifact, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the timer sequence for a run: upload delay, then one event per step.
    ScheduleRun {
        run_id: RunId,
        upload_delay_ms: u64,
        step_interval_ms: u64,
        step_count: usize,
    },
    /// Stop the timers of a run.
    CancelRun { run_id: RunId },
    /// Hand the artifact to the download sink. The outcome comes back as
    /// `Msg::DownloadSaved` or `Msg::DownloadFailed`.
    DeliverArtifact {
        run_id: RunId,
        artifact: OutputArtifact,
    },
}
