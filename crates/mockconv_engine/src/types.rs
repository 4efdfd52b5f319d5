use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub type RunId = u64;

/// Produces the human-readable wall-clock time stamped on step events.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Local time as `YYYY-MM-DD HH:MM:SS`.
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Clone)]
pub struct EngineSettings {
    pub clock: Clock,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            clock: Arc::new(local_timestamp),
        }
    }
}

impl fmt::Debug for EngineSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineSettings").finish_non_exhaustive()
    }
}

/// Timer sequence for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub run_id: RunId,
    pub upload_delay: Duration,
    pub step_interval: Duration,
    pub step_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadElapsed {
        run_id: RunId,
    },
    StepElapsed {
        run_id: RunId,
        step: usize,
        fired_at: String,
    },
    /// All steps of a run were emitted.
    RunFinished {
        run_id: RunId,
    },
    /// The run's token was cancelled before all steps were emitted.
    RunCancelled {
        run_id: RunId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Completed,
    Cancelled,
}
