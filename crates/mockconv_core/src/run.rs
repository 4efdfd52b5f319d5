use crate::{InputFile, Tool};

pub type RunId = u64;

/// Simulated upload latency before processing starts.
pub const UPLOAD_DELAY_MS: u64 = 1_000;
/// Time between two processing steps.
pub const STEP_INTERVAL_MS: u64 = 800;

/// Label shown once processing has started but before the first step.
pub const INITIALIZING_LABEL: &str = "Initializing...";

/// Ordered status labels of a run. The last one marks completion.
pub const STATUS_STEPS: [&str; 6] = [
    "Uploading file...",
    "Analyzing document structure...",
    "Processing content...",
    "Applying changes...",
    "Finalizing output...",
    "Complete!",
];

/// Progress in percent after `step` (zero-indexed) has been applied.
pub fn progress_percent(step: usize) -> u8 {
    let last = STATUS_STEPS.len() - 1;
    let step = step.min(last);
    // Exact for the fixed step count: 0, 20, 40, 60, 80, 100.
    (step * 100 / last) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Waiting out the upload delay.
    Pending,
    Running,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRun {
    id: RunId,
    tool: Tool,
    input: InputFile,
    step_index: Option<usize>,
    status: RunStatus,
}

impl ProcessingRun {
    pub(crate) fn new(id: RunId, tool: Tool, input: InputFile) -> Self {
        Self {
            id,
            tool,
            input,
            step_index: None,
            status: RunStatus::Pending,
        }
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn input(&self) -> &InputFile {
        &self.input
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Index of the last applied step, if any.
    pub fn step_index(&self) -> Option<usize> {
        self.step_index
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, RunStatus::Pending | RunStatus::Running)
    }

    pub fn status_label(&self) -> &'static str {
        self.step_index
            .map_or(INITIALIZING_LABEL, |step| STATUS_STEPS[step])
    }

    pub fn progress_percent(&self) -> u8 {
        self.step_index.map_or(0, progress_percent)
    }

    pub(crate) fn start(&mut self) -> bool {
        if self.status != RunStatus::Pending {
            return false;
        }
        self.status = RunStatus::Running;
        true
    }

    /// Applies the next step. Returns `true` when it was the final one.
    pub(crate) fn advance(&mut self) -> bool {
        let next = self.step_index.map_or(0, |step| step + 1);
        self.step_index = Some(next);
        if next == STATUS_STEPS.len() - 1 {
            self.status = RunStatus::Complete;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_evenly_spaced() {
        let values: Vec<u8> = (0..STATUS_STEPS.len()).map(progress_percent).collect();
        assert_eq!(values, vec![0, 20, 40, 60, 80, 100]);
    }

    #[test]
    fn progress_clamps_past_the_last_step() {
        assert_eq!(progress_percent(42), 100);
    }
}
