use crate::view_model::{AppViewModel, FileInfoView, ResultView};
use crate::{
    format_file_size, OutputArtifact, PipelineError, ProcessingRun, RunId, RunStatus, Tool,
    STEP_INTERVAL_MS, UPLOAD_DELAY_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Tools,
    Upload,
}

/// Session state. Holds at most one run; the artifact exists only while that
/// run is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    screen: Screen,
    tool: Option<Tool>,
    run: Option<ProcessingRun>,
    artifact: Option<OutputArtifact>,
    next_run_id: RunId,
    result_visible: bool,
    notice: Option<PipelineError>,
    /// Run whose artifact is with the download sink.
    delivering: Option<RunId>,
    upload_delay_ms: u64,
    step_interval_ms: u64,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_timings(UPLOAD_DELAY_MS, STEP_INTERVAL_MS)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose runs use the given upload delay and step interval.
    pub fn with_timings(upload_delay_ms: u64, step_interval_ms: u64) -> Self {
        Self {
            screen: Screen::Tools,
            tool: None,
            run: None,
            artifact: None,
            next_run_id: 1,
            result_visible: false,
            notice: None,
            delivering: None,
            upload_delay_ms,
            step_interval_ms,
            dirty: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tool(&self) -> Option<&Tool> {
        self.tool.as_ref()
    }

    pub fn run(&self) -> Option<&ProcessingRun> {
        self.run.as_ref()
    }

    pub fn artifact(&self) -> Option<&OutputArtifact> {
        self.artifact.as_ref()
    }

    pub fn notice(&self) -> Option<&PipelineError> {
        self.notice.as_ref()
    }

    /// The run whose download has been requested but not yet confirmed.
    pub fn delivering(&self) -> Option<RunId> {
        self.delivering
    }

    pub fn upload_delay_ms(&self) -> u64 {
        self.upload_delay_ms
    }

    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    pub fn view(&self) -> AppViewModel {
        let file_info = self.run.as_ref().map(|run| FileInfoView {
            name: run.input().name().to_string(),
            size_label: format_file_size(run.input().size_bytes()),
        });

        let (upload_heading, upload_hint) = match &file_info {
            Some(info) => (
                "File Ready for Processing".to_string(),
                format!("Selected: {}", info.name),
            ),
            None => (
                "Upload Your File".to_string(),
                "Drag & drop your file here or click to browse".to_string(),
            ),
        };

        let result = self
            .run
            .as_ref()
            .filter(|_| self.result_visible)
            .map(|run| self.result_view(run));

        AppViewModel {
            screen: self.screen,
            selected_tool_name: self.tool.as_ref().map(|t| t.display_name().to_string()),
            accept_filter: self.tool.as_ref().map(|t| t.accept_filter().to_string()),
            upload_heading,
            upload_hint,
            file_info,
            run_status: self.run.as_ref().map(ProcessingRun::status),
            result,
            notice: self.notice.as_ref().map(ToString::to_string),
            dirty: self.dirty,
        }
    }

    fn result_view(&self, run: &ProcessingRun) -> ResultView {
        let tool_name = run.tool().display_name();
        let status_text = match run.status() {
            RunStatus::Complete => {
                format!("Your file has been successfully processed with {tool_name}!")
            }
            RunStatus::Pending | RunStatus::Running => run.status_label().to_string(),
        };
        ResultView {
            title: format!("Processing: {tool_name}"),
            status_text,
            progress_percent: run.progress_percent(),
            download_label: self
                .artifact
                .as_ref()
                .map(|artifact| format!("Download {}", artifact.filename)),
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn has_active_run(&self) -> bool {
        self.run.as_ref().is_some_and(ProcessingRun::is_active)
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_tool(&mut self, tool: Tool) {
        self.tool = Some(tool);
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Option<PipelineError>) {
        if self.notice != notice {
            self.notice = notice;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_result_visible(&mut self, visible: bool) {
        if self.result_visible != visible {
            self.result_visible = visible;
            self.mark_dirty();
        }
    }

    /// Replaces any finished run with a new pending one and returns its id.
    pub(crate) fn begin_run(&mut self, run: impl FnOnce(RunId) -> ProcessingRun) -> RunId {
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.artifact = None;
        self.delivering = None;
        self.run = Some(run(run_id));
        self.mark_dirty();
        run_id
    }

    /// The run with `run_id`, when it is still the current one.
    pub(crate) fn current_run_mut(&mut self, run_id: RunId) -> Option<&mut ProcessingRun> {
        self.run.as_mut().filter(|run| run.id() == run_id)
    }

    pub(crate) fn set_artifact(&mut self, artifact: OutputArtifact) {
        self.artifact = Some(artifact);
        self.mark_dirty();
    }

    pub(crate) fn set_delivering(&mut self, run_id: Option<RunId>) {
        self.delivering = run_id;
    }

    /// Drops the run together with its artifact.
    pub(crate) fn clear_run(&mut self) -> Option<ProcessingRun> {
        self.artifact = None;
        self.delivering = None;
        let run = self.run.take();
        if run.is_some() {
            self.mark_dirty();
        }
        run
    }

    /// Back to the tool list with nothing selected.
    pub(crate) fn reset_interface(&mut self) {
        self.clear_run();
        self.tool = None;
        self.result_visible = false;
        self.notice = None;
        self.screen = Screen::Tools;
        self.mark_dirty();
    }
}
