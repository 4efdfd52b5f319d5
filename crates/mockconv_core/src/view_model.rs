use crate::{RunStatus, Screen};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub selected_tool_name: Option<String>,
    /// Extensions to offer in a file picker for the selected tool.
    pub accept_filter: Option<String>,
    pub upload_heading: String,
    pub upload_hint: String,
    pub file_info: Option<FileInfoView>,
    pub run_status: Option<RunStatus>,
    /// Present while the result view is shown.
    pub result: Option<ResultView>,
    /// User-facing message from the last rejected action.
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfoView {
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub title: String,
    pub status_text: String,
    pub progress_percent: u8,
    /// Set once the artifact is ready.
    pub download_label: Option<String>,
}
