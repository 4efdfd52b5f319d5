//! Mockconv core: pure state machine, naming rules and view-model helpers.
mod artifact;
mod effect;
mod error;
mod input;
mod msg;
mod run;
mod state;
mod tool;
mod update;
mod view_model;

pub use artifact::{generate_artifact, OutputArtifact, ARTIFACT_MIME_HINT};
pub use effect::Effect;
pub use error::PipelineError;
pub use input::{
    format_file_size, guess_mime_type, is_supported_mime, validate_file, FileDescriptor,
    InputFile, SUPPORTED_MIME_TYPES,
};
pub use msg::Msg;
pub use run::{
    progress_percent, ProcessingRun, RunId, RunStatus, INITIALIZING_LABEL, STATUS_STEPS,
    STEP_INTERVAL_MS, UPLOAD_DELAY_MS,
};
pub use state::{AppState, Screen};
pub use tool::{derive_output_name, Tool, KNOWN_TOOLS};
pub use update::update;
pub use view_model::{AppViewModel, FileInfoView, ResultView};
