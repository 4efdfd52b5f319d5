//! Mockconv engine: timer scheduling and effect execution.
mod download;
mod engine;
mod persist;
mod schedule;
mod types;

pub use download::{validate_download_name, DirectoryDownloadSink, DownloadSink};
pub use engine::EngineHandle;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use schedule::{run_schedule, ChannelProgressSink, ProgressSink};
pub use types::{
    local_timestamp, Clock, EngineEvent, EngineSettings, RunId, ScheduleOutcome, ScheduleRequest,
};
