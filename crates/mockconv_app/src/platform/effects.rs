use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use mockconv_core::{Effect, Msg};
use mockconv_engine::{DownloadSink, EngineEvent, EngineHandle, EngineSettings, ScheduleRequest};

/// Executes core effects against the engine and the download sink, and turns
/// engine events back into messages.
pub struct EffectRunner<D: DownloadSink> {
    engine: EngineHandle,
    downloads: D,
}

impl<D: DownloadSink> EffectRunner<D> {
    pub fn new(settings: EngineSettings, downloads: D) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            downloads,
        }
    }

    /// Applies effects in order. Returns the messages reporting how the
    /// downloads went.
    pub fn apply(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::ScheduleRun {
                    run_id,
                    upload_delay_ms,
                    step_interval_ms,
                    step_count,
                } => {
                    self.engine.schedule(ScheduleRequest {
                        run_id,
                        upload_delay: Duration::from_millis(upload_delay_ms),
                        step_interval: Duration::from_millis(step_interval_ms),
                        step_count,
                    });
                }
                Effect::CancelRun { run_id } => self.engine.cancel(run_id),
                Effect::DeliverArtifact { run_id, artifact } => {
                    engine_info!(
                        "DeliverArtifact run={run_id} filename={} bytes={} mime={}",
                        artifact.filename,
                        artifact.content.len(),
                        artifact.mime_hint
                    );
                    let msg = match self.downloads.save(&artifact.filename, &artifact.content) {
                        Ok(path) => Msg::DownloadSaved { run_id, path },
                        Err(err) => {
                            engine_warn!("saving {} failed: {err}", artifact.filename);
                            Msg::DownloadFailed {
                                run_id,
                                reason: err.to_string(),
                            }
                        }
                    };
                    follow_ups.push(msg);
                }
            }
        }
        follow_ups
    }

    /// Waits for the next engine event that the core cares about.
    pub async fn next_msg(&mut self) -> Option<Msg> {
        loop {
            let event = self.engine.recv().await?;
            if let Some(msg) = map_event(event) {
                return Some(msg);
            }
        }
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::UploadElapsed { run_id } => Some(Msg::UploadElapsed { run_id }),
        EngineEvent::StepElapsed {
            run_id, fired_at, ..
        } => Some(Msg::StepElapsed { run_id, fired_at }),
        EngineEvent::RunFinished { run_id } => {
            engine_debug!("engine finished run {run_id}");
            None
        }
        EngineEvent::RunCancelled { run_id } => {
            engine_debug!("engine cancelled run {run_id}");
            None
        }
    }
}
