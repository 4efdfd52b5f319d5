use engine_logging::engine_trace;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::{Clock, EngineEvent, ScheduleOutcome, ScheduleRequest};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: UnboundedSender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: UnboundedSender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        // The receiver only goes away on shutdown.
        let _ = self.tx.send(event);
    }
}

/// Runs the timer sequence of one run: the upload delay, then one
/// `StepElapsed` per interval. Stops at the first tick after `cancel` fires.
pub async fn run_schedule(
    request: &ScheduleRequest,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
    clock: &Clock,
) -> ScheduleOutcome {
    let run_id = request.run_id;

    tokio::select! {
        _ = cancel.cancelled() => return ScheduleOutcome::Cancelled,
        _ = time::sleep(request.upload_delay) => {}
    }
    engine_trace!("run {run_id}: upload delay elapsed");
    sink.emit(EngineEvent::UploadElapsed { run_id });

    let mut ticker = time::interval_at(
        Instant::now() + request.step_interval,
        request.step_interval,
    );
    for step in 0..request.step_count {
        tokio::select! {
            _ = cancel.cancelled() => return ScheduleOutcome::Cancelled,
            _ = ticker.tick() => {}
        }
        engine_trace!("run {run_id}: step {step}");
        sink.emit(EngineEvent::StepElapsed {
            run_id,
            step,
            fired_at: clock(),
        });
    }

    ScheduleOutcome::Completed
}
