use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use engine_logging::{engine_debug, engine_info};

use crate::schedule::{run_schedule, ChannelProgressSink, ProgressSink};
use crate::{EngineEvent, EngineSettings, RunId, ScheduleOutcome, ScheduleRequest};

struct ActiveRun {
    run_id: RunId,
    token: CancellationToken,
}

/// Owns the timers of the current run and the event channel they report on.
///
/// Runs are spawned on the ambient tokio runtime, so `schedule` must be called
/// from within one.
pub struct EngineHandle {
    settings: EngineSettings,
    event_tx: UnboundedSender<EngineEvent>,
    event_rx: UnboundedReceiver<EngineEvent>,
    active: Option<ActiveRun>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            settings,
            event_tx,
            event_rx,
            active: None,
        }
    }

    /// Starts the timers for a run. Any previous run is cancelled first.
    pub fn schedule(&mut self, request: ScheduleRequest) {
        if let Some(previous) = self.active.take() {
            engine_debug!("run {} superseded by {}", previous.run_id, request.run_id);
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        self.active = Some(ActiveRun {
            run_id: request.run_id,
            token: token.clone(),
        });

        engine_info!(
            "scheduling run {} (delay {:?}, {} steps every {:?})",
            request.run_id,
            request.upload_delay,
            request.step_count,
            request.step_interval
        );
        let sink = ChannelProgressSink::new(self.event_tx.clone());
        let clock = self.settings.clock.clone();
        tokio::spawn(async move {
            let run_id = request.run_id;
            let event = match run_schedule(&request, &sink, &token, &clock).await {
                ScheduleOutcome::Completed => EngineEvent::RunFinished { run_id },
                ScheduleOutcome::Cancelled => EngineEvent::RunCancelled { run_id },
            };
            sink.emit(event);
        });
    }

    /// Cancels the run if it is the active one.
    pub fn cancel(&mut self, run_id: RunId) {
        match self.active.take() {
            Some(active) if active.run_id == run_id => {
                engine_info!("cancelling run {run_id}");
                active.token.cancel();
            }
            other => {
                engine_debug!("cancel for inactive run {run_id} ignored");
                self.active = other;
            }
        }
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|active| active.run_id)
    }

    /// Waits for the next event.
    pub async fn recv(&mut self) -> Option<EngineEvent> {
        let event = self.event_rx.recv().await;
        if let Some(EngineEvent::RunFinished { run_id } | EngineEvent::RunCancelled { run_id }) =
            &event
        {
            self.release(*run_id);
        }
        event
    }

    fn release(&mut self, run_id: RunId) {
        if self.active_run() == Some(run_id) {
            self.active = None;
        }
    }
}
