use std::sync::Arc;
use std::time::Duration;

use mockconv_engine::{EngineEvent, EngineHandle, EngineSettings, ScheduleRequest};

fn settings() -> EngineSettings {
    EngineSettings {
        clock: Arc::new(|| "fixed".to_string()),
    }
}

fn request(run_id: u64) -> ScheduleRequest {
    ScheduleRequest {
        run_id,
        upload_delay: Duration::from_millis(1_000),
        step_interval: Duration::from_millis(800),
        step_count: 6,
    }
}

async fn drain_until_done(engine: &mut EngineHandle) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Some(event) = engine.recv().await {
        let done = matches!(
            event,
            EngineEvent::RunFinished { .. } | EngineEvent::RunCancelled { .. }
        );
        events.push(event);
        if done {
            break;
        }
    }
    events
}

#[tokio::test(start_paused = true)]
async fn scheduled_run_reports_every_step_then_finishes() {
    engine_logging::initialize_for_tests();
    let mut engine = EngineHandle::new(settings());
    engine.schedule(request(1));
    assert_eq!(engine.active_run(), Some(1));

    let events = drain_until_done(&mut engine).await;

    assert_eq!(events.len(), 8);
    assert_eq!(events[0], EngineEvent::UploadElapsed { run_id: 1 });
    assert_eq!(events[7], EngineEvent::RunFinished { run_id: 1 });
    assert_eq!(engine.active_run(), None);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_the_active_run() {
    let mut engine = EngineHandle::new(settings());
    engine.schedule(request(4));
    engine.cancel(4);
    assert_eq!(engine.active_run(), None);

    let events = drain_until_done(&mut engine).await;
    assert_eq!(events, vec![EngineEvent::RunCancelled { run_id: 4 }]);
}

#[tokio::test(start_paused = true)]
async fn cancel_for_other_run_is_ignored() {
    let mut engine = EngineHandle::new(settings());
    engine.schedule(request(2));
    engine.cancel(1);

    assert_eq!(engine.active_run(), Some(2));
    let events = drain_until_done(&mut engine).await;
    assert_eq!(events.last(), Some(&EngineEvent::RunFinished { run_id: 2 }));
}

#[tokio::test(start_paused = true)]
async fn new_schedule_supersedes_previous_run() {
    let mut engine = EngineHandle::new(settings());
    engine.schedule(request(1));
    engine.schedule(request(2));

    let first = drain_until_done(&mut engine).await;
    assert_eq!(first, vec![EngineEvent::RunCancelled { run_id: 1 }]);
    assert_eq!(engine.active_run(), Some(2));

    let second = drain_until_done(&mut engine).await;
    assert_eq!(second.len(), 8);
    assert!(second
        .iter()
        .all(|event| !matches!(event, EngineEvent::RunCancelled { .. })));
}
