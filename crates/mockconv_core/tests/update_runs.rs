use std::path::PathBuf;

use mockconv_core::{
    update, AppState, Effect, FileDescriptor, Msg, PipelineError, RunId, RunStatus, Screen,
    STATUS_STEPS,
};
use pretty_assertions::assert_eq;

const STAMP: &str = "2026-10-14 12:00:00";

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn start_run(tool: &str, name: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::ToolSelected(tool.to_string()));
    let (state, _) = update(
        state,
        Msg::FileSelected(FileDescriptor {
            name: name.to_string(),
            size_bytes: 4096,
            mime_type: "application/pdf".to_string(),
        }),
    );
    state
}

fn step(state: AppState, run_id: RunId) -> AppState {
    let (state, effects) = update(
        state,
        Msg::StepElapsed {
            run_id,
            fired_at: STAMP.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn upload_done(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::UploadElapsed { run_id: 1 });
    state
}

fn complete_run(tool: &str, name: &str) -> AppState {
    let mut state = upload_done(start_run(tool, name));
    for _ in 0..STATUS_STEPS.len() {
        state = step(state, 1);
    }
    state
}

#[test]
fn full_run_emits_six_labels_with_even_progress() {
    init_logging();
    let mut state = upload_done(start_run("pdf-to-word", "thesis.pdf"));

    let result = state.view().result.expect("result view opens");
    assert_eq!(result.title, "Processing: PDF to Word");
    assert_eq!(result.status_text, "Initializing...");
    assert_eq!(result.progress_percent, 0);
    assert_eq!(state.view().run_status, Some(RunStatus::Running));

    let mut labels = Vec::new();
    let mut progress = Vec::new();
    for _ in 0..STATUS_STEPS.len() {
        state = step(state, 1);
        let run = state.run().expect("run");
        labels.push(run.status_label());
        progress.push(run.progress_percent());
    }

    assert_eq!(labels, STATUS_STEPS.to_vec());
    assert_eq!(progress, vec![0, 20, 40, 60, 80, 100]);
    assert!(progress.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(state.run().unwrap().status(), RunStatus::Complete);
}

#[test]
fn completed_run_offers_named_artifact() {
    init_logging();
    let state = complete_run("pdf-to-word", "thesis.pdf");

    let artifact = state.artifact().expect("artifact exists once complete");
    assert_eq!(artifact.filename, "thesis.docx");
    let result = state.view().result.unwrap();
    assert_eq!(
        result.status_text,
        "Your file has been successfully processed with PDF to Word!"
    );
    assert_eq!(result.download_label.as_deref(), Some("Download thesis.docx"));
}

#[test]
fn artifact_absent_until_complete() {
    init_logging();
    let mut state = upload_done(start_run("split", "a.pdf"));
    for _ in 0..STATUS_STEPS.len() - 1 {
        state = step(state, 1);
        assert!(state.artifact().is_none());
        assert_eq!(state.run().unwrap().status(), RunStatus::Running);
    }
    state = step(state, 1);
    assert!(state.artifact().is_some());
}

#[test]
fn steps_before_upload_delay_are_ignored() {
    init_logging();
    let state = step(start_run("compress", "a.pdf"), 1);

    let run = state.run().unwrap();
    assert_eq!(run.status(), RunStatus::Pending);
    assert_eq!(run.step_index(), None);
}

#[test]
fn extra_steps_after_completion_change_nothing() {
    init_logging();
    let state = complete_run("compress", "a.pdf");
    let before = state.clone();
    let after = step(state, 1);

    assert_eq!(after.artifact(), before.artifact());
    assert_eq!(after.run(), before.run());
}

#[test]
fn download_succeeds_once_then_resets() {
    init_logging();
    let state = complete_run("pdf-to-jpg", "scan.pdf");
    let (state, effects) = update(state, Msg::DownloadClicked);

    let [Effect::DeliverArtifact { run_id, artifact }] = effects.as_slice() else {
        panic!("expected a single delivery, got {effects:?}");
    };
    assert_eq!(*run_id, 1);
    assert_eq!(artifact.filename, "scan_page1.jpg");
    // Nothing is reset until the sink confirms.
    assert_eq!(state.delivering(), Some(1));
    assert!(state.artifact().is_some());

    let (state, effects) = update(
        state,
        Msg::DownloadSaved {
            run_id: 1,
            path: PathBuf::from("downloads/scan_page1.jpg"),
        },
    );
    assert!(effects.is_empty());
    assert!(state.run().is_none());
    assert!(state.artifact().is_none());
    assert!(state.tool().is_none());
    assert_eq!(state.delivering(), None);
    assert_eq!(state.screen(), Screen::Tools);
    assert!(state.view().result.is_none());

    let (state, effects) = update(state, Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert_eq!(state.notice(), Some(&PipelineError::NoArtifact));
}

#[test]
fn failed_download_keeps_artifact_for_retry() {
    init_logging();
    let (state, _) = update(complete_run("pdf-to-word", "thesis.pdf"), Msg::DownloadClicked);
    let (state, effects) = update(
        state,
        Msg::DownloadFailed {
            run_id: 1,
            reason: "disk full".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.run().unwrap().status(), RunStatus::Complete);
    assert_eq!(state.artifact().unwrap().filename, "thesis.docx");
    assert_eq!(state.delivering(), None);
    assert_eq!(
        state.view().notice.as_deref(),
        Some("The processed file could not be saved: disk full")
    );

    let (state, effects) = update(state, Msg::DownloadClicked);
    assert!(matches!(
        effects.as_slice(),
        [Effect::DeliverArtifact { run_id: 1, .. }]
    ));
    assert_eq!(state.notice(), None);
}

#[test]
fn second_click_while_saving_is_ignored() {
    init_logging();
    let (state, first) = update(complete_run("merge", "a.pdf"), Msg::DownloadClicked);
    assert_eq!(first.len(), 1);

    let (state, second) = update(state, Msg::DownloadClicked);
    assert!(second.is_empty());
    assert_eq!(state.notice(), None);
    assert_eq!(state.delivering(), Some(1));
}

#[test]
fn download_outcome_for_other_run_is_ignored() {
    init_logging();
    let state = complete_run("compress", "a.pdf");
    let before = state.clone();

    let (state, _) = update(
        state,
        Msg::DownloadSaved {
            run_id: 1,
            path: PathBuf::from("a_compressed.pdf"),
        },
    );
    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            run_id: 7,
            reason: "gone".to_string(),
        },
    );

    assert_eq!(state, before);
}

#[test]
fn closing_result_view_does_not_stop_run() {
    init_logging();
    let state = upload_done(start_run("compress", "a.pdf"));
    let (mut state, effects) = update(state, Msg::ResultClosed);
    assert!(effects.is_empty());
    assert!(state.view().result.is_none());

    for _ in 0..STATUS_STEPS.len() {
        state = step(state, 1);
    }
    assert_eq!(state.run().unwrap().status(), RunStatus::Complete);

    let (_, effects) = update(state, Msg::DownloadClicked);
    assert_eq!(effects.len(), 1);
}

#[test]
fn events_from_cancelled_run_are_ignored() {
    init_logging();
    let state = step(upload_done(start_run("compress", "a.pdf")), 1);
    let (state, effects) = update(state, Msg::CancelClicked);
    assert_eq!(effects, vec![Effect::CancelRun { run_id: 1 }]);

    let (state, effects) = update(
        state,
        Msg::FileSelected(FileDescriptor {
            name: "b.pdf".to_string(),
            size_bytes: 1,
            mime_type: "application/pdf".to_string(),
        }),
    );
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleRun { run_id: 2, .. }]
    ));

    let (state, _) = update(state, Msg::UploadElapsed { run_id: 1 });
    assert_eq!(state.run().unwrap().status(), RunStatus::Pending);
    let state = step(state, 1);
    assert_eq!(state.run().unwrap().step_index(), None);
}

#[test]
fn new_file_after_completion_replaces_artifact() {
    init_logging();
    let state = complete_run("compress", "old.pdf");
    let (state, effects) = update(
        state,
        Msg::FileSelected(FileDescriptor {
            name: "new.pdf".to_string(),
            size_bytes: 1,
            mime_type: "application/pdf".to_string(),
        }),
    );

    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleRun { run_id: 2, .. }]
    ));
    assert!(state.artifact().is_none());
    assert_eq!(state.run().unwrap().input().name(), "new.pdf");
}
