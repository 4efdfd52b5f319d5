use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::{
    generate_artifact, validate_file, AppState, Effect, FileDescriptor, Msg, PipelineError,
    ProcessingRun, RunId, RunStatus, Screen, Tool, STATUS_STEPS,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ToolSelected(id) => {
            // The tool stays fixed while its run is in flight.
            if state.has_active_run() {
                engine_debug!("ToolSelected({id}) ignored: run in progress");
                return (state, Vec::new());
            }
            let tool = Tool::from_id(&id);
            engine_info!("Tool selected: {}", tool.id());
            // An undownloaded artifact from the previous run is discarded.
            state.clear_run();
            state.set_result_visible(false);
            state.set_notice(None);
            state.set_tool(tool);
            state.set_screen(Screen::Upload);
            Vec::new()
        }
        Msg::BackToToolsClicked => {
            state.set_screen(Screen::Tools);
            Vec::new()
        }
        Msg::FileSelected(descriptor) => select_file(&mut state, descriptor),
        Msg::UploadElapsed { run_id } => {
            let started = state
                .current_run_mut(run_id)
                .is_some_and(|run| run.start());
            if started {
                engine_debug!("Run {run_id} started");
                state.set_result_visible(true);
                state.mark_dirty();
            } else {
                engine_debug!("UploadElapsed for stale run {run_id} ignored");
            }
            Vec::new()
        }
        Msg::StepElapsed { run_id, fired_at } => {
            apply_step(&mut state, run_id, &fired_at);
            Vec::new()
        }
        Msg::ResultClosed => {
            state.set_result_visible(false);
            Vec::new()
        }
        Msg::CancelClicked => {
            if !state.has_active_run() {
                return (state, Vec::new());
            }
            state.set_result_visible(false);
            match state.clear_run() {
                Some(run) => {
                    engine_info!("Run {} cancelled", run.id());
                    vec![Effect::CancelRun { run_id: run.id() }]
                }
                None => Vec::new(),
            }
        }
        Msg::DownloadClicked => request_download(&mut state),
        Msg::DownloadSaved { run_id, path } => {
            if state.delivering() == Some(run_id) {
                engine_info!("Run {run_id} downloaded to {}", path.display());
                state.reset_interface();
            } else {
                engine_debug!("DownloadSaved for run {run_id} ignored: not delivering");
            }
            Vec::new()
        }
        Msg::DownloadFailed { run_id, reason } => {
            if state.delivering() == Some(run_id) {
                // The completed run and its artifact stay, so the user can retry.
                engine_warn!("Download of run {run_id} failed: {reason}");
                state.set_delivering(None);
                state.set_notice(Some(PipelineError::DownloadFailed { reason }));
            } else {
                engine_debug!("DownloadFailed for run {run_id} ignored: not delivering");
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.set_notice(None);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn select_file(state: &mut AppState, descriptor: FileDescriptor) -> Vec<Effect> {
    let Some(tool) = state.tool().cloned() else {
        state.set_notice(Some(PipelineError::NoToolSelected));
        return Vec::new();
    };
    if state.has_active_run() {
        engine_warn!("File {} rejected: run in progress", descriptor.name);
        state.set_notice(Some(PipelineError::RunInProgress));
        return Vec::new();
    }

    let input = match validate_file(descriptor) {
        Ok(input) => input,
        Err(err) => {
            engine_warn!("File rejected: {err:?}");
            state.set_notice(Some(err));
            return Vec::new();
        }
    };

    engine_info!(
        "File accepted: name={} size={} mime={}",
        input.name(),
        input.size_bytes(),
        input.mime_type()
    );
    state.set_notice(None);
    state.set_result_visible(false);
    let run_id = state.begin_run(|id| ProcessingRun::new(id, tool, input));
    vec![Effect::ScheduleRun {
        run_id,
        upload_delay_ms: state.upload_delay_ms(),
        step_interval_ms: state.step_interval_ms(),
        step_count: STATUS_STEPS.len(),
    }]
}

fn request_download(state: &mut AppState) -> Vec<Effect> {
    if let Some(run_id) = state.delivering() {
        engine_debug!("DownloadClicked ignored: run {run_id} is already being saved");
        return Vec::new();
    }
    let completed = state
        .run()
        .map(ProcessingRun::id)
        .zip(state.artifact().cloned());
    let Some((run_id, artifact)) = completed else {
        engine_warn!("Download requested without a completed run");
        state.set_notice(Some(PipelineError::NoArtifact));
        return Vec::new();
    };

    engine_info!("Delivering {}", artifact.filename);
    state.set_notice(None);
    state.set_delivering(Some(run_id));
    vec![Effect::DeliverArtifact { run_id, artifact }]
}

fn apply_step(state: &mut AppState, run_id: RunId, fired_at: &str) {
    let Some(run) = state.current_run_mut(run_id) else {
        engine_debug!("StepElapsed for stale run {run_id} ignored");
        return;
    };
    if run.status() != RunStatus::Running {
        engine_debug!("StepElapsed for run {run_id} in {:?} ignored", run.status());
        return;
    }

    let finished = run.advance();
    engine_debug!("Run {run_id}: {} ({}%)", run.status_label(), run.progress_percent());
    if finished {
        let artifact = generate_artifact(run.tool(), run.input(), fired_at);
        engine_info!("Run {run_id} complete: {}", artifact.filename);
        state.set_artifact(artifact);
    }
    state.mark_dirty();
}
