use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::{bail, Result};
use engine_logging::{engine_info, engine_warn};
use mockconv_core::{update, AppState, FileDescriptor, Msg, RunStatus};
use mockconv_engine::{DownloadSink, EngineSettings};

use super::effects::EffectRunner;
use super::ui::render::ViewSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The artifact was saved at this path.
    Downloaded(PathBuf),
    /// The run was aborted before completing.
    Cancelled,
}

enum Next {
    Cancel,
    Engine(Option<Msg>),
}

/// Message loop wiring the pure core to the engine and a display surface.
pub struct App<D: DownloadSink, V: ViewSink> {
    state: AppState,
    effects: EffectRunner<D>,
    view: V,
}

impl<D: DownloadSink, V: ViewSink> App<D, V> {
    pub fn new(state: AppState, settings: EngineSettings, downloads: D, view: V) -> Self {
        Self {
            state,
            effects: EffectRunner::new(settings, downloads),
            view,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one message, renders when something changed and executes the
    /// resulting effects. Messages produced by those effects are applied in
    /// turn. Returns the paths of downloads saved along the way.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<PathBuf> {
        let mut saved = Vec::new();
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Msg::DownloadSaved { path, .. } = &msg {
                saved.push(path.clone());
            }
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            let view = state.view();
            let was_dirty = state.consume_dirty();
            self.state = state;
            if was_dirty {
                self.view.render(&view);
            }
            queue.extend(self.effects.apply(effects));
        }
        saved
    }

    /// Drives one tool + file through the whole pipeline and downloads the
    /// result. `cancel` resolving aborts the run.
    pub async fn run_session<C>(
        &mut self,
        tool: &str,
        file: FileDescriptor,
        cancel: C,
    ) -> Result<SessionOutcome>
    where
        C: std::future::Future<Output = ()>,
    {
        self.dispatch(Msg::ToolSelected(tool.to_string()));
        self.dispatch(Msg::FileSelected(file));
        if let Some(notice) = self.state.notice() {
            bail!("{notice}");
        }

        tokio::pin!(cancel);
        let mut cancel_requested = false;
        loop {
            match self.state.run().map(|run| run.status()) {
                None => return Ok(SessionOutcome::Cancelled),
                Some(RunStatus::Complete) => break,
                Some(RunStatus::Pending | RunStatus::Running) => {}
            }

            let next = tokio::select! {
                _ = &mut cancel, if !cancel_requested => Next::Cancel,
                msg = self.effects.next_msg() => Next::Engine(msg),
            };
            match next {
                Next::Cancel => {
                    engine_warn!("Cancellation requested");
                    cancel_requested = true;
                    self.dispatch(Msg::CancelClicked);
                }
                Next::Engine(Some(msg)) => {
                    self.dispatch(msg);
                }
                Next::Engine(None) => bail!("engine stopped before the run completed"),
            }
        }

        let saved = self.dispatch(Msg::DownloadClicked);
        match (saved.into_iter().next(), self.state.notice()) {
            (Some(path), _) => {
                engine_info!("Session finished: {}", path.display());
                Ok(SessionOutcome::Downloaded(path))
            }
            (None, Some(notice)) => bail!("{notice}"),
            (None, None) => bail!("download produced no file"),
        }
    }
}
