use indicatif::{ProgressBar, ProgressStyle};
use mockconv_core::{AppViewModel, Screen};

const BAR_TEMPLATE: &str = "{prefix:.bold} [{bar:40.cyan/blue}] {pos:>3}% {msg}";

/// Display surface for view models. Purely a sink.
pub trait ViewSink {
    fn render(&mut self, view: &AppViewModel);
}

/// Prints the upload state as lines and the result view as a progress bar.
#[derive(Default)]
pub struct TerminalRenderer {
    bar: Option<ProgressBar>,
    last_lines: Vec<String>,
    last_notice: Option<String>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_once(&mut self, lines: Vec<String>) {
        if lines == self.last_lines {
            return;
        }
        for line in &lines {
            match &self.bar {
                Some(bar) => bar.println(line),
                None => println!("{line}"),
            }
        }
        self.last_lines = lines;
    }

    fn bar(&mut self, title: &str) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let style = ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            let bar = ProgressBar::new(100).with_style(style);
            bar.set_prefix(title.to_string());
            bar
        })
    }
}

impl ViewSink for TerminalRenderer {
    fn render(&mut self, view: &AppViewModel) {
        if view.notice != self.last_notice {
            if let Some(notice) = &view.notice {
                eprintln!("{notice}");
            }
            self.last_notice = view.notice.clone();
        }

        self.print_once(upload_lines(view));

        match &view.result {
            Some(result) => {
                let bar = self.bar(&result.title);
                bar.set_position(u64::from(result.progress_percent));
                bar.set_message(result.status_text.clone());
                if let Some(label) = &result.download_label {
                    bar.finish_with_message(format!("{} | {label}", result.status_text));
                }
            }
            None => {
                if let Some(bar) = self.bar.take() {
                    bar.finish();
                }
            }
        }
    }
}

/// Upload-screen lines for the current view; empty on the tool list.
pub fn upload_lines(view: &AppViewModel) -> Vec<String> {
    if view.screen != Screen::Upload {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity(3);
    if let Some(tool) = &view.selected_tool_name {
        let accept = view.accept_filter.as_deref().unwrap_or("");
        lines.push(format!("{tool} (accepts {accept})"));
    }
    lines.push(format!("{}: {}", view.upload_heading, view.upload_hint));
    if let Some(info) = &view.file_info {
        lines.push(format!("  {} ({})", info.name, info.size_label));
    }
    lines
}
