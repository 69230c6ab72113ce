//! juris TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::{perform, App, AppState, Request, Response};

use juris_core::config::Config;
use juris_webhooks::WebhookClient;
use ratatui::text::Line;

/// Start the interactive TUI. Requests run on `runtime`; the terminal is
/// driven from the calling thread.
pub fn run(
    config: Config,
    client: WebhookClient,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<()> {
    App::new(config, client, runtime).run()
}

/// Flatten rendered lines to plain text, one line per row, trailing blanks
/// trimmed. Used by the headless CLI output.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        let row: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn plain_text_joins_spans_and_trims() {
        let lines = vec![
            Line::from(vec![Span::raw("Vara: "), Span::raw("1ª Cível   ")]),
            Line::from(""),
        ];
        assert_eq!(plain_text(&lines), "Vara: 1ª Cível\n\n");
    }
}
