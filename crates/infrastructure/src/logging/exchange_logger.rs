//! Console rendering of request/response exchanges.
//!
//! Every exchange is printed as a boxed panel:
//!
//! ```text
//! ╭─ API Request/Response ──────────────────────╮
//! │ POST http://localhost:8080/api/person       │
//! │ Status Code: 201                            │
//! │ Request Data: {"id":0,"name":"Test Person"} │
//! │ Response Data: 12                           │
//! ╰─────────────────────────────────────────────╯
//! ```

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use person_suite_application::ports::ExchangeObserver;
use person_suite_domain::HttpExchange;
use tracing::{debug, warn};

use super::Palette;

const TITLE: &str = "API Request/Response";
const ABSENT: &str = "None";

/// Writes a panel per exchange to a sink (stdout by default).
///
/// Rendering never fails; a sink that refuses the write only produces a
/// warning.
#[derive(Debug)]
pub struct ConsoleExchangeLogger<W: Write + Send = Stdout> {
    sink: Mutex<W>,
    palette: Palette,
}

impl ConsoleExchangeLogger<Stdout> {
    /// Logger printing to stdout, coloured when stdout is a terminal.
    #[must_use]
    pub fn stdout(no_color: bool) -> Self {
        Self::with_writer(io::stdout(), Palette::for_stdout(no_color))
    }
}

impl<W: Write + Send> ConsoleExchangeLogger<W> {
    /// Logger printing to `sink` with the given palette.
    pub const fn with_writer(sink: W, palette: Palette) -> Self {
        Self {
            sink: Mutex::new(sink),
            palette,
        }
    }

    /// Consumes the logger and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Renders the panel for one exchange.
    #[must_use]
    pub fn render(&self, exchange: &HttpExchange) -> String {
        let status = exchange.status_code.to_string();
        let styled_status = if exchange.status().is_failure() {
            self.palette.error(&status)
        } else {
            self.palette.success(&status)
        };
        let request_data = exchange
            .request_body
            .as_ref()
            .map_or_else(|| ABSENT.to_string(), ToString::to_string);
        let response_data = exchange.response_body.as_deref().unwrap_or(ABSENT);
        let target = format!("{} {}", exchange.method, exchange.url);

        // (visible text, styled text)
        let mut lines = vec![
            (target.clone(), self.palette.bold(&target)),
            (
                format!("Status Code: {status}"),
                format!("Status Code: {styled_status}"),
            ),
        ];
        lines.extend(labelled("Request Data: ", &request_data));
        lines.extend(labelled("Response Data: ", response_data));

        let title_width = TITLE.chars().count();
        let width = lines
            .iter()
            .map(|(plain, _)| plain.chars().count())
            .max()
            .unwrap_or(0)
            .max(title_width + 2);

        let mut panel = format!("╭─ {TITLE} {}╮\n", "─".repeat(width - 1 - title_width));
        for (plain, styled) in &lines {
            let pad = width - plain.chars().count();
            panel.push_str(&format!("│ {styled}{} │\n", " ".repeat(pad)));
        }
        panel.push_str(&format!("╰{}╯\n", "─".repeat(width + 2)));
        panel
    }
}

/// Splits `text` into panel lines, prefixing the first with `label`.
fn labelled(label: &str, text: &str) -> Vec<(String, String)> {
    let indent = " ".repeat(label.chars().count());
    let mut lines: Vec<(String, String)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { label } else { indent.as_str() };
            let line = format!("{prefix}{}", line.replace('\t', "    "));
            (line.clone(), line)
        })
        .collect();
    if lines.is_empty() {
        let line = label.trim_end().to_string();
        lines.push((line.clone(), line));
    }
    lines
}

impl<W: Write + Send> ExchangeObserver for ConsoleExchangeLogger<W> {
    fn record(&self, exchange: &HttpExchange) {
        debug!(
            id = %exchange.id,
            sent_at = %exchange.sent_at,
            duration_ms = exchange.duration.as_millis(),
            "exchange completed"
        );
        let panel = self.render(exchange);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = sink.write_all(panel.as_bytes()).and_then(|()| sink.flush()) {
            warn!(error = %e, "failed to write exchange log");
        }
    }
}
