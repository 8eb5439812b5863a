//! End-of-run summary.

use std::fmt::Write as _;

use person_suite_application::SuiteReport;
use person_suite_infrastructure::Palette;

/// Renders one line per scenario followed by the totals.
pub fn render(report: &SuiteReport, palette: Palette) -> String {
    let mut out = String::from("\n");

    for outcome in &report.outcomes {
        let statuses: Vec<_> = outcome.statuses.iter().map(ToString::to_string).collect();
        let millis = outcome.duration.as_millis();
        match &outcome.result {
            Ok(()) => {
                let _ = writeln!(
                    out,
                    "{} {} [{}] ({millis} ms)",
                    palette.success("PASSED"),
                    outcome.scenario,
                    statuses.join(", "),
                );
            }
            Err(e) => {
                let _ = writeln!(
                    out,
                    "{} {} [{}] ({millis} ms)\n    {e}",
                    palette.error("FAILED"),
                    outcome.scenario,
                    statuses.join(", "),
                );
            }
        }
    }

    let totals = format!(
        "{} passed, {} failed in {:.2}s",
        report.passed(),
        report.failed(),
        report.duration.as_secs_f64()
    );
    let totals = if report.all_passed() {
        palette.success(&totals)
    } else {
        palette.error(&totals)
    };
    let _ = writeln!(out, "\n{}", palette.bold(&totals));
    out
}
