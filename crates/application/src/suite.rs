//! Sequential suite runner.
//!
//! Runs the selected scenarios one after another, isolating their failures:
//! a failed scenario is recorded in its outcome and the next one starts
//! regardless.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info};
use url::Url;

use crate::api::PersonApi;
use crate::error::ScenarioError;
use crate::ports::{ExchangeLog, ExchangeObserver, HttpClient};
use crate::scenarios::Scenario;

/// Result of one scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Scenario that ran.
    pub scenario: Scenario,
    /// Status codes observed, fixtures included, in order.
    pub statuses: Vec<u16>,
    /// `Ok` when the scenario passed.
    pub result: Result<(), ScenarioError>,
    /// Wall-clock time.
    pub duration: Duration,
}

impl ScenarioOutcome {
    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    /// One entry per scenario, in execution order.
    pub outcomes: Vec<ScenarioOutcome>,
    /// Total wall-clock time.
    pub duration: Duration,
}

impl SuiteReport {
    /// Number of passed scenarios.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of failed scenarios.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Returns true when every scenario passed (vacuously true when empty).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    /// Looks up the outcome of one scenario.
    #[must_use]
    pub fn outcome(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.scenario == scenario)
    }

    /// Scenario names with the status codes each observed.
    ///
    /// Two runs against equivalent fresh servers produce equal profiles.
    #[must_use]
    pub fn status_profile(&self) -> Vec<(&'static str, Vec<u16>)> {
        self.outcomes
            .iter()
            .map(|o| (o.scenario.name(), o.statuses.clone()))
            .collect()
    }
}

/// Runs scenarios in order against one server.
pub struct SuiteRunner<C: HttpClient, O: ExchangeObserver> {
    client: Arc<C>,
    observer: O,
    base_url: Url,
    filter: Option<String>,
}

impl<C: HttpClient, O: ExchangeObserver> SuiteRunner<C, O> {
    /// Creates a runner for the server rooted at `base_url`.
    pub const fn new(client: Arc<C>, observer: O, base_url: Url) -> Self {
        Self {
            client,
            observer,
            base_url,
            filter: None,
        }
    }

    /// Only run scenarios whose name contains `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Scenarios that `run` will execute, in order.
    #[must_use]
    pub fn selected(&self) -> Vec<Scenario> {
        Scenario::all()
            .iter()
            .copied()
            .filter(|s| {
                self.filter
                    .as_deref()
                    .is_none_or(|filter| s.name().contains(filter))
            })
            .collect()
    }

    /// Runs every selected scenario and collects the outcomes.
    pub async fn run(&self) -> SuiteReport {
        let start = Instant::now();
        let mut outcomes = Vec::new();

        for scenario in self.selected() {
            outcomes.push(self.run_one(scenario).await);
        }

        let report = SuiteReport {
            outcomes,
            duration: start.elapsed(),
        };
        info!(
            passed = report.passed(),
            failed = report.failed(),
            "Suite finished"
        );
        report
    }

    /// Runs one scenario with its own exchange log.
    pub async fn run_one(&self, scenario: Scenario) -> ScenarioOutcome {
        let log = ExchangeLog::new();
        let api = PersonApi::new(
            Arc::clone(&self.client),
            (&self.observer, &log),
            self.base_url.clone(),
        );

        info!(scenario = scenario.name(), "Running scenario");
        let start = Instant::now();
        let result = scenario.run(&api).await;
        let duration = start.elapsed();

        match &result {
            Ok(()) => info!(scenario = scenario.name(), "PASSED"),
            Err(e) => error!(scenario = scenario.name(), error = %e, "FAILED"),
        }

        ScenarioOutcome {
            scenario,
            statuses: log.statuses(),
            result,
            duration,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ports::NoopObserver;
    use crate::test_support::{ScriptedClient, base_url, respond};
    use person_suite_domain::HttpMethod;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_selects_by_substring() {
        let client = Arc::new(ScriptedClient::fixed(200, ""));
        let runner = SuiteRunner::new(client, NoopObserver, base_url()).with_filter("update");
        assert_eq!(
            runner.selected(),
            vec![
                Scenario::UpdatePersonSuccess,
                Scenario::UpdatePersonNotFound,
                Scenario::UpdatePersonInvalidData,
            ]
        );
    }

    #[tokio::test]
    async fn test_setup_failure_is_isolated() {
        // Creating anything fails; reads answer 404.
        let client = ScriptedClient::new(|method, _, _| {
            Ok(match method {
                HttpMethod::Post => respond(500, ""),
                _ => respond(404, ""),
            })
        });
        let observed = ExchangeLog::new();
        let runner = SuiteRunner::new(Arc::new(client), &observed, base_url());

        let report = runner.run().await;

        assert_eq!(report.outcomes.len(), Scenario::all().len());
        for outcome in &report.outcomes {
            let setup_failed = outcome
                .result
                .as_ref()
                .err()
                .is_some_and(ScenarioError::is_setup);
            assert_eq!(setup_failed, outcome.scenario.needs_person(), "{}", outcome.scenario);
        }
        assert!(report.outcome(Scenario::GetPersonNotFound).unwrap().passed());
        assert!(report.outcome(Scenario::PostNegative).unwrap().passed());
        assert!(!report.outcome(Scenario::PostPersonSuccess).unwrap().passed());
        assert_eq!(
            report.outcome(Scenario::PostNegative).unwrap().statuses,
            vec![500, 500, 500]
        );
        let recorded: usize = report.outcomes.iter().map(|o| o.statuses.len()).sum();
        assert_eq!(observed.len(), recorded);
    }

    #[tokio::test]
    async fn test_transport_failures_fail_each_scenario() {
        let client = ScriptedClient::new(|_, _, _| {
            Err(crate::ports::HttpClientError::ConnectionFailed(
                "connection reset".to_string(),
            ))
        });
        let runner =
            SuiteRunner::new(Arc::new(client), NoopObserver, base_url()).with_filter("not_found");

        let report = runner.run().await;

        assert_eq!(report.failed(), 2);
        assert!(!report.all_passed());
        assert!(report.outcomes.iter().all(|o| o.statuses.is_empty()));
    }
}
