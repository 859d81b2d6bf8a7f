// ABOUTME: Stage timer reporting how long a pipeline step took when it goes out of scope
// ABOUTME: Emits a debug event for every stage and a warning for stages over their budget

use std::time::{Duration, Instant};
use tracing::{Level, Span, debug, field, span, warn};

/// Times a named stage from creation until drop.
///
/// The elapsed time is recorded on a `stage` span and in a debug event. If a budget
/// was given with [`PerfTimer::with_warn_threshold`], exceeding it also logs a warning.
#[must_use = "the stage is timed until the timer is dropped"]
pub struct PerfTimer {
    operation: &'static str,
    started: Instant,
    budget: Option<Duration>,
    span: Span,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            started: Instant::now(),
            budget: None,
            span: span!(Level::DEBUG, "stage", operation, elapsed_us = field::Empty),
        }
    }

    pub fn with_warn_threshold(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// End the stage now instead of at the end of the scope
    pub fn finish(self) {}
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.span.record("elapsed_us", elapsed_us);

        debug!(operation = self.operation, elapsed_us, "Stage finished");

        if let Some(budget) = self.budget.filter(|budget| elapsed > *budget) {
            let budget_us = u64::try_from(budget.as_micros()).unwrap_or(u64::MAX);
            warn!(
                operation = self.operation,
                elapsed_us,
                budget_us,
                "Slow operation detected"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_elapsed_grows() {
        let timer = PerfTimer::new("transform");
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed() >= Duration::from_millis(2));
        assert_eq!(timer.operation(), "transform");
        timer.finish();
    }

    #[test]
    fn test_stage_within_budget_only_reports_debug() {
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(Level::DEBUG)
                    .with_fields(expect::msg("Stage finished")),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer =
                PerfTimer::new("transform").with_warn_threshold(Duration::from_secs(3600));
            drop(timer);
        });

        handle.assert_finished();
    }

    #[test]
    fn test_stage_over_budget_warns() {
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().at_level(Level::DEBUG))
            .event(
                expect::event()
                    .at_level(Level::WARN)
                    .with_fields(expect::msg("Slow operation detected")),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer = PerfTimer::new("transform").with_warn_threshold(Duration::ZERO);
            std::thread::sleep(Duration::from_millis(1));
            drop(timer);
        });

        handle.assert_finished();
    }
}
