// azseed-core/src/domain/report.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StatementOutcome {
    Succeeded,
    /// The server answered with something other than 200.
    Failed { status: u16, body: String },
    /// The request never produced a response.
    NoResponse { reason: String },
}

impl StatementOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StatementOutcome::Succeeded)
    }

    /// Label printed in the per-statement warning line.
    pub fn status_label(&self) -> String {
        match self {
            StatementOutcome::Succeeded => "200".to_string(),
            StatementOutcome::Failed { status, .. } => status.to_string(),
            StatementOutcome::NoResponse { .. } => "No response".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementResult {
    /// 1-based position in the seed file.
    pub index: usize,
    #[serde(flatten)]
    pub outcome: StatementOutcome,
}

/// Aggregate of one seeding run. Only failures are itemised.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<StatementResult>,
}

impl RunReport {
    pub fn start(total: usize) -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            total,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record(&mut self, result: StatementResult) {
        if result.outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failures.push(result);
        }
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("{}/{}", self.succeeded, self.total)
    }
}
