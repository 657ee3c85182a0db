// azseed-core/src/application/seeding.rs

use tracing::{debug, instrument, warn};

use crate::domain::{RunReport, Session, StatementOutcome, StatementResult};
use crate::ports::QueryExecutor;

/// SEED_FILE_LOADED -> STATEMENTS_EXECUTED.
///
/// Statements run one at a time, in source order: seed rows may reference
/// rows inserted by earlier statements. A failed statement is reported and
/// skipped, it never stops the batch. Nothing is retried.
#[instrument(skip_all, fields(statements = statements.len()))]
pub async fn apply_statements<E>(
    executor: &E,
    session: &Session,
    statements: &[String],
) -> RunReport
where
    E: QueryExecutor + ?Sized,
{
    let total = statements.len();
    println!("🔄 Executing {} SQL statements...", total);

    let mut report = RunReport::start(total);

    for (i, statement) in statements.iter().enumerate() {
        let index = i + 1;
        println!("   Executing statement {}/{}...", index, total);

        let outcome = match executor.execute(session, statement).await {
            Ok(response) if response.is_success() => StatementOutcome::Succeeded,
            Ok(response) => StatementOutcome::Failed {
                status: response.status,
                body: response.body,
            },
            Err(e) => {
                warn!("Failed to execute statement {}: {}", index, e);
                StatementOutcome::NoResponse {
                    reason: e.to_string(),
                }
            }
        };

        if !outcome.is_success() {
            println!(
                "   ⚠️ Statement {} failed: {}",
                index,
                outcome.status_label()
            );
            if let StatementOutcome::Failed { body, .. } = &outcome {
                debug!(index, %body, "Server rejected statement");
            }
        }

        report.record(StatementResult { index, outcome });
    }

    let report = report.finish();
    println!(
        "✅ Successfully executed {} statements",
        report.summary()
    );
    report
}
