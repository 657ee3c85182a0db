// azseed/src/commands/inspect.rs
//
// USE CASE: Dry-run summary of the seed file.

use anyhow::Context;
use std::path::PathBuf;

use azseed_core::application::load_seed_script;
use azseed_core::infrastructure::config::load_seed_config;

use crate::commands::report_fatal;

const PREVIEW_WIDTH: usize = 96;

pub fn execute(config: Option<PathBuf>, seed_file: Option<PathBuf>, list: bool) -> anyhow::Result<()> {
    let seed_file = match seed_file {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            load_seed_config(&cwd, config.as_deref())
                .context("Failed to load azseed configuration")?
                .seed_file
        }
    };

    let script = match load_seed_script(&seed_file) {
        Ok(script) => script,
        Err(e) => {
            report_fatal(e);
            std::process::exit(1);
        }
    };

    println!(
        "✅ Found {} ({} lines)",
        seed_file.display(),
        script.line_count
    );
    println!("   Statements to execute: {}", script.len());
    println!("   PRINT directives skipped: {}", script.skipped_directives);

    if list {
        for (i, statement) in script.statements.iter().enumerate() {
            println!("   ➜ [{}] {}", i + 1, preview(statement));
        }
    }

    Ok(())
}

/// First line of the statement, cut to a readable width.
fn preview(statement: &str) -> String {
    let first_line = statement.lines().next().unwrap_or_default();
    let mut shown: String = first_line.chars().take(PREVIEW_WIDTH).collect();
    if shown.len() < first_line.len() || statement.lines().count() > 1 {
        shown.push_str(" …");
    }
    shown
}
