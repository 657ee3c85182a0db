// azseed-core/src/application/mod.rs

pub mod authenticate;
pub mod connectivity;
pub mod report;
pub mod run;
pub mod script;
pub mod seeding;

#[cfg(test)]
pub(crate) mod testing;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use azseed_core::application::{run_seed, SeedPlan};`
// without knowing the internal file layout.

pub use authenticate::authenticate;
pub use connectivity::verify_connectivity;
pub use report::save_report;
pub use run::{SeedPlan, run_seed};
pub use script::load_seed_script;
pub use seeding::apply_statements;
