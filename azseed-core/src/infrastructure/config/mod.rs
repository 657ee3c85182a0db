pub mod settings;

pub use settings::{ConfigOverrides, SeedConfig, load_seed_config};
