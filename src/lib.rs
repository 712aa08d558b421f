pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::SmokeFileConfig, CliConfig, ResolvedConfig};
pub use core::check::{CheckSpec, PayloadShape};
pub use core::runner::{RunSummary, SmokeRunner};
pub use core::sequence::smoke_sequence;
pub use core::transport::HttpTransport;
pub use domain::model::{Difficulty, HttpMethod, LeaderboardEntry, Meal, NewMeal};
pub use utils::error::{Result, SmokeError};
