pub mod check;
pub mod runner;
pub mod sequence;
pub mod transport;

pub use crate::domain::model::{Difficulty, HttpMethod, LeaderboardEntry, Meal, NewMeal};
pub use crate::domain::ports::{ApiResponse, ApiTransport, ConfigProvider};
pub use crate::utils::error::Result;
