use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_price, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preparation difficulty as the meal_max service spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Low => write!(f, "LOW"),
            Difficulty::Med => write!(f, "MED"),
            Difficulty::High => write!(f, "HIGH"),
        }
    }
}

/// A meal row as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

/// Payload for the create-meal endpoint. No id; the service assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeal {
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl NewMeal {
    pub fn new(meal: &str, cuisine: &str, price: f64, difficulty: Difficulty) -> Self {
        Self {
            meal: meal.to_string(),
            cuisine: cuisine.to_string(),
            price,
            difficulty,
        }
    }

    pub fn to_request_body(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(SmokeError::from)
    }
}

impl Validate for NewMeal {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("meal", &self.meal)?;
        validate_non_empty_string("cuisine", &self.cuisine)?;
        validate_positive_price("price", self.price)?;
        Ok(())
    }
}

/// One row of the leaderboard payload, including battle stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}
