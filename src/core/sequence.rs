use crate::core::check::{CheckSpec, PayloadShape};
use crate::core::{Difficulty, HttpMethod, NewMeal};
use serde_json::json;

/// The five fixture meals the smoke run creates (twice).
pub fn fixture_meals() -> Vec<NewMeal> {
    vec![
        NewMeal::new("Spaghetti Carbonara", "Italian", 12.5, Difficulty::Med),
        NewMeal::new("Pad Thai", "Thai", 9.25, Difficulty::Low),
        NewMeal::new("Beef Bourguignon", "French", 24.0, Difficulty::High),
        NewMeal::new("Sushi Platter", "Japanese", 18.75, Difficulty::High),
        NewMeal::new("Fish Tacos", "Mexican", 8.5, Difficulty::Low),
    ]
}

pub fn health_check() -> CheckSpec {
    CheckSpec::new("health check", HttpMethod::Get, "/health")
        .expect_field("status", json!("healthy"))
}

pub fn db_check() -> CheckSpec {
    CheckSpec::new("db check", HttpMethod::Get, "/db-check")
        .expect_field("database_status", json!("healthy"))
}

/// The original harness never looked at this result, so the outcome is
/// logged but deliberately non-fatal.
pub fn clear_catalog() -> CheckSpec {
    CheckSpec::new("clear meal catalog", HttpMethod::Delete, "/clear-meals")
        .expect_field("status", json!("success"))
        .non_fatal()
}

pub fn create_meal(meal: &NewMeal) -> CheckSpec {
    CheckSpec::new(
        format!("create meal '{}'", meal.meal),
        HttpMethod::Post,
        "/create-meal",
    )
    .with_body(json!({
        "meal": meal.meal.clone(),
        "cuisine": meal.cuisine.clone(),
        "price": meal.price,
        "difficulty": meal.difficulty,
    }))
    .expect_field("status", json!("success"))
}

pub fn delete_meal(id: i64) -> CheckSpec {
    CheckSpec::new(
        format!("delete meal {}", id),
        HttpMethod::Delete,
        format!("/delete-meal/{}", id),
    )
    .expect_field("status", json!("success"))
}

pub fn get_meal_by_id(id: i64) -> CheckSpec {
    CheckSpec::new(
        format!("get meal by id {}", id),
        HttpMethod::Get,
        format!("/get-meal-by-id/{}", id),
    )
    .expect_field("status", json!("success"))
    .with_payload(PayloadShape::Meal)
    .echoes_body()
}

pub fn get_meal_by_name(name: &str) -> CheckSpec {
    CheckSpec::new(
        format!("get meal by name '{}'", name),
        HttpMethod::Get,
        format!("/get-meal-by-name/{}", name),
    )
    .expect_field("status", json!("success"))
    .with_payload(PayloadShape::Meal)
    .echoes_body()
}

pub fn prep_combatant(name: &str) -> CheckSpec {
    CheckSpec::new(
        format!("prep combatant '{}'", name),
        HttpMethod::Post,
        "/prep-combatant",
    )
    .with_body(json!({ "meal": name }))
    .expect_status(200)
}

pub fn get_combatants() -> CheckSpec {
    CheckSpec::new("get combatants", HttpMethod::Get, "/get-combatants")
        .expect_field("status", json!("success"))
        .with_payload(PayloadShape::Combatants)
        .echoes_body()
}

pub fn battle() -> CheckSpec {
    CheckSpec::new("battle", HttpMethod::Get, "/battle")
        .expect_status(200)
        .echoes_body()
}

pub fn clear_combatants() -> CheckSpec {
    CheckSpec::new("clear combatants", HttpMethod::Post, "/clear-combatants")
        .expect_field("status", json!("success"))
}

pub fn leaderboard() -> CheckSpec {
    CheckSpec::new("get leaderboard", HttpMethod::Get, "/leaderboard")
        .expect_field("status", json!("success"))
        .with_payload(PayloadShape::Leaderboard)
        .echoes_body()
}

/// The fixed driver sequence. Order matters: later checks depend on the
/// service-side state earlier checks set up.
pub fn smoke_sequence() -> Vec<CheckSpec> {
    let meals = fixture_meals();
    let mut checks = vec![health_check(), db_check()];

    for meal in &meals {
        checks.push(create_meal(meal));
    }
    checks.push(delete_meal(1));
    checks.push(delete_meal(2));
    checks.push(get_meal_by_id(3));
    checks.push(get_meal_by_name("Sushi Platter"));

    checks.push(clear_catalog());
    for meal in &meals {
        checks.push(create_meal(meal));
    }
    checks.push(get_meal_by_id(8));

    checks.push(prep_combatant("Spaghetti Carbonara"));
    checks.push(prep_combatant("Fish Tacos"));
    checks.push(get_combatants());
    checks.push(battle());
    checks.push(clear_combatants());
    checks.push(leaderboard());

    checks
}
