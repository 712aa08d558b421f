use crate::core::{ApiResponse, HttpMethod, LeaderboardEntry, Meal};
use serde_json::Value;

/// Shape the response payload must decode to, beyond the marker fields.
/// List shapes are validated only when the envelope carries the matching key;
/// the service is free to omit an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    None,
    Meal,
    Combatants,
    Leaderboard,
}

/// One declarative smoke check: the request to issue and the predicate the
/// response must satisfy.
#[derive(Debug, Clone)]
pub struct CheckSpec {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub expect_status: Option<u16>,
    pub expect_fields: Vec<(&'static str, Value)>,
    pub payload: PayloadShape,
    pub echo_body: bool,
    pub fatal: bool,
}

impl CheckSpec {
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            body: None,
            expect_status: None,
            expect_fields: Vec::new(),
            payload: PayloadShape::None,
            echo_body: false,
            fatal: true,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expect_status = Some(status);
        self
    }

    pub fn expect_field(mut self, key: &'static str, value: Value) -> Self {
        self.expect_fields.push((key, value));
        self
    }

    pub fn with_payload(mut self, shape: PayloadShape) -> Self {
        self.payload = shape;
        self
    }

    pub fn echoes_body(mut self) -> Self {
        self.echo_body = true;
        self
    }

    /// The outcome of this check is logged but never aborts the run.
    pub fn non_fatal(mut self) -> Self {
        self.fatal = false;
        self
    }

    /// Evaluate the response against this check's expectations. Returns the
    /// first mismatch as a human-readable reason.
    pub fn evaluate(&self, response: &ApiResponse) -> std::result::Result<(), String> {
        if let Some(expected) = self.expect_status {
            if response.status != expected {
                return Err(format!(
                    "expected HTTP {}, got HTTP {}",
                    expected, response.status
                ));
            }
        }

        for (key, expected) in &self.expect_fields {
            match response.body.get(key) {
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(format!(
                        "field '{}' expected {}, got {}",
                        key, expected, actual
                    ));
                }
                None => {
                    return Err(format!("field '{}' missing from response body", key));
                }
            }
        }

        decode_payload(self.payload, &response.body)
    }
}

fn decode_payload(shape: PayloadShape, body: &Value) -> std::result::Result<(), String> {
    match shape {
        PayloadShape::None => Ok(()),
        PayloadShape::Meal => {
            // The meal may be nested under "meal" or flattened into the
            // envelope; a flattened row reuses "meal" for the name string.
            let candidate = match body.get("meal") {
                Some(nested) if nested.is_object() => nested,
                _ => body,
            };
            serde_json::from_value::<Meal>(candidate.clone())
                .map(|_| ())
                .map_err(|e| format!("meal payload does not decode: {}", e))
        }
        PayloadShape::Combatants => match body.get("combatants") {
            Some(list) => serde_json::from_value::<Vec<Meal>>(list.clone())
                .map(|_| ())
                .map_err(|e| format!("combatants payload does not decode: {}", e)),
            None => Ok(()),
        },
        PayloadShape::Leaderboard => match body.get("leaderboard") {
            Some(list) => serde_json::from_value::<Vec<LeaderboardEntry>>(list.clone())
                .map(|_| ())
                .map_err(|e| format!("leaderboard payload does not decode: {}", e)),
            None => Ok(()),
        },
    }
}
