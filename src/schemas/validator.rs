use crate::{
    error::{PlannerError, Result},
    types::TripRequest,
};
use jsonschema::JSONSchema;
use serde_json::Value;

/// JSON Schema describing a [`TripRequest`] document.
pub fn trip_request_schema() -> Result<Value> {
    Ok(serde_json::to_value(schemars::schema_for!(TripRequest))?)
}

/// Validation strategies for trip requests read from JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestValidator {
    /// Fast validation using serde
    #[default]
    SerdeFirst,
    /// Check against the generated JSON Schema first, reporting every violation
    Strict,
}

impl RequestValidator {
    /// Validate and deserialize a trip request
    pub fn parse_request(&self, value: Value) -> Result<TripRequest> {
        if *self == RequestValidator::Strict {
            check_against_schema(&value)?;
        }
        serde_first_validate(value)
    }

    pub fn parse_request_str(&self, json: &str) -> Result<TripRequest> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_request(value)
    }
}

/// Fast serde-first validator
fn serde_first_validate(value: Value) -> Result<TripRequest> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        PlannerError::Validation(format!(
            "Request validation failed at {}: {}",
            e.path(),
            e
        ))
    })
}

fn check_against_schema(instance: &Value) -> Result<()> {
    let schema = trip_request_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| PlannerError::Validation(format!("Invalid request schema: {err}")))?;

    if let Err(errors) = compiled.validate(instance) {
        let details: Vec<String> = errors
            .map(|err| {
                let path = err.instance_path.to_string();
                let path = if path.is_empty() { "/".to_string() } else { path };
                format!("{path}: {err}")
            })
            .collect();
        return Err(PlannerError::Validation(format!(
            "Request does not match schema: {}",
            details.join("; ")
        )));
    }
    Ok(())
}
