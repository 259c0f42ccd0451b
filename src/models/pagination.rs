use serde::Serialize;
use std::collections::HashMap;

use crate::error::ApiError;

/// Response envelope for the `/paginated` endpoints. `total` is the
/// count under the active filter, independent of `skip`/`take`.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub total: i64,
    pub data: Vec<T>,
    pub skip: i64,
    pub take: i64,
}

pub(crate) fn default_skip() -> i64 {
    0
}

pub(crate) fn default_take() -> i64 {
    10
}

/// skip must be >= 0, take in [1, 100].
pub(crate) fn validate_bounds(skip: i64, take: i64) -> Result<(), ApiError> {
    let mut field_errors = HashMap::new();
    if skip < 0 {
        field_errors.insert("skip".to_string(), "skip must be >= 0".to_string());
    }
    if !(1..=100).contains(&take) {
        field_errors.insert(
            "take".to_string(),
            "take must be between 1 and 100".to_string(),
        );
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation("Validation failed", field_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_bounds(default_skip(), default_take()).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_bounds(0, 1).is_ok());
        assert!(validate_bounds(0, 100).is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(validate_bounds(-1, 10).is_err());
        assert!(validate_bounds(0, 0).is_err());
        assert!(validate_bounds(0, 101).is_err());
    }

    #[test]
    fn both_violations_are_reported() {
        let err = validate_bounds(-5, 500).unwrap_err();
        match err {
            ApiError::Validation { field_errors, .. } => {
                assert!(field_errors.contains_key("skip"));
                assert!(field_errors.contains_key("take"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
