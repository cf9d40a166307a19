use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::error::AppError;

pub const NAME_MAX_CHARS: usize = 50;
pub const DESC_MAX_CHARS: usize = 1000;

/// Wraps a payload under a single top-level key, e.g. `{"experiment": {...}}`.
pub struct Envelope<T> {
    key: &'static str,
    value: T,
}

impl<T> Envelope<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}

/// Acknowledgement returned by delete endpoints.
#[derive(Serialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    #[schema(example = true)]
    pub result: bool,
}

/// Reject values longer than `max` Unicode characters.
pub fn validate_max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "Field '{field}' must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    validate_max_chars("name", name, NAME_MAX_CHARS)
}

pub fn validate_desc(desc: &str) -> Result<(), AppError> {
    validate_max_chars("desc", desc, DESC_MAX_CHARS)
}
