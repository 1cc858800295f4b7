//! Request payload validation.

use serde_json::Value;

/// Minimum display-name length accepted on create/update.
pub const MIN_NAME_CHARS: usize = 2;

/// Returns true iff the candidate value is a JSON string of at least
/// [`MIN_NAME_CHARS`] characters. Any other type (number, null, bool,
/// array, object) or an absent field is rejected.
pub fn validate_user_name(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(name)) => name.chars().count() >= MIN_NAME_CHARS,
        _ => false,
    }
}
