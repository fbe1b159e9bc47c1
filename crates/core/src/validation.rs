//! Presence checks for create requests.
//!
//! Only required-field presence and the non-empty farmer name are enforced.
//! Names are otherwise stored as given, whitespace and length included.
//! Numeric fields are not range-checked; degenerate dimensions flow through
//! the estimator unchanged.

use crate::error::CoreError;

/// Build a validation error naming every field reported as missing.
///
/// `fields` pairs each field name with whether it is absent. Intended for
/// the fallback arm of a match over a request's optional fields, so at least
/// one field is expected to be absent.
pub fn missing_fields(fields: &[(&str, bool)]) -> CoreError {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

    CoreError::Validation(format!(
        "Missing required field{}: {}",
        if missing.len() == 1 { "" } else { "s" },
        missing.join(", ")
    ))
}

/// Validate a farmer display name: present and non-empty.
pub fn validate_farmer_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Farmer name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn single_missing_field() {
        let err = missing_fields(&[("name", true)]);
        assert_matches!(err, CoreError::Validation(msg) if msg == "Missing required field: name");
    }

    #[test]
    fn lists_all_missing_fields_in_order() {
        let err = missing_fields(&[
            ("plot_id", false),
            ("species", true),
            ("dbh_cm", true),
            ("height_m", false),
        ]);
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg == "Missing required fields: species, dbh_cm"
        );
    }

    #[test]
    fn empty_name_rejected() {
        assert_matches!(validate_farmer_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_and_long_names_accepted() {
        assert!(validate_farmer_name("Asha Devi").is_ok());
        assert!(validate_farmer_name(" ").is_ok());
        assert!(validate_farmer_name(&"b".repeat(101)).is_ok());
    }
}
