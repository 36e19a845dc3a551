use crate::districts::{is_valid_district, title_case};
use crate::error::ValidationError;

/// Longest raw input accepted, counted before trimming.
pub const MAX_NAME_LEN: usize = 25;

/// Normalize a raw city name and validate it against the allow-list and the
/// names already registered.
///
/// The length check runs on the untrimmed input, so whitespace-only input of
/// at most 25 characters fails with [`ValidationError::EmptyAfterTrim`]
/// while a longer one fails with [`ValidationError::Length`].
pub fn normalize_and_validate<'a, I>(raw: &str, existing: I) -> Result<String, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let len = raw.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(ValidationError::Length);
    }

    let trimmed = raw.trim_matches(|c| c == ' ' || c == '\t');
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAfterTrim);
    }

    let normalized = title_case(trimmed);
    if !is_valid_district(&normalized) {
        return Err(ValidationError::UnknownDistrict);
    }

    if existing.into_iter().any(|name| name == normalized) {
        return Err(ValidationError::DuplicateCity);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_casing_and_trim() {
        assert_eq!(normalize_and_validate("kigali", NONE).unwrap(), "Kigali");
        assert_eq!(normalize_and_validate("KIGALI", NONE).unwrap(), "Kigali");
        assert_eq!(normalize_and_validate(" Kigali ", NONE).unwrap(), "Kigali");
        assert_eq!(normalize_and_validate("\tnyanza\t", NONE).unwrap(), "Nyanza");
    }

    #[test]
    fn test_unknown_district() {
        assert_eq!(
            normalize_and_validate("Kampala", NONE),
            Err(ValidationError::UnknownDistrict)
        );
        // inner whitespace is not collapsed
        assert_eq!(
            normalize_and_validate("Ki gali", NONE),
            Err(ValidationError::UnknownDistrict)
        );
    }

    #[test]
    fn test_length_is_checked_before_trim() {
        assert_eq!(normalize_and_validate("", NONE), Err(ValidationError::Length));
        assert_eq!(
            normalize_and_validate(&" ".repeat(25), NONE),
            Err(ValidationError::EmptyAfterTrim)
        );
        assert_eq!(
            normalize_and_validate(&" ".repeat(26), NONE),
            Err(ValidationError::Length)
        );
        let padded = format!("{:^26}", "Huye");
        assert_eq!(normalize_and_validate(&padded, NONE), Err(ValidationError::Length));
    }

    #[test]
    fn test_duplicate() {
        let existing = ["Kigali", "Huye"];
        assert_eq!(
            normalize_and_validate("huye", existing),
            Err(ValidationError::DuplicateCity)
        );
        assert_eq!(normalize_and_validate("rubavu", existing).unwrap(), "Rubavu");
    }

    #[test]
    fn test_idempotent_on_accepted_names() {
        for raw in ["gasabo", " KAYONZA", "Rutsiro\t", "nYaMaShEkE"] {
            let once = normalize_and_validate(raw, NONE).unwrap();
            let twice = normalize_and_validate(&once, NONE).unwrap();
            assert_eq!(once, twice);
        }
    }
}
