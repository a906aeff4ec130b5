//! Recipe field validation.
//!
//! The JSON schema check (field presence, types) happens at the request
//! layer's extractor; these functions enforce the domain rules on top of
//! it: `title`, `description`, and `instructions` must be non-empty.
//! `image` and `source_url` may be empty, and ingredient entries carry
//! no constraints beyond being strings.

/// Validate a recipe title: must contain non-whitespace content.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Recipe title cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a recipe description: must contain non-whitespace content.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Recipe description cannot be empty".to_string());
    }
    Ok(())
}

/// Validate recipe instructions: must contain non-whitespace content.
pub fn validate_instructions(instructions: &str) -> Result<(), String> {
    if instructions.trim().is_empty() {
        return Err("Recipe instructions cannot be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_accepts_non_empty() {
        assert!(validate_title("Soup").is_ok());
    }

    #[test]
    fn title_rejects_empty_and_whitespace() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn description_rejects_empty() {
        assert!(validate_description("").is_err());
        assert!(validate_description("Warm").is_ok());
    }

    #[test]
    fn instructions_reject_empty() {
        assert!(validate_instructions("").is_err());
        assert!(validate_instructions("Boil").is_ok());
    }
}
