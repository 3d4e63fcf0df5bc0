//! Form validation.
//!
//! Pure, stateless checks over raw form input, run before anything is
//! submitted to the backend. Primitives return `Err(message)` with the
//! message shown inline next to the field; composites collect the first
//! error per field. Nothing here performs I/O or panics.

use std::collections::BTreeMap;

use robotech_core::Email;

/// Result of validating a whole form: field name to first error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    errors: BTreeMap<String, String>,
}

impl FormValidation {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for a field, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All field errors.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Record the outcome of a field check; keeps the first error only.
    fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.errors.entry(field.to_owned()).or_insert(message);
        }
    }
}

// =============================================================================
// Primitives
// =============================================================================

/// Validate an email address.
///
/// # Errors
///
/// Returns the inline message for an empty or malformed address.
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    Email::parse(value.trim())
        .map(|_| ())
        .map_err(|_| "Invalid email format".to_string())
}

/// Validate a password: at least 8 characters with upper, lower, and digit.
///
/// # Errors
///
/// Returns the inline message describing the first unmet requirement.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Password is required".to_string());
    }
    if value.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    let has_lower = value.chars().any(char::is_lowercase);
    let has_upper = value.chars().any(char::is_uppercase);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err("Password must contain uppercase, lowercase, and number".to_string());
    }
    Ok(())
}

/// Validate that a field is non-blank.
///
/// # Errors
///
/// Returns `"{field} is required"`.
pub fn validate_required(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

/// Validate a phone number: digits, spaces, and `-+()` only.
///
/// # Errors
///
/// Returns the inline message for an empty or malformed number.
pub fn validate_phone(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Phone number is required".to_string());
    }
    let valid = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    if valid {
        Ok(())
    } else {
        Err("Invalid phone number format".to_string())
    }
}

/// Validate an http(s) URL.
///
/// # Errors
///
/// Returns the inline message for an empty or malformed URL.
pub fn validate_url(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("URL is required".to_string());
    }
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err("Invalid URL format".to_string()),
    }
}

/// Validate a minimum length; blank input is reported as missing.
///
/// # Errors
///
/// Returns `"{field} is required"` or `"{field} must be at least {min}
/// characters"`.
pub fn validate_min_length(value: &str, min: usize, field: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} is required"));
    }
    if value.chars().count() < min {
        return Err(format!("{field} must be at least {min} characters"));
    }
    Ok(())
}

/// Validate a maximum length; blank input passes.
///
/// # Errors
///
/// Returns `"{field} must be at most {max} characters"`.
pub fn validate_max_length(value: &str, max: usize, field: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}

/// Validate that the input parses as a number within `min..=max`.
///
/// # Errors
///
/// Returns `"{field} must be a number"` or `"{field} must be between
/// {min} and {max}"`.
pub fn validate_range(value: &str, min: f64, max: f64, field: &str) -> Result<(), String> {
    let Ok(number) = value.trim().parse::<f64>() else {
        return Err(format!("{field} must be a number"));
    };
    if number < min || number > max {
        return Err(format!("{field} must be between {min} and {max}"));
    }
    Ok(())
}

// =============================================================================
// Composite forms
// =============================================================================

/// Raw product form input, as typed (admin console).
#[derive(Debug, Clone, Default)]
pub struct ProductFormInput {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub stock: String,
}

/// Validate the product form.
#[must_use]
pub fn validate_product_form(input: &ProductFormInput) -> FormValidation {
    let mut validation = FormValidation::default();

    validation.check("name", validate_required(&input.name, "Product name"));
    validation.check("category", validate_required(&input.category, "Category"));

    let price_ok = input
        .price
        .trim()
        .parse::<f64>()
        .is_ok_and(|price| price > 0.0);
    if !price_ok {
        validation.check("price", Err("Valid price is required".to_string()));
    }

    validation.check(
        "description",
        validate_min_length(&input.description, 10, "Description"),
    );

    let stock_ok = input.stock.trim().parse::<i64>().is_ok_and(|stock| stock >= 0);
    if !stock_ok {
        validation.check("stock", Err("Valid stock quantity is required".to_string()));
    }

    validation
}

/// Raw contact form input, as typed.
#[derive(Debug, Clone, Default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Validate the contact form.
#[must_use]
pub fn validate_contact_form(input: &ContactFormInput) -> FormValidation {
    let mut validation = FormValidation::default();

    validation.check("name", validate_required(&input.name, "Name"));
    validation.check("email", validate_email(&input.email));
    validation.check("subject", validate_required(&input.subject, "Subject"));
    validation.check("message", validate_min_length(&input.message, 10, "Message"));

    validation
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert_eq!(validate_email("").unwrap_err(), "Email is required");
        assert_eq!(validate_email("   ").unwrap_err(), "Email is required");
        assert_eq!(validate_email("nope").unwrap_err(), "Invalid email format");
        assert_eq!(
            validate_email("user@nodot").unwrap_err(),
            "Invalid email format"
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abcdef12").is_ok());
        assert_eq!(validate_password("").unwrap_err(), "Password is required");
        assert_eq!(
            validate_password("Ab1").unwrap_err(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            validate_password("alllowercase1").unwrap_err(),
            "Password must contain uppercase, lowercase, and number"
        );
        assert_eq!(
            validate_password("NODIGITSHERE").unwrap_err(),
            "Password must contain uppercase, lowercase, and number"
        );
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("x", "Name").is_ok());
        assert_eq!(validate_required("", "Name").unwrap_err(), "Name is required");
        assert_eq!(
            validate_required("  ", "Subject").unwrap_err(),
            "Subject is required"
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1 (234) 567-890").is_ok());
        assert_eq!(
            validate_phone("call me").unwrap_err(),
            "Invalid phone number format"
        );
        assert_eq!(validate_phone("").unwrap_err(), "Phone number is required");
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://robotech.com").is_ok());
        assert!(validate_url("http://localhost:5000").is_ok());
        assert_eq!(validate_url("ftp://x").unwrap_err(), "Invalid URL format");
        assert_eq!(validate_url("https://").unwrap_err(), "Invalid URL format");
        assert_eq!(validate_url("").unwrap_err(), "URL is required");
    }

    #[test]
    fn test_validate_lengths() {
        assert!(validate_min_length("0123456789", 10, "Description").is_ok());
        assert_eq!(
            validate_min_length("short", 10, "Description").unwrap_err(),
            "Description must be at least 10 characters"
        );
        assert_eq!(
            validate_min_length("", 10, "Description").unwrap_err(),
            "Description is required"
        );

        assert!(validate_max_length("", 5, "Note").is_ok());
        assert_eq!(
            validate_max_length("toolong", 5, "Note").unwrap_err(),
            "Note must be at most 5 characters"
        );
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("3", 1.0, 5.0, "Rating").is_ok());
        assert_eq!(
            validate_range("abc", 1.0, 5.0, "Rating").unwrap_err(),
            "Rating must be a number"
        );
        assert_eq!(
            validate_range("9", 1.0, 5.0, "Rating").unwrap_err(),
            "Rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_product_form_valid() {
        let input = ProductFormInput {
            name: "RoboClean Pro X1".to_string(),
            category: "Robot Cleaners".to_string(),
            price: "599.99".to_string(),
            description: "Advanced AI navigation with strong suction".to_string(),
            stock: "25".to_string(),
        };

        let validation = validate_product_form(&input);
        assert!(validation.is_valid());
        assert!(validation.errors().is_empty());
    }

    #[test]
    fn test_product_form_collects_field_errors() {
        let input = ProductFormInput {
            name: String::new(),
            category: "Robot Cleaners".to_string(),
            price: "-5".to_string(),
            description: "short".to_string(),
            stock: "many".to_string(),
        };

        let validation = validate_product_form(&input);
        assert!(!validation.is_valid());
        assert_eq!(validation.error("name"), Some("Product name is required"));
        assert_eq!(validation.error("price"), Some("Valid price is required"));
        assert_eq!(
            validation.error("description"),
            Some("Description must be at least 10 characters")
        );
        assert_eq!(
            validation.error("stock"),
            Some("Valid stock quantity is required")
        );
        assert_eq!(validation.error("category"), None);
    }

    #[test]
    fn test_product_form_zero_price_rejected() {
        let input = ProductFormInput {
            name: "X".to_string(),
            category: "C".to_string(),
            price: "0".to_string(),
            description: "long enough description".to_string(),
            stock: "0".to_string(),
        };

        let validation = validate_product_form(&input);
        assert_eq!(validation.error("price"), Some("Valid price is required"));
        // Zero stock is valid (sold out, not invalid).
        assert_eq!(validation.error("stock"), None);
    }

    #[test]
    fn test_contact_form() {
        let valid = ContactFormInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Support".to_string(),
            message: "My robot stopped vacuuming.".to_string(),
        };
        assert!(validate_contact_form(&valid).is_valid());

        let invalid = ContactFormInput {
            name: String::new(),
            email: "nope".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        };
        let validation = validate_contact_form(&invalid);
        assert_eq!(validation.error("name"), Some("Name is required"));
        assert_eq!(validation.error("email"), Some("Invalid email format"));
        assert_eq!(validation.error("subject"), Some("Subject is required"));
        assert_eq!(
            validation.error("message"),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_validators_do_not_mutate_input() {
        let input = ContactFormInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "S".to_string(),
            message: "A long enough message".to_string(),
        };
        let before = format!("{input:?}");
        let _ = validate_contact_form(&input);
        assert_eq!(before, format!("{input:?}"));
    }
}
