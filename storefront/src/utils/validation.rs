use shared::SignupRequest;

use crate::app::state::SellForm;

/// Minimum title length for a listing.
pub const MIN_TITLE_LEN: usize = 5;
/// Minimum description length for a listing.
pub const MIN_DESCRIPTION_LEN: usize = 20;
/// Ceiling on the starting price.
pub const MAX_STARTING_PRICE: f64 = 1_000_000.0;

/// Outcome of a rule evaluation: valid, or the first violated rule's
/// message. Never more than one error at a time.
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Please enter a valid email address");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Please enter a valid email address");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Please enter a valid email address");
    }

    ValidationResult::ok()
}

/// Validate username
pub fn validate_username(username: &str) -> ValidationResult {
    if username.len() < 3 {
        return ValidationResult::err("Username must be at least 3 characters long");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.len() < 6 {
        return ValidationResult::err("Password must be at least 6 characters long");
    }

    ValidationResult::ok()
}

/// Validate the login form: both fields are required.
pub fn validate_login(username: &str, password: &str) -> ValidationResult {
    if username.trim().is_empty() || password.is_empty() {
        return ValidationResult::err("Please fill in all fields");
    }

    ValidationResult::ok()
}

/// Validate a signup form, returning the first violated rule.
///
/// `confirm_password` is only checked when the form carries a confirmation
/// field at all.
pub fn validate_signup(
    request: &SignupRequest,
    confirm_password: Option<&str>,
) -> ValidationResult {
    let username = validate_username(&request.username);
    if !username.is_valid {
        return username;
    }

    let email = validate_email(&request.email);
    if !email.is_valid {
        return email;
    }

    let password = validate_password(&request.password);
    if !password.is_valid {
        return password;
    }

    if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
        return ValidationResult::err("First name and last name are required");
    }

    if let Some(confirm) = confirm_password {
        if confirm != request.password {
            return ValidationResult::err("Passwords do not match");
        }
    }

    ValidationResult::ok()
}

/// Field-level rules for the sell form, returning the first violated rule.
///
/// Submission-time rules (image set, payment methods, per-type price
/// relations) live with the sell handlers; this covers what can be checked
/// while the form is still being edited.
pub fn validate_listing_form(form: &SellForm) -> ValidationResult {
    if form.title.trim().len() < MIN_TITLE_LEN {
        return ValidationResult::err(format!(
            "Title must be at least {} characters long",
            MIN_TITLE_LEN
        ));
    }

    if form.description.trim().len() < MIN_DESCRIPTION_LEN {
        return ValidationResult::err(format!(
            "Description must be at least {} characters long",
            MIN_DESCRIPTION_LEN
        ));
    }

    let starting = match form.starting_bid {
        Some(price) if price > 0.0 => price,
        _ => return ValidationResult::err("Starting price must be greater than 0"),
    };

    if starting > MAX_STARTING_PRICE {
        return ValidationResult::err("Starting price must be less than $1,000,000");
    }

    if let Some(reserve) = form.reserve_price {
        if reserve < starting {
            return ValidationResult::err(
                "Reserve price must be greater than or equal to starting price",
            );
        }
    }

    if form.category_id.is_none() {
        return ValidationResult::err("Please select a category");
    }

    if form.condition.trim().is_empty() {
        return ValidationResult::err("Please select item condition");
    }

    if form.duration_hours.is_none() {
        return ValidationResult::err("Please select auction duration");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            phone: String::new(),
            address: String::new(),
        }
    }

    fn sell_form() -> SellForm {
        SellForm {
            title: "Vintage Rolex Submariner".to_string(),
            description: "Authentic vintage Rolex Submariner in excellent condition".to_string(),
            category_id: Some(2),
            condition: "used".to_string(),
            starting_bid: Some(100.0),
            duration_hours: Some(168),
            ..SellForm::default()
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("test@nodot").is_valid);
    }

    #[test]
    fn test_signup_first_violation_wins() {
        let mut request = signup_request();
        request.username = "ab".to_string();
        request.email = "broken".to_string();
        let result = validate_signup(&request, None);
        assert_eq!(
            result.error.as_deref(),
            Some("Username must be at least 3 characters long")
        );
    }

    #[test]
    fn test_signup_rules() {
        assert!(validate_signup(&signup_request(), None).is_valid);

        let mut request = signup_request();
        request.password = "short".to_string();
        assert!(!validate_signup(&request, None).is_valid);

        let mut request = signup_request();
        request.first_name = "  ".to_string();
        assert!(!validate_signup(&request, None).is_valid);
    }

    #[test]
    fn test_signup_confirmation_only_checked_when_present() {
        let request = signup_request();
        assert!(validate_signup(&request, None).is_valid);
        assert!(validate_signup(&request, Some("secret1")).is_valid);

        let result = validate_signup(&request, Some("different"));
        assert_eq!(result.error.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_listing_form_rules() {
        assert!(validate_listing_form(&sell_form()).is_valid);

        let mut form = sell_form();
        form.title = "Ring".to_string();
        assert!(!validate_listing_form(&form).is_valid);

        let mut form = sell_form();
        form.starting_bid = Some(0.0);
        assert!(!validate_listing_form(&form).is_valid);

        let mut form = sell_form();
        form.starting_bid = Some(2_000_000.0);
        assert!(!validate_listing_form(&form).is_valid);

        let mut form = sell_form();
        form.reserve_price = Some(50.0);
        assert_eq!(
            validate_listing_form(&form).error.as_deref(),
            Some("Reserve price must be greater than or equal to starting price")
        );

        let mut form = sell_form();
        form.duration_hours = None;
        assert_eq!(
            validate_listing_form(&form).error.as_deref(),
            Some("Please select auction duration")
        );
    }
}
