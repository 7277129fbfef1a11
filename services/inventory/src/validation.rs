//! Input validation utilities
//!
//! Field-level syntactic checks applied at the request boundary before any
//! business rule runs. Failures surface as `Invalid` (HTTP 400).

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{CreateItemRequest, LoginRequest, RegisterRequest, UpdateItemRequest};

/// Validate username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("username is required".to_string());
    }

    if username.len() < 3 {
        return Err("username must be at least 3 characters long".to_string());
    }

    if username.len() > 50 {
        return Err("username must be at most 50 characters long".to_string());
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return Err("username can only contain letters, numbers, and underscores".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email is required".to_string());
    }

    if email.len() > 254 {
        return Err("email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("password is required".to_string());
    }

    if password.len() < 6 {
        return Err("password must be at least 6 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate a registration request
pub fn validate_register(req: &RegisterRequest) -> Result<(), String> {
    validate_username(&req.username)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    Ok(())
}

/// Validate a login request (presence only; no format hints for attackers)
pub fn validate_login(req: &LoginRequest) -> Result<(), String> {
    if req.username.is_empty() {
        return Err("username is required".to_string());
    }
    if req.password.is_empty() {
        return Err("password is required".to_string());
    }
    Ok(())
}

fn validate_item_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is required".to_string());
    }
    if name.len() > 200 {
        return Err("name must be at most 200 characters long".to_string());
    }
    Ok(())
}

fn validate_sku(sku: &str) -> Result<(), String> {
    if sku.is_empty() {
        return Err("sku is required".to_string());
    }
    if sku.len() > 100 {
        return Err("sku must be at most 100 characters long".to_string());
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), String> {
    if description.len() > 1000 {
        return Err("description must be at most 1000 characters long".to_string());
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), String> {
    if category.len() > 100 {
        return Err("category must be at most 100 characters long".to_string());
    }
    Ok(())
}

fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity < 0 {
        return Err("quantity cannot be negative".to_string());
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("price cannot be negative".to_string());
    }
    Ok(())
}

/// Validate an item creation request
pub fn validate_new_item(req: &CreateItemRequest) -> Result<(), String> {
    validate_item_name(&req.name)?;
    validate_sku(&req.sku)?;
    validate_description(&req.description)?;
    validate_category(&req.category)?;
    validate_quantity(req.quantity)?;
    validate_price(req.price)?;
    Ok(())
}

/// Validate a partial item update: each supplied field gets the same rules
/// a creation request would apply.
pub fn validate_item_update(req: &UpdateItemRequest) -> Result<(), String> {
    if let Some(name) = &req.name {
        validate_item_name(name)?;
    }
    if let Some(sku) = &req.sku {
        validate_sku(sku)?;
    }
    if let Some(description) = &req.description {
        validate_description(description)?;
    }
    if let Some(category) = &req.category {
        validate_category(category)?;
    }
    if let Some(quantity) = req.quantity {
        validate_quantity(quantity)?;
    }
    if let Some(price) = req.price {
        validate_price(price)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames() {
        assert!(validate_username("johndoe").is_ok());
        assert!(validate_username("john_doe_99").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
        assert!(validate_username("john doe").is_err());
        assert!(validate_username("john@doe").is_err());
    }

    #[test]
    fn emails() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("j.doe+tag@sub.example.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn passwords() {
        assert!(validate_password("securepassword123").is_ok());
        assert!(validate_password("abcdef").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn item_creation_rules() {
        let valid = CreateItemRequest {
            name: "Laptop".to_string(),
            sku: "LAPTOP-001".to_string(),
            description: String::new(),
            quantity: 25,
            price: 1299.99,
            category: String::new(),
        };
        assert!(validate_new_item(&valid).is_ok());

        let mut missing_name = valid.clone();
        missing_name.name = String::new();
        assert!(validate_new_item(&missing_name).is_err());

        let mut negative_quantity = valid.clone();
        negative_quantity.quantity = -1;
        assert!(validate_new_item(&negative_quantity).is_err());

        let mut negative_price = valid.clone();
        negative_price.price = -0.01;
        assert!(validate_new_item(&negative_price).is_err());

        let mut nan_price = valid.clone();
        nan_price.price = f64::NAN;
        assert!(validate_new_item(&nan_price).is_err());
    }

    #[test]
    fn update_checks_only_supplied_fields() {
        assert!(validate_item_update(&UpdateItemRequest::default()).is_ok());

        assert!(
            validate_item_update(&UpdateItemRequest {
                quantity: Some(30),
                ..Default::default()
            })
            .is_ok()
        );

        assert!(
            validate_item_update(&UpdateItemRequest {
                quantity: Some(-5),
                ..Default::default()
            })
            .is_err()
        );

        assert!(
            validate_item_update(&UpdateItemRequest {
                sku: Some(String::new()),
                ..Default::default()
            })
            .is_err()
        );
    }
}
