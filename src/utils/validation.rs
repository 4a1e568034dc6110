use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::{RRegister, Role};
use email_address::EmailAddress;

const MAX_FIELD_LEN: usize = 255;

/// A registration payload that has passed every field check.
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

fn email_syntax_ok(email: &str) -> bool {
    email.parse::<EmailAddress>().is_ok()
}

fn check_name(name: &Option<String>, errors: &mut Vec<String>) {
    match name {
        Some(name) if name.len() > MAX_FIELD_LEN => {
            errors.push("nameError: Name must not be longer than 255 characters".to_string());
        }
        Some(_) => {}
        None => errors.push("nameError: Name is required to create a user".to_string()),
    }
}

fn check_role(role: &Option<String>, errors: &mut Vec<String>) -> Option<Role> {
    match role {
        Some(role) => match Role::parse(role) {
            Some(role) => Some(role),
            None => {
                errors.push("roleError: Invalid role".to_string());
                None
            }
        },
        None => {
            errors.push("roleError: A role is required".to_string());
            None
        }
    }
}

fn check_password(password: &Option<String>, errors: &mut Vec<String>) {
    match password {
        Some(password) if password.len() > MAX_FIELD_LEN => {
            errors.push("passwordError: Password must not be longer than 255 characters".to_string());
        }
        Some(_) => {}
        None => errors.push("passwordError: Password is required".to_string()),
    }
}

/// Run every field check and collect all failures into one list, in the
/// fixed order email, name, role, password. The uniqueness lookup only
/// runs when the email is syntactically valid; the other fields are
/// still checked either way so the caller sees every problem at once.
/// Field failures come back as `AppError::Validation`; a store failure
/// during the uniqueness lookup propagates as-is.
pub async fn validate_registration(
    body: &RRegister,
    db: &PostgresService,
) -> Result<ValidRegistration, AppError> {
    let mut errors = Vec::new();

    match &body.email {
        Some(email) if email_syntax_ok(email) => {
            if db.user_exists_by_email(email).await? {
                errors.push("emailError: Email already exists in the database".to_string());
            }
        }
        _ => errors.push("emailError: Email not valid".to_string()),
    }

    check_name(&body.name, &mut errors);
    let role = check_role(&body.role, &mut errors);
    check_password(&body.password, &mut errors);

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // all four fields are guaranteed present by the checks above
    Ok(ValidRegistration {
        name: body.name.clone().unwrap_or_default(),
        email: body.email.clone().unwrap_or_default(),
        password: body.password.clone().unwrap_or_default(),
        role: role.unwrap_or(Role::ReadOnly),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(email_syntax_ok("alice@x.com"));
        assert!(email_syntax_ok("a.b+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_syntax_ok("not-an-email"));
        assert!(!email_syntax_ok("@x.com"));
        assert!(!email_syntax_ok("alice@"));
        assert!(!email_syntax_ok(""));
    }

    #[test]
    fn name_over_255_is_an_error() {
        let mut errors = Vec::new();
        check_name(&Some("x".repeat(256)), &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("nameError"));
    }

    #[test]
    fn name_at_255_passes() {
        let mut errors = Vec::new();
        check_name(&Some("x".repeat(255)), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_name_is_an_error() {
        let mut errors = Vec::new();
        check_name(&None, &mut errors);
        assert_eq!(errors, vec!["nameError: Name is required to create a user"]);
    }

    #[test]
    fn only_the_three_fixed_roles_parse() {
        for role in ["admin", "editor", "read-only"] {
            let mut errors = Vec::new();
            assert!(check_role(&Some(role.to_string()), &mut errors).is_some());
            assert!(errors.is_empty());
        }

        let mut errors = Vec::new();
        assert!(check_role(&Some("superuser".to_string()), &mut errors).is_none());
        assert_eq!(errors, vec!["roleError: Invalid role"]);
    }

    #[test]
    fn missing_role_is_an_error() {
        let mut errors = Vec::new();
        assert!(check_role(&None, &mut errors).is_none());
        assert_eq!(errors, vec!["roleError: A role is required"]);
    }

    #[test]
    fn password_over_255_is_an_error() {
        let mut errors = Vec::new();
        check_password(&Some("p".repeat(256)), &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("passwordError"));
    }

    #[test]
    fn missing_password_is_an_error() {
        let mut errors = Vec::new();
        check_password(&None, &mut errors);
        assert_eq!(errors, vec!["passwordError: Password is required"]);
    }
}
