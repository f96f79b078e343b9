//! Unit tests for signup form validation

use crate::domain::entities::SignupForm;
use crate::errors::ValidationError;

fn valid_form() -> SignupForm {
    SignupForm::new("n", "e@e.com", "p1", "p1")
}

#[test]
fn test_valid_form_passes() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn test_each_blank_field_is_reported() {
    let cases = [
        ("nickname", SignupForm { nickname: " ".into(), ..valid_form() }),
        ("email", SignupForm { email: "".into(), ..valid_form() }),
        ("password", SignupForm { password: "\t".into(), confirm_password: "\t".into(), ..valid_form() }),
        ("confirmPassword", SignupForm { confirm_password: "  ".into(), ..valid_form() }),
    ];

    for (field, form) in cases {
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField { field: field.to_string() }),
            "expected {} to be reported",
            field
        );
    }
}

#[test]
fn test_first_blank_field_wins() {
    let form = SignupForm::new("", "", "", "");
    assert_eq!(
        form.validate(),
        Err(ValidationError::MissingField { field: "nickname".to_string() })
    );
}

#[test]
fn test_password_mismatch() {
    let form = SignupForm::new("n", "e@e.com", "p1", "p2");
    assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn test_password_comparison_is_exact() {
    let form = SignupForm::new("n", "e@e.com", "p1", "p1 ");
    assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn test_blank_field_reported_before_mismatch() {
    let form = SignupForm::new("", "e@e.com", "p1", "p2");
    assert!(matches!(form.validate(), Err(ValidationError::MissingField { .. })));
}

#[test]
fn test_deserializes_camel_case() {
    let form: SignupForm = serde_json::from_value(serde_json::json!({
        "nickname": "n",
        "email": "e@e.com",
        "password": "p",
        "confirmPassword": "p"
    }))
    .unwrap();
    assert_eq!(form.confirm_password, "p");
}
