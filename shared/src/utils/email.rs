//! Email helpers for logging

/// Mask an email address for logs, keeping the first character and the domain
///
/// Values without an `@` are masked entirely.
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("  b@c.com "), "b***@c.com");
        assert_eq!(mask_email("@nolocal.com"), "***");
        assert_eq!(mask_email("plain"), "***");
    }

    #[test]
    fn test_mask_email_multibyte_local_part() {
        assert_eq!(mask_email("한글@example.kr"), "한***@example.kr");
    }
}
