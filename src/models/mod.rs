pub mod invoice;
pub mod invoice_item;
pub mod pagination;
pub mod tax_profile;
pub mod user;

pub use pagination::Paginated;

use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Basic email shape check: exactly one `@`, non-empty local and domain
/// parts, a dot in the domain.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        _ => false,
    }
}

pub(crate) fn is_decimal(value: &str) -> bool {
    BigDecimal::from_str(value).is_ok()
}

pub(crate) fn is_uuid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}

pub(crate) fn is_rfc3339(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("missing-at.com"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("two@@ats.com"));
        assert!(!is_valid_email("no-dot@domain"));
    }

    #[test]
    fn decimal_shapes() {
        assert!(is_decimal("100"));
        assert!(is_decimal("99.50"));
        assert!(is_decimal("-0.22"));
        assert!(!is_decimal("12,50"));
        assert!(!is_decimal("abc"));
    }

    #[test]
    fn rfc3339_shapes() {
        assert!(is_rfc3339("2024-01-15T10:00:00Z"));
        assert!(is_rfc3339("2024-01-15T10:00:00+02:00"));
        assert!(!is_rfc3339("2024-01-15"));
        assert!(!is_rfc3339("15/01/2024"));
    }
}
