//! Client lookup and quick-add rules.
//!
//! Blank strings and a zero telegram id are treated as "not supplied", so
//! `?phone=` and `?tg_id=0` behave the same as omitting the parameter.

use crate::error::CoreError;

/// A single client lookup key, tried in the order returned by [`search_keys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientLookup<'a> {
    Email(&'a str),
    Phone(&'a str),
    TelegramId(i64),
}

/// Collapse a blank string to `None`.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Collapse a zero telegram id to `None`.
pub fn non_zero(tg_id: Option<i64>) -> Option<i64> {
    tg_id.filter(|id| *id != 0)
}

/// Quick-add needs at least a phone number or a telegram id.
pub fn validate_quick_add(phone: Option<&str>, tg_id: Option<i64>) -> Result<(), CoreError> {
    if non_blank(phone).is_none() && non_zero(tg_id).is_none() {
        return Err(CoreError::Validation(
            "phone_number or tg_id is required".to_string(),
        ));
    }
    Ok(())
}

/// Keys for the email-or-phone search, email first. The first key that
/// matches a client wins.
pub fn search_keys<'a>(
    email: Option<&'a str>,
    phone: Option<&'a str>,
) -> Result<Vec<ClientLookup<'a>>, CoreError> {
    let keys: Vec<ClientLookup<'a>> = non_blank(email)
        .map(ClientLookup::Email)
        .into_iter()
        .chain(non_blank(phone).map(ClientLookup::Phone))
        .collect();

    if keys.is_empty() {
        return Err(CoreError::Validation(
            "email or phone is required".to_string(),
        ));
    }
    Ok(keys)
}

/// Key for the existence check. A phone number takes precedence over a
/// telegram id when both are given.
pub fn existence_key(
    phone: Option<&str>,
    tg_id: Option<i64>,
) -> Result<ClientLookup<'_>, CoreError> {
    if let Some(phone) = non_blank(phone) {
        return Ok(ClientLookup::Phone(phone));
    }
    if let Some(tg_id) = non_zero(tg_id) {
        return Ok(ClientLookup::TelegramId(tg_id));
    }
    Err(CoreError::Validation(
        "phone_number or tg_id is required".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn quick_add_needs_phone_or_telegram() {
        assert_matches!(validate_quick_add(None, None), Err(CoreError::Validation(_)));
        assert!(validate_quick_add(Some("  "), Some(0)).is_err());
        assert!(validate_quick_add(Some("+100"), None).is_ok());
        assert!(validate_quick_add(None, Some(42)).is_ok());
    }

    #[test]
    fn search_tries_email_before_phone() {
        let keys = search_keys(Some("a@b.c"), Some("+100")).unwrap();
        assert_eq!(
            keys,
            vec![ClientLookup::Email("a@b.c"), ClientLookup::Phone("+100")]
        );
    }

    #[test]
    fn search_without_keys_is_rejected() {
        assert!(search_keys(None, Some("")).is_err());
    }

    #[test]
    fn existence_prefers_phone() {
        assert_eq!(
            existence_key(Some("+100"), Some(7)).unwrap(),
            ClientLookup::Phone("+100")
        );
        assert_eq!(
            existence_key(None, Some(7)).unwrap(),
            ClientLookup::TelegramId(7)
        );
        assert!(existence_key(Some(""), Some(0)).is_err());
    }
}
