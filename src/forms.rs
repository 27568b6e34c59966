//! Controlled-form plumbing: reading values out of DOM events and the
//! client-side checks that run before any request is sent.

use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Url};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// First file chosen in a file input, if any.
pub fn selected_file(e: &Event) -> Option<File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|list| list.get(0))
}

/// Object URL for previewing a freshly chosen file before upload.
pub fn preview_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

/// Returns a message naming the first empty required field, or `None` when
/// the form may be submitted.
pub fn missing_required(fields: &[(&str, &str)]) -> Option<String> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| format!("{name} is required"))
}

/// Same loose shape the original form enforced: something@something.tld.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

pub const MIN_PASSWORD_LEN: usize = 8;

/// Checks run before creating an admin account.
pub fn validate_new_admin(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Both email and password are required".to_owned());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address".to_owned());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_first_empty_field() {
        let fields = [("Title", "set"), ("Summary", "  "), ("Content", "")];
        assert_eq!(
            missing_required(&fields),
            Some("Summary is required".to_owned())
        );
        assert_eq!(missing_required(&[("Title", "ok")]), None);
    }

    #[test]
    fn email_validation_matches_form_rules() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("  padded@example.org "));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn new_admin_rules_reject_short_passwords() {
        assert!(validate_new_admin("a@x.com", "secret123").is_ok());
        assert_eq!(
            validate_new_admin("a@x.com", "short"),
            Err("Password must be at least 8 characters".to_owned())
        );
        assert!(validate_new_admin("", "secret123").is_err());
        assert!(validate_new_admin("nonsense", "secret123").is_err());
    }
}
