//! Admin session service. The whole "session" is one persisted boolean flag —
//! it gates client-side rendering only and is not a security boundary; the
//! backend enforces nothing per request (see DESIGN.md).

use gloo::storage::{LocalStorage, SessionStorage, Storage};
use thiserror::Error;

use crate::api::client;
use crate::api::models::AdminAccount;

const SESSION_KEY: &str = "admin_session";
const TARGET_KEY: &str = "login_target";

pub fn is_authenticated() -> bool {
    LocalStorage::get::<bool>(SESSION_KEY).unwrap_or(false)
}

pub fn logout() {
    LocalStorage::delete(SESSION_KEY);
}

/// Records the path an unauthenticated visitor asked for, so login can send
/// them back there afterwards.
pub fn remember_target(path: &str) {
    SessionStorage::set(TARGET_KEY, path.to_owned())
        .expect("failed to record login target in sessionStorage");
}

pub fn take_target() -> Option<String> {
    let target = SessionStorage::get::<String>(TARGET_KEY).ok();
    SessionStorage::delete(TARGET_KEY);
    target
}

/// Where to go after a successful login: the recorded admin path, or the
/// admin root. Paths outside the admin tree are ignored so a stale entry
/// cannot bounce the user somewhere odd.
pub fn post_login_target(recorded: Option<String>) -> String {
    recorded
        .filter(|path| path.starts_with("/admin"))
        .unwrap_or_else(|| "/admin".to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("No admin found with this email address.")]
    UnknownEmail,
    #[error("Incorrect password. Please try again.")]
    WrongPassword,
    #[error("No response from server. Check your internet or backend.")]
    NoServerResponse,
    #[error("Unexpected error occurred during login: {0}")]
    Unexpected(String),
}

/// Authenticates against the admin collection. The backend exposes no login
/// endpoint, so this fetches the full admin list and checks the bcrypt hash
/// client-side — a known weakness of the system, kept deliberately and
/// isolated here (see DESIGN.md).
pub async fn login(email: &str, password: &str) -> Result<(), LoginError> {
    let admins: Vec<AdminAccount> = client::ADMINS.list().await.map_err(|e| {
        if e.is_network() {
            LoginError::NoServerResponse
        } else {
            LoginError::Unexpected(e.message)
        }
    })?;

    verify_credentials(&admins, email, password)?;

    LocalStorage::set(SESSION_KEY, true)
        .expect("failed to write admin session flag to localStorage");
    Ok(())
}

/// Pure login decision: case-insensitive email match, then bcrypt comparison
/// against the stored hash.
fn verify_credentials(
    admins: &[AdminAccount],
    email: &str,
    password: &str,
) -> Result<(), LoginError> {
    let wanted = email.trim().to_lowercase();
    let admin = admins
        .iter()
        .find(|admin| admin.email.trim().to_lowercase() == wanted)
        .ok_or(LoginError::UnknownEmail)?;

    match bcrypt::verify(password, &admin.password) {
        Ok(true) => Ok(()),
        Ok(false) => Err(LoginError::WrongPassword),
        Err(e) => Err(LoginError::Unexpected(format!(
            "stored password hash is unreadable: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(email: &str, password: &str) -> AdminAccount {
        AdminAccount {
            id: 1,
            email: email.to_owned(),
            // low cost keeps the test fast; verify() does not care
            password: bcrypt::hash(password, 4).unwrap(),
        }
    }

    #[test]
    fn matching_credentials_pass() {
        let admins = vec![admin("a@x.com", "secret123")];
        assert_eq!(verify_credentials(&admins, "a@x.com", "secret123"), Ok(()));
    }

    #[test]
    fn email_match_ignores_case_and_whitespace() {
        let admins = vec![admin("Admin@Example.com", "secret123")];
        assert_eq!(
            verify_credentials(&admins, "  admin@example.COM ", "secret123"),
            Ok(())
        );
    }

    #[test]
    fn unknown_email_is_reported_as_not_found() {
        let admins = vec![admin("a@x.com", "secret123")];
        assert_eq!(
            verify_credentials(&admins, "b@x.com", "secret123"),
            Err(LoginError::UnknownEmail)
        );
    }

    #[test]
    fn wrong_password_is_distinguished_from_not_found() {
        let admins = vec![admin("a@x.com", "secret123")];
        assert_eq!(
            verify_credentials(&admins, "a@x.com", "wrongpass"),
            Err(LoginError::WrongPassword)
        );
    }

    #[test]
    fn garbage_hash_maps_to_unexpected() {
        let admins = vec![AdminAccount {
            id: 1,
            email: "a@x.com".into(),
            password: "not-a-bcrypt-hash".into(),
        }];
        assert!(matches!(
            verify_credentials(&admins, "a@x.com", "secret123"),
            Err(LoginError::Unexpected(_))
        ));
    }

    #[test]
    fn post_login_target_defaults_to_admin_root() {
        assert_eq!(post_login_target(None), "/admin");
        assert_eq!(
            post_login_target(Some("/admin/blogs".into())),
            "/admin/blogs"
        );
        assert_eq!(post_login_target(Some("/elsewhere".into())), "/admin");
    }
}
