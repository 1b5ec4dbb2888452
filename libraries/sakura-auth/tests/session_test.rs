//! Session persistence tests against an on-disk store

use proptest::prelude::*;
use sakura_auth::{
    AuthController, AuthError, FileStore, KeyValueStore, MemoryStore, ProfileUpdate, SignUpForm,
    CURRENT_USER_KEY, USERS_KEY,
};
use tempfile::TempDir;

fn form(email: &str, password: &str) -> SignUpForm {
    SignUpForm {
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        display_name: "Mika".to_string(),
    }
}

#[test]
fn session_survives_restart() {
    let dir = TempDir::new().unwrap();

    let user = {
        let mut auth = AuthController::load(FileStore::open(dir.path()).unwrap()).unwrap();
        auth.sign_up(form("mika@example.com", "sakura")).unwrap()
    };

    let auth = AuthController::load(FileStore::open(dir.path()).unwrap()).unwrap();
    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user(), Some(&user));
}

#[test]
fn logout_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut auth = AuthController::load(FileStore::open(dir.path()).unwrap()).unwrap();
        auth.sign_up(form("mika@example.com", "sakura")).unwrap();
        auth.logout().unwrap();
    }

    let mut auth = AuthController::load(FileStore::open(dir.path()).unwrap()).unwrap();
    assert!(!auth.is_authenticated());
    assert!(!dir.path().join(format!("{CURRENT_USER_KEY}.json")).exists());

    auth.login("mika@example.com", "sakura").unwrap();
}

#[test]
fn corrupt_file_is_removed_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(format!("{CURRENT_USER_KEY}.json"));
    std::fs::write(&path, r#"{"id": 5}"#).unwrap();

    let auth = AuthController::load(FileStore::open(dir.path()).unwrap()).unwrap();
    assert!(auth.current_user().is_none());
    assert!(!path.exists());
}

#[test]
fn reads_records_written_by_earlier_versions() {
    let mut store = MemoryStore::new();
    let hash = sakura_auth::hash_password("secret");
    let table = format!(
        r#"[{{"id":"user_1718000000000_k3j9x0a2b","email":"old@example.com","displayName":"Old","passwordHash":"{hash}","createdAt":"2024-06-10T06:13:20.000Z","avatarUrl":"https://example.com/a.png"}}]"#
    );
    store.set(USERS_KEY, &table).unwrap();

    let mut auth = AuthController::load(store).unwrap();
    let user = auth.login("old@example.com", "secret").unwrap();
    assert_eq!(user.id.as_str(), "user_1718000000000_k3j9x0a2b");
    assert_eq!(user.avatar_url.as_deref(), Some("https://example.com/a.png"));

    let updated = auth
        .update_profile(ProfileUpdate {
            avatar_url: Some("https://example.com/b.png".to_string()),
            ..ProfileUpdate::default()
        })
        .unwrap();
    assert_eq!(updated.display_name, "Old");

    let table = auth.store().get(USERS_KEY).unwrap().unwrap();
    assert!(table.contains("https://example.com/b.png"));
    assert!(table.contains(&hash));
}

proptest! {
    /// Property: passwords under 6 characters are always rejected
    #[test]
    fn short_passwords_rejected(password in "[a-zA-Z0-9]{0,5}") {
        let mut auth = AuthController::load(MemoryStore::new()).unwrap();
        let result = auth.sign_up(form("p@example.com", &password));
        prop_assert!(matches!(result, Err(AuthError::PasswordTooShort)));
        prop_assert!(!auth.is_authenticated());
    }

    /// Property: any other password fails login
    #[test]
    fn wrong_password_never_logs_in(wrong in "[a-z]{6,12}") {
        prop_assume!(wrong != "sakura");
        let mut auth = AuthController::load(MemoryStore::new()).unwrap();
        auth.sign_up(form("p@example.com", "sakura")).unwrap();
        auth.logout().unwrap();

        prop_assert!(matches!(
            auth.login("p@example.com", &wrong),
            Err(AuthError::InvalidCredentials)
        ));
        prop_assert!(!auth.is_authenticated());
    }
}
