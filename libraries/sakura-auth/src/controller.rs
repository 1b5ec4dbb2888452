//! Authentication controller
//!
//! Two records live in the store:
//! - `spotify_user`: the signed-in [`User`]
//! - `spotify_users`: every registered [`StoredUser`]

use chrono::{SecondsFormat, Utc};
use sakura_core::User;
use tracing::{info, warn};

use crate::{
    account::{ProfileUpdate, SignUpForm, StoredUser, DEFAULT_AVATAR_URL},
    error::{AuthError, Result},
    password::{generate_user_id, hash_password},
    store::KeyValueStore,
};

/// Store key of the signed-in user
pub const CURRENT_USER_KEY: &str = "spotify_user";

/// Store key of the registered users table
pub const USERS_KEY: &str = "spotify_users";

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 6;

/// Mock account manager over a key-value store
pub struct AuthController<S: KeyValueStore> {
    store: S,
    user: Option<User>,
}

impl<S: KeyValueStore> AuthController<S> {
    /// Restore the session saved in `store`
    ///
    /// A saved user that does not parse is deleted and the controller
    /// starts signed out.
    pub fn load(mut store: S) -> Result<Self> {
        let user = match store.get(CURRENT_USER_KEY)? {
            Some(blob) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable saved user");
                    store.remove(CURRENT_USER_KEY)?;
                    None
                }
            },
            None => None,
        };

        Ok(Self { store, user })
    }

    /// Register a new account and sign in as it
    pub fn sign_up(&mut self, form: SignUpForm) -> Result<User> {
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let mut users = self.stored_users()?;
        if users.iter().any(|u| u.email == form.email) {
            return Err(AuthError::EmailTaken);
        }

        let record = StoredUser {
            id: generate_user_id(&mut rand::thread_rng()).into(),
            email: form.email,
            display_name: form.display_name,
            password_hash: hash_password(&form.password),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            avatar_url: Some(DEFAULT_AVATAR_URL.to_string()),
        };
        let user = record.to_user();

        users.push(record);
        self.save_users(&users)?;
        self.set_current(Some(user.clone()))?;

        info!(user_id = %user.id, "Signed up");
        Ok(user)
    }

    /// Sign in with email and password
    ///
    /// On failure the current user is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let hash = hash_password(password);
        let user = self
            .stored_users()?
            .iter()
            .find(|u| u.email == email && u.password_hash == hash)
            .map(StoredUser::to_user)
            .ok_or(AuthError::InvalidCredentials)?;

        self.set_current(Some(user.clone()))?;

        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    /// Sign out
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = &self.user {
            info!(user_id = %user.id, "Logged out");
        }
        self.set_current(None)
    }

    /// Merge changes into the signed-in user and its stored record
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<User> {
        let mut user = self.user.clone().ok_or(AuthError::NotLoggedIn)?;

        let mut users = self.stored_users()?;
        if let Some(record) = users.iter_mut().find(|u| u.id == user.id) {
            record.apply(&update);
            self.save_users(&users)?;
        }

        update.apply_to(&mut user);
        self.set_current(Some(user.clone()))?;
        Ok(user)
    }

    /// Signed-in user
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether someone is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registered users table; an unreadable table reads as empty
    fn stored_users(&self) -> Result<Vec<StoredUser>> {
        let Some(blob) = self.store.get(USERS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable users table");
                Ok(Vec::new())
            }
        }
    }

    fn save_users(&mut self, users: &[StoredUser]) -> Result<()> {
        let blob = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, &blob)
    }

    /// Replace the signed-in user, mirroring it to the store
    fn set_current(&mut self, user: Option<User>) -> Result<()> {
        match &user {
            Some(user) => {
                let blob = serde_json::to_string(user)?;
                self.store.set(CURRENT_USER_KEY, &blob)?;
            }
            None => self.store.remove(CURRENT_USER_KEY)?,
        }
        self.user = user;
        Ok(())
    }
}
