//! Sakura Player - Mock Authentication
//!
//! Local-only accounts for the player: sign up, log in, log out and profile
//! edits, persisted to a [`KeyValueStore`].
//!
//! Passwords are hashed with a single static salt and no key stretching.
//! This is a demo account system, not a credential store.
//!
//! # Example
//!
//! ```rust
//! use sakura_auth::{AuthController, MemoryStore, SignUpForm};
//!
//! let mut auth = AuthController::load(MemoryStore::new()).unwrap();
//!
//! let user = auth
//!     .sign_up(SignUpForm {
//!         email: "mika@example.com".into(),
//!         password: "sakura".into(),
//!         confirm_password: "sakura".into(),
//!         display_name: "Mika".into(),
//!     })
//!     .unwrap();
//!
//! auth.logout().unwrap();
//! assert!(auth.login("mika@example.com", "wrong!").is_err());
//! assert_eq!(auth.login("mika@example.com", "sakura").unwrap(), user);
//! ```

#![forbid(unsafe_code)]

mod account;
mod controller;
pub mod error;
mod password;
pub mod store;

pub use account::{ProfileUpdate, SignUpForm, DEFAULT_AVATAR_URL};
pub use controller::{AuthController, CURRENT_USER_KEY, MIN_PASSWORD_LEN, USERS_KEY};
pub use error::{AuthError, Result};
pub use password::{generate_user_id, hash_password};
pub use store::{FileStore, KeyValueStore, MemoryStore};
