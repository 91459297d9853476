use std::sync::Arc;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use crate::models::{ProfileUpdate, RegisterRequest, UserProfile, UserRole};
use crate::services::storage::{load_json, load_json_for_update, save_json, KeyValueStore, StorageError, StorageKey};

/// Addresses held by the demo accounts
const RESERVED_EMAILS: [&str; 2] = ["admin@property.com", "owner@property.com"];

const DEFAULT_AVATAR: &str = "/users/default-avatar.svg";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Email is already registered: {0}")]
    EmailTaken(String),
}

/// The signed-in user's profile, stored as a single record
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn get(&self) -> Result<UserProfile, ProfileError> {
        load_json::<Option<UserProfile>>(self.store.as_ref(), StorageKey::USER, None)?
            .ok_or(ProfileError::NotSignedIn)
    }

    /// Register a new account and sign it in, replacing any current user
    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile, ProfileError> {
        if RESERVED_EMAILS.contains(&request.email.as_str()) {
            return Err(ProfileError::EmailTaken(request.email));
        }

        let _guard = self.write_lock.lock().await;
        let now = Utc::now();
        let profile = UserProfile {
            id: now.timestamp_millis(),
            role: UserRole::for_email(&request.email),
            name: request.name,
            email: request.email,
            gender: request.gender,
            avatar: DEFAULT_AVATAR.to_string(),
            telegram_id: request.telegram_id,
            telegram_username: request.telegram_username,
            created_at: Some(now),
        };

        save_json(self.store.as_ref(), StorageKey::USER, &profile)?;

        tracing::info!("Registered user {} as {:?}", profile.id, profile.role);
        Ok(profile)
    }

    /// Edit name, email and gender. Everything else on the record is kept.
    pub async fn update(&self, update: ProfileUpdate) -> Result<UserProfile, ProfileError> {
        let _guard = self.write_lock.lock().await;
        let mut profile = load_json_for_update::<Option<UserProfile>>(self.store.as_ref(), StorageKey::USER, None)?
            .ok_or(ProfileError::NotSignedIn)?;

        profile.name = update.name;
        if let Some(email) = update.email {
            profile.email = email;
        }
        if let Some(gender) = update.gender {
            profile.gender = gender;
        }

        save_json(self.store.as_ref(), StorageKey::USER, &profile)?;

        tracing::info!("Updated profile {}", profile.id);
        Ok(profile)
    }

    pub async fn sign_out(&self) -> Result<(), ProfileError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(StorageKey::USER)?;
        tracing::debug!("Signed out");
        Ok(())
    }
}
