use std::sync::Arc;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;
use crate::models::{Post, PostDraft, PostKind, PostStatus, SeekerPreferences, SeekerRecord};
use crate::services::storage::{load_json, load_json_for_update, save_json, KeyValueStore, StorageError, StorageKey};

/// Errors that can occur when managing posts
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Post not found: {0}")]
    NotFound(i64),

    #[error("No id left above {0}")]
    IdsExhausted(i64),
}

/// Roommate posts and seeker submissions
///
/// Every mutation reloads the full collection, changes it and writes it
/// back. The write lock keeps two requests from interleaving those steps.
/// Reads tolerate an unreadable collection and show it as empty; mutations
/// fail instead, leaving the stored value untouched.
pub struct PostRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All posts in creation order
    pub async fn list(&self) -> Result<Vec<Post>, RepositoryError> {
        Ok(load_json(self.store.as_ref(), StorageKey::POSTS, Vec::new())?)
    }

    pub async fn get(&self, id: i64) -> Result<Post, RepositoryError> {
        self.list()
            .await?
            .into_iter()
            .find(|post| post.id == id)
            .ok_or(RepositoryError::NotFound(id))
    }

    fn posts_for_update(&self) -> Result<Vec<Post>, RepositoryError> {
        Ok(load_json_for_update(self.store.as_ref(), StorageKey::POSTS, Vec::new())?)
    }

    /// Create a post from a validated draft
    pub async fn create(&self, draft: PostDraft) -> Result<Post, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.posts_for_update()?;

        let id = next_id(posts.iter().map(|p| p.id))?;
        let post = apply_draft(draft, id, Utc::now(), None, 0, 0);

        posts.push(post.clone());
        save_json(self.store.as_ref(), StorageKey::POSTS, &posts)?;

        tracing::info!("Created post {} in {}", post.id, post.location);
        Ok(post)
    }

    /// Replace the editable fields of a post
    ///
    /// The id, creation time and view / inquiry counters survive the edit.
    pub async fn update(&self, id: i64, draft: PostDraft) -> Result<Post, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.posts_for_update()?;

        let slot = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(RepositoryError::NotFound(id))?;

        let updated = apply_draft(
            draft,
            slot.id,
            slot.created_at.unwrap_or_else(Utc::now),
            Some(Utc::now()),
            slot.views,
            slot.inquiries,
        );
        *slot = updated.clone();

        save_json(self.store.as_ref(), StorageKey::POSTS, &posts)?;

        tracing::info!("Updated post {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.posts_for_update()?;

        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(RepositoryError::NotFound(id));
        }

        save_json(self.store.as_ref(), StorageKey::POSTS, &posts)?;

        tracing::info!("Deleted post {}", id);
        Ok(())
    }

    /// Record a seeker's submitted preferences
    pub async fn record_seeker(&self, preferences: SeekerPreferences) -> Result<SeekerRecord, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut seekers: Vec<SeekerRecord> =
            load_json_for_update(self.store.as_ref(), StorageKey::SEEKERS, Vec::new())?;

        let record = SeekerRecord {
            id: next_id(seekers.iter().map(|s| s.id))?,
            preferences,
            created_at: Utc::now(),
            kind: PostKind::RoommateSeeker,
            status: PostStatus::Active,
        };

        seekers.push(record.clone());
        save_json(self.store.as_ref(), StorageKey::SEEKERS, &seekers)?;

        tracing::debug!("Recorded seeker {}", record.id);
        Ok(record)
    }

    pub async fn list_seekers(&self) -> Result<Vec<SeekerRecord>, RepositoryError> {
        Ok(load_json(self.store.as_ref(), StorageKey::SEEKERS, Vec::new())?)
    }
}

/// Current millisecond timestamp, bumped past any id already taken
fn next_id(existing: impl Iterator<Item = i64>) -> Result<i64, RepositoryError> {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) if max >= now => max.checked_add(1).ok_or(RepositoryError::IdsExhausted(max)),
        _ => Ok(now),
    }
}

fn apply_draft(
    draft: PostDraft,
    id: i64,
    created_at: chrono::DateTime<Utc>,
    updated_at: Option<chrono::DateTime<Utc>>,
    views: u32,
    inquiries: u32,
) -> Post {
    Post {
        id,
        title: draft.title,
        image: draft.image,
        location: draft.location,
        number_of_members: draft.number_of_members,
        gender: draft.gender,
        price_per_person: draft.price_per_person,
        description: draft.description,
        amenities: draft.amenities,
        lifestyle_preferences: draft.lifestyle_preferences,
        created_at: Some(created_at),
        updated_at,
        kind: PostKind::RoommateRequest,
        status: PostStatus::Active,
        views,
        inquiries,
    }
}
