use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use crate::models::{Contact, Notification, NotificationKind, NotificationStatus, RoomRef};
use crate::services::storage::{load_json, load_json_for_update, save_json, KeyValueStore, StorageError, StorageKey};

#[derive(Debug, Error)]
pub enum InboxError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Notification not found: {0}")]
    NotFound(i64),
}

/// Owner notification inbox
pub struct NotificationInbox {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl NotificationInbox {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Notifications, seeded with the sample booking request on first use
    pub async fn list(&self) -> Result<Vec<Notification>, InboxError> {
        Ok(load_json(self.store.as_ref(), StorageKey::NOTIFICATIONS, seed_notifications())?)
    }

    pub async fn unread_count(&self) -> Result<usize, InboxError> {
        Ok(self.list().await?.iter().filter(|n| !n.read).count())
    }

    /// Open a notification, marking it read
    pub async fn open(&self, id: i64) -> Result<Notification, InboxError> {
        self.modify(id, |n| n.read = true).await
    }

    /// Accept or reject a booking request. Responding also marks it read.
    pub async fn respond(&self, id: i64, status: NotificationStatus) -> Result<Notification, InboxError> {
        let updated = self
            .modify(id, |n| {
                n.status = status;
                n.read = true;
            })
            .await?;

        tracing::info!("Booking notification {} marked {:?}", id, status);
        Ok(updated)
    }

    async fn modify<F>(&self, id: i64, change: F) -> Result<Notification, InboxError>
    where
        F: FnOnce(&mut Notification),
    {
        let _guard = self.write_lock.lock().await;
        let mut notifications: Vec<Notification> =
            load_json_for_update(self.store.as_ref(), StorageKey::NOTIFICATIONS, seed_notifications())?;

        let target = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(InboxError::NotFound(id))?;
        change(target);
        let updated = target.clone();

        save_json(self.store.as_ref(), StorageKey::NOTIFICATIONS, &notifications)?;
        Ok(updated)
    }
}

fn seed_notifications() -> Vec<Notification> {
    vec![Notification {
        id: 1,
        title: "New booking request received".to_string(),
        date: "Jan 7, 2026".to_string(),
        read: false,
        kind: NotificationKind::Booking,
        status: NotificationStatus::Pending,
        user: Contact {
            name: "Cheata".to_string(),
            avatar: "/users/user-02.jpg".to_string(),
            email: "cheata@example.com".to_string(),
            phone: "+855 12 000 111".to_string(),
        },
        room: RoomRef {
            id: 203,
            title: "Bright Room with Balcony".to_string(),
        },
        message: "I would like to book this room starting next week.".to_string(),
    }]
}
