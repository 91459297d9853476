use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Amount, NotificationStatus, SeekerPreferences};

/// Body of a create or update post request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostDraft {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = 1, max = 20))]
    #[serde(rename = "numberOfMembers", default = "default_members")]
    pub number_of_members: u32,
    #[serde(default)]
    pub gender: String,
    #[validate(required)]
    #[serde(rename = "pricePerPerson", default)]
    pub price_per_person: Option<Amount>,
    #[validate(length(min = 1, max = 4000))]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "lifestylePreferences", default)]
    pub lifestyle_preferences: String,
}

fn default_members() -> u32 {
    1
}

/// Seeker form submission. Every field the form marks required must be present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitSeekerRequest {
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(required)]
    #[serde(default)]
    pub budget: Option<Amount>,
    #[validate(length(min = 1))]
    #[serde(rename = "lifestyleDescription")]
    pub lifestyle_description: String,
    #[serde(default)]
    pub preferences: Option<String>,
}

impl From<SubmitSeekerRequest> for SeekerPreferences {
    fn from(req: SubmitSeekerRequest) -> Self {
        SeekerPreferences {
            location: Some(req.location),
            budget: req.budget,
            lifestyle_description: Some(req.lifestyle_description),
            preferences: req.preferences,
        }
    }
}

/// Account registration form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(must_match(other = "password"))]
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    #[validate(length(min = 1))]
    pub gender: String,
    #[serde(rename = "telegramId", default)]
    pub telegram_id: Option<String>,
    #[serde(rename = "telegramUsername", default)]
    pub telegram_username: Option<String>,
}

/// Profile edit form. An absent or empty email keeps the current one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl ProfileUpdate {
    /// Treat a blank email field as "unchanged"
    pub fn without_blank_email(mut self) -> Self {
        if self.email.as_deref().map_or(false, |e| e.trim().is_empty()) {
            self.email = None;
        }
        self
    }
}

/// Request to respond to a booking notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondRequest {
    pub status: NotificationStatus,
}
