use serde::{Deserialize, Serialize};

/// A numeric form field that may arrive as a JSON number or as text.
///
/// Form inputs post strings ("300") while older stored records hold numbers,
/// so both shapes are accepted and resolved to whole currency units on demand.
/// Whole numbers stay integers so they are written back as `300`, not `300.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Amount {
    /// Integer value of the amount, read the way a lenient form parser would:
    /// leading whitespace skipped, an optional sign, then leading digits.
    /// Anything after the digits is ignored. No digits means no value.
    pub fn whole_units(&self) -> Option<i64> {
        match self {
            Amount::Integer(n) => Some(*n),
            Amount::Number(n) if n.is_finite() => {
                let truncated = n.trunc();
                if truncated.abs() < i64::MAX as f64 {
                    Some(truncated as i64)
                } else {
                    None
                }
            }
            Amount::Number(_) => None,
            Amount::Text(text) => parse_leading_integer(text),
        }
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Integer(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// What a seeker is looking for, as collected by the "be a roommate" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekerPreferences {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub budget: Option<Amount>,
    #[serde(rename = "lifestyleDescription", default)]
    pub lifestyle_description: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

impl SeekerPreferences {
    /// Location, treating an empty string as absent
    pub fn location(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    pub fn budget(&self) -> Option<i64> {
        self.budget.as_ref().and_then(Amount::whole_units)
    }

    pub fn lifestyle(&self) -> Option<&str> {
        non_empty(self.lifestyle_description.as_deref())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    RoommateRequest,
    RoommateSeeker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Active,
}

fn default_members() -> u32 { 1 }

fn default_request_kind() -> PostKind { PostKind::RoommateRequest }

fn default_status() -> PostStatus { PostStatus::Active }

/// A room post by someone who has a room and wants roommates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Millisecond timestamp taken at creation, unique within the repository
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "numberOfMembers", default = "default_members")]
    pub number_of_members: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(rename = "pricePerPerson", default)]
    pub price_per_person: Option<Amount>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "lifestylePreferences", default)]
    pub lifestyle_preferences: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "type", default = "default_request_kind")]
    pub kind: PostKind,
    #[serde(default = "default_status")]
    pub status: PostStatus,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub inquiries: u32,
}

impl Post {
    pub fn location(&self) -> Option<&str> {
        non_empty(Some(self.location.as_str()))
    }

    pub fn price(&self) -> Option<i64> {
        self.price_per_person.as_ref().and_then(Amount::whole_units)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(Some(self.description.as_str()))
    }

    /// Lifestyle tags, split from the comma-separated form value
    pub fn lifestyle_tags(&self) -> Vec<&str> {
        self.lifestyle_preferences
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// A submitted seeker profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerRecord {
    pub id: i64,
    #[serde(flatten)]
    pub preferences: SeekerPreferences,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub status: PostStatus,
}

/// A post with its computed match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    #[serde(flatten)]
    pub post: Post,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    /// Sample listing shown because nothing qualified; the score is a constant
    #[serde(rename = "isPlaceholder")]
    pub is_placeholder: bool,
}

/// Scoring weights, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub location: f64,
    pub budget: f64,
    pub lifestyle: f64,
    /// Fraction of the price a budget may fall short by and still earn half credit
    pub budget_stretch: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.location + self.budget + self.lifestyle
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 30.0,
            budget: 30.0,
            lifestyle: 40.0,
            budget_stretch: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Booking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRef {
    pub id: i64,
    pub title: String,
}

/// Notification delivered to a room owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub status: NotificationStatus,
    pub user: Contact,
    pub room: RoomRef,
    #[serde(default)]
    pub message: String,
}

/// Account role, derived from the email at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Tenant,
    Owner,
    Admin,
}

impl UserRole {
    /// "admin" anywhere in the email wins over "owner"; everyone else is a tenant
    pub fn for_email(email: &str) -> Self {
        if email.contains("admin") {
            UserRole::Admin
        } else if email.contains("owner") {
            UserRole::Owner
        } else {
            UserRole::Tenant
        }
    }
}

fn default_role() -> UserRole { UserRole::Tenant }

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "telegramId", default, skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<String>,
    #[serde(rename = "telegramUsername", default, skip_serializing_if = "Option::is_none")]
    pub telegram_username: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parses_like_a_form_field() {
        assert_eq!(Amount::from("300").whole_units(), Some(300));
        assert_eq!(Amount::from("  850 per month").whole_units(), Some(850));
        assert_eq!(Amount::from("-20").whole_units(), Some(-20));
        assert_eq!(Amount::from("$300").whole_units(), None);
        assert_eq!(Amount::from("").whole_units(), None);
        assert_eq!(Amount::Number(299.9).whole_units(), Some(299));
        assert_eq!(Amount::Number(f64::NAN).whole_units(), None);
    }

    #[test]
    fn test_amount_deserializes_both_shapes() {
        let number: Amount = serde_json::from_str("300").unwrap();
        let text: Amount = serde_json::from_str("\"300\"").unwrap();
        let fraction: Amount = serde_json::from_str("299.5").unwrap();
        assert_eq!(number, Amount::Integer(300));
        assert_eq!(number.whole_units(), text.whole_units());
        assert_eq!(fraction.whole_units(), Some(299));
    }

    #[test]
    fn test_whole_amounts_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Amount::from(100)).unwrap(), "100");
        assert_eq!(serde_json::to_string(&Amount::from("100")).unwrap(), "\"100\"");

        let post: Post = serde_json::from_str(r#"{"id":1,"pricePerPerson":250}"#).unwrap();
        let written = serde_json::to_value(&post).unwrap();
        assert_eq!(written["pricePerPerson"], serde_json::json!(250));
        assert!(written["pricePerPerson"].is_i64());
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let prefs = SeekerPreferences {
            location: Some(String::new()),
            budget: Some(Amount::from("abc")),
            lifestyle_description: Some(String::new()),
            preferences: None,
        };
        assert_eq!(prefs.location(), None);
        assert_eq!(prefs.budget(), None);
        assert_eq!(prefs.lifestyle(), None);
    }

    #[test]
    fn test_post_reads_stored_json() {
        let json = r#"{
            "id": 1736200000000,
            "title": "Room near RUPP",
            "location": "Toul Kork",
            "numberOfMembers": 2,
            "pricePerPerson": "150",
            "description": "quiet and clean",
            "lifestylePreferences": "Quiet,Clean,",
            "type": "roommate_request",
            "status": "active"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.price(), Some(150));
        assert_eq!(post.lifestyle_tags(), vec!["Quiet", "Clean"]);
        assert_eq!(post.views, 0);
        assert_eq!(post.kind, PostKind::RoommateRequest);
    }

    #[test]
    fn test_role_follows_email() {
        assert_eq!(UserRole::for_email("site.admin@mail.com"), UserRole::Admin);
        assert_eq!(UserRole::for_email("admin.owner@mail.com"), UserRole::Admin);
        assert_eq!(UserRole::for_email("houseowner@mail.com"), UserRole::Owner);
        assert_eq!(UserRole::for_email("dara@mail.com"), UserRole::Tenant);
    }

    #[test]
    fn test_profile_reads_login_record() {
        // Records saved by the login page carry no gender or creation time
        let json = r#"{"id":1,"name":"Demo Owner","email":"owner@property.com","role":"owner","avatar":"/users/owner.svg"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.role, UserRole::Owner);
        assert_eq!(profile.gender, "");
        assert!(profile.created_at.is_none());
    }

    #[test]
    fn test_default_weights_total_one_hundred() {
        assert_eq!(ScoringWeights::default().total(), 100.0);
    }
}
