// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Amount, Contact, Notification, NotificationKind, NotificationStatus, Post, PostKind,
    PostStatus, RoomRef, ScoredPost, ScoringWeights, SeekerPreferences, SeekerRecord, UserProfile,
    UserRole,
};
pub use requests::{PostDraft, ProfileUpdate, RegisterRequest, RespondRequest, SubmitSeekerRequest};
pub use responses::{
    ErrorResponse, HealthResponse, NotificationsResponse, RecommendResponse, SubmitSeekerResponse,
};
