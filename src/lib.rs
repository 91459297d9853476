//! Roommate Match - matching and listing service for the roommate finder
//!
//! This library provides the match scorer used to rank room posts against a
//! seeker's preferences, plus the post storage and HTTP handlers around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, word_overlap, Recommendation, RecommendOptions, Recommender};
pub use models::{Post, PostDraft, ScoredPost, ScoringWeights, SeekerPreferences};
