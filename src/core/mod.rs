// Core algorithm exports
pub mod catalog;
pub mod recommender;
pub mod scoring;
pub mod similarity;

pub use catalog::{find_listing, sample_listings};
pub use recommender::{Recommendation, RecommendOptions, Recommender};
pub use scoring::{calculate_match_score, ScoreBreakdown};
pub use similarity::word_overlap;
