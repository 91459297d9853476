use crate::models::{Post, ScoringWeights, SeekerPreferences};
use crate::core::similarity::word_overlap;

/// Points earned per criterion for one (seeker, post) pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub location: f64,
    pub budget: f64,
    pub lifestyle: f64,
    /// Sum of all criterion weights, whether or not data was present
    pub achievable: f64,
}

impl ScoreBreakdown {
    pub fn earned(&self) -> f64 {
        self.location + self.budget + self.lifestyle
    }
}

/// Calculate a match score (0-100) for a post based on seeker preferences
///
/// Scoring formula (default weights):
/// score = round(100 * (
///     location_points +    # 30 if both locations present and equal
///     budget_points +      # 30 if affordable, 15 within the stretch
///     lifestyle_points     # word overlap * 40
/// ) / 100)
///
/// Every criterion adds its full weight to the achievable total even when one
/// side has no data, so incomplete profiles score lower instead of being
/// judged on fewer criteria.
pub fn calculate_match_score(
    preferences: &SeekerPreferences,
    post: &Post,
    weights: &ScoringWeights,
) -> (u8, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        location: location_points(preferences.location(), post.location(), weights.location),
        budget: budget_points(preferences.budget(), post.price(), weights),
        lifestyle: lifestyle_points(preferences.lifestyle(), post.description(), weights.lifestyle),
        achievable: weights.total(),
    };

    if breakdown.achievable <= 0.0 {
        return (0, breakdown);
    }

    let normalized = (breakdown.earned() / breakdown.achievable * 100.0).round();
    (normalized.clamp(0.0, 100.0) as u8, breakdown)
}

#[inline]
fn location_points(seeker: Option<&str>, post: Option<&str>, weight: f64) -> f64 {
    match (seeker, post) {
        (Some(a), Some(b)) if a == b => weight,
        _ => 0.0,
    }
}

/// Full weight when the seeker can afford the price, half within the stretch
#[inline]
fn budget_points(budget: Option<i64>, price: Option<i64>, weights: &ScoringWeights) -> f64 {
    let (Some(budget), Some(price)) = (budget, price) else {
        return 0.0;
    };

    let budget = budget as f64;
    let price = price as f64;

    if budget >= price {
        weights.budget
    } else if budget >= price * weights.budget_stretch {
        weights.budget / 2.0
    } else {
        0.0
    }
}

#[inline]
fn lifestyle_points(seeker: Option<&str>, post: Option<&str>, weight: f64) -> f64 {
    match (seeker, post) {
        (Some(a), Some(b)) => word_overlap(a, b) * weight,
        _ => 0.0,
    }
}
