use std::sync::Arc;
use crate::models::{Post, ScoredPost, ScoringWeights, SeekerPreferences};
use crate::core::{catalog::sample_listings, scoring::calculate_match_score};

/// Result of a recommendation query
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub posts: Vec<ScoredPost>,
    pub total_candidates: usize,
    /// True when nothing qualified and placeholder listings were substituted
    pub used_fallback: bool,
}

/// Ranking thresholds and fallback behaviour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    /// Minimum score a post needs to be recommended
    pub threshold: u8,
    /// Number of sample listings returned when nothing qualifies
    pub fallback_size: usize,
    /// Constant score attached to sample listings
    pub placeholder_score: u8,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            threshold: 50,
            fallback_size: 6,
            placeholder_score: 75,
        }
    }
}

/// Recommendation pipeline
///
/// # Pipeline Stages
/// 1. Score every candidate post
/// 2. Drop posts below the threshold
/// 3. Stable sort by score, highest first
/// 4. Substitute sample listings if nothing is left
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    options: RecommendOptions,
    catalog: Arc<Vec<Post>>,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, options: RecommendOptions) -> Self {
        Self::with_catalog(weights, options, sample_listings())
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), RecommendOptions::default())
    }

    /// Use a custom fallback catalog instead of the built-in samples
    pub fn with_catalog(weights: ScoringWeights, options: RecommendOptions, catalog: Vec<Post>) -> Self {
        Self {
            weights,
            options,
            catalog: Arc::new(catalog),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn options(&self) -> &RecommendOptions {
        &self.options
    }

    /// Score a single post
    pub fn score(&self, preferences: &SeekerPreferences, post: &Post) -> u8 {
        let (score, breakdown) = calculate_match_score(preferences, post, &self.weights);
        tracing::trace!(
            "Post {} scored {} (location: {}, budget: {}, lifestyle: {:.1})",
            post.id,
            score,
            breakdown.location,
            breakdown.budget,
            breakdown.lifestyle
        );
        score
    }

    /// Score every post, keeping input order and without filtering
    pub fn score_all(&self, preferences: &SeekerPreferences, posts: &[Post]) -> Vec<ScoredPost> {
        posts
            .iter()
            .map(|post| ScoredPost {
                match_score: self.score(preferences, post),
                post: post.clone(),
                is_placeholder: false,
            })
            .collect()
    }

    /// Rank posts for a seeker
    ///
    /// # Arguments
    /// * `preferences` - The seeker's stated preferences
    /// * `posts` - Every available post; left untouched
    ///
    /// # Returns
    /// Qualifying posts ranked by score, or the placeholder listings if none
    /// reach the threshold
    pub fn recommend(&self, preferences: &SeekerPreferences, posts: &[Post]) -> Recommendation {
        let total_candidates = posts.len();

        let mut ranked: Vec<ScoredPost> = self
            .score_all(preferences, posts)
            .into_iter()
            .filter(|scored| scored.match_score >= self.options.threshold)
            .collect();

        // sort_by is stable, so equal scores keep their input order
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if ranked.is_empty() {
            tracing::debug!(
                "No post of {} reached {}%, returning {} placeholders",
                total_candidates,
                self.options.threshold,
                self.options.fallback_size
            );
            return Recommendation {
                posts: self.fallback(),
                total_candidates,
                used_fallback: true,
            };
        }

        Recommendation {
            posts: ranked,
            total_candidates,
            used_fallback: false,
        }
    }

    fn fallback(&self) -> Vec<ScoredPost> {
        self.catalog
            .iter()
            .take(self.options.fallback_size)
            .map(|post| ScoredPost {
                post: post.clone(),
                match_score: self.options.placeholder_score,
                is_placeholder: true,
            })
            .collect()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, PostKind, PostStatus};

    fn create_post(id: i64, location: &str, price: i64, description: &str) -> Post {
        Post {
            id,
            title: format!("Room {}", id),
            image: String::new(),
            location: location.to_string(),
            number_of_members: 2,
            gender: "Any".to_string(),
            price_per_person: Some(Amount::from(price)),
            description: description.to_string(),
            amenities: vec![],
            lifestyle_preferences: String::new(),
            created_at: None,
            updated_at: None,
            kind: PostKind::RoommateRequest,
            status: PostStatus::Active,
            views: 0,
            inquiries: 0,
        }
    }

    fn create_preferences() -> SeekerPreferences {
        SeekerPreferences {
            location: Some("Toul Kork".to_string()),
            budget: Some(Amount::from(300)),
            lifestyle_description: Some("quiet clean".to_string()),
            preferences: None,
        }
    }

    #[test]
    fn test_recommend_basic() {
        let recommender = Recommender::with_defaults();
        let preferences = create_preferences();

        let posts = vec![
            create_post(1, "Toul Kork", 300, "quiet clean roommate wanted"), // 80
            create_post(2, "Sen Sok", 900, "loud parties every night"),      // 0
        ];

        let result = recommender.recommend(&preferences, &posts);

        assert!(!result.used_fallback);
        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.posts.len(), 1);
        assert_eq!(result.posts[0].post.id, 1);
        assert!(!result.posts[0].is_placeholder);
    }

    #[test]
    fn test_recommendations_sorted_by_score() {
        let recommender = Recommender::with_defaults();
        let preferences = create_preferences();

        let posts = vec![
            create_post(1, "Toul Kork", 350, "quiet"),                       // 30 + 15 + 20 = 65
            create_post(2, "Toul Kork", 300, "quiet clean roommate wanted"), // 80
            create_post(3, "Toul Kork", 300, "quiet clean"),               // 100
        ];

        let result = recommender.recommend(&preferences, &posts);

        let ids: Vec<i64> = result.posts.iter().map(|p| p.post.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let recommender = Recommender::with_defaults();
        let preferences = create_preferences();

        let posts = vec![
            create_post(10, "Toul Kork", 300, "quiet clean"),
            create_post(5, "Toul Kork", 300, "quiet clean"),
            create_post(7, "Toul Kork", 300, "quiet clean"),
        ];

        let result = recommender.recommend(&preferences, &posts);

        let ids: Vec<i64> = result.posts.iter().map(|p| p.post.id).collect();
        assert_eq!(ids, vec![10, 5, 7]);
    }

    #[test]
    fn test_empty_posts_fall_back() {
        let recommender = Recommender::with_defaults();

        let result = recommender.recommend(&create_preferences(), &[]);

        assert!(result.used_fallback);
        assert_eq!(result.posts.len(), 6);
        assert!(result.posts.iter().all(|p| p.is_placeholder && p.match_score == 75));
    }

    #[test]
    fn test_custom_options() {
        let options = RecommendOptions { threshold: 90, fallback_size: 2, placeholder_score: 60 };
        let recommender = Recommender::new(ScoringWeights::default(), options);

        let posts = vec![create_post(1, "Toul Kork", 300, "quiet clean roommate wanted")];
        let result = recommender.recommend(&create_preferences(), &posts);

        assert!(result.used_fallback);
        assert_eq!(result.posts.len(), 2);
        assert_eq!(result.posts[0].match_score, 60);
    }

    #[test]
    fn test_score_all_keeps_everything() {
        let recommender = Recommender::with_defaults();
        let posts = vec![
            create_post(1, "Sen Sok", 900, "loud"),
            create_post(2, "Toul Kork", 300, "quiet clean"),
        ];

        let scored = recommender.score_all(&create_preferences(), &posts);

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].match_score, 0);
        assert_eq!(scored[1].match_score, 100);
    }
}
