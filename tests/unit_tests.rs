// Unit tests for the match scorer

use roommate_match::core::{calculate_match_score, word_overlap, Recommender};
use roommate_match::models::{Amount, Post, PostKind, PostStatus, ScoringWeights, SeekerPreferences};

fn create_post(id: i64, location: &str, price: Option<Amount>, description: &str) -> Post {
    Post {
        id,
        title: format!("Room {}", id),
        image: String::new(),
        location: location.to_string(),
        number_of_members: 2,
        gender: "Any".to_string(),
        price_per_person: price,
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

fn seeker(location: Option<&str>, budget: Option<Amount>, lifestyle: Option<&str>) -> SeekerPreferences {
    SeekerPreferences {
        location: location.map(str::to_string),
        budget,
        lifestyle_description: lifestyle.map(str::to_string),
        preferences: None,
    }
}

#[test]
fn test_reference_example_scores_at_least_eighty() {
    let preferences = seeker(Some("Toul Kork"), Some(Amount::from(300)), Some("quiet clean"));
    let post = create_post(1, "Toul Kork", Some(Amount::from(300)), "quiet clean roommate wanted");

    let (score, breakdown) = calculate_match_score(&preferences, &post, &ScoringWeights::default());

    assert_eq!(breakdown.location, 30.0);
    assert_eq!(breakdown.budget, 30.0);
    assert!(breakdown.lifestyle > 0.0);
    assert!(score >= 80, "expected >= 80, got {}", score);
}

#[test]
fn test_location_equal_vs_different() {
    let weights = ScoringWeights::default();
    let post = create_post(1, "Chamkarmon", None, "");

    let (_, same) = calculate_match_score(&seeker(Some("Chamkarmon"), None, None), &post, &weights);
    let (_, different) = calculate_match_score(&seeker(Some("Sen Sok"), None, None), &post, &weights);
    let (_, missing) = calculate_match_score(&seeker(None, None, None), &post, &weights);

    assert_eq!(same.location, 30.0);
    assert_eq!(different.location, 0.0);
    assert_eq!(missing.location, 0.0);
}

#[test]
fn test_budget_tiers() {
    let weights = ScoringWeights::default();
    let post = create_post(1, "", Some(Amount::from(1000)), "");

    let points = |budget: i64| {
        let (_, breakdown) = calculate_match_score(&seeker(None, Some(Amount::from(budget)), None), &post, &weights);
        breakdown.budget
    };

    assert_eq!(points(1000), 30.0);
    assert_eq!(points(850), 15.0);
    assert_eq!(points(500), 0.0);
}

#[test]
fn test_budget_from_text_fields() {
    let weights = ScoringWeights::default();
    let post = create_post(1, "", Some(Amount::from("1000")), "");

    let (_, breakdown) = calculate_match_score(&seeker(None, Some(Amount::from("850")), None), &post, &weights);

    assert_eq!(breakdown.budget, 15.0);
}

#[test]
fn test_identical_descriptions_earn_full_lifestyle_points() {
    let text = "tidy student who enjoys cooking and quiet evenings";
    let post = create_post(1, "", None, text);

    let (_, breakdown) = calculate_match_score(&seeker(None, None, Some(text)), &post, &ScoringWeights::default());

    assert_eq!(breakdown.lifestyle, 40.0);
}

#[test]
fn test_disjoint_descriptions_earn_nothing() {
    let post = create_post(1, "", None, "party animal loves loud music");

    let (_, breakdown) = calculate_match_score(
        &seeker(None, None, Some("quiet bookworm")),
        &post,
        &ScoringWeights::default(),
    );

    assert_eq!(breakdown.lifestyle, 0.0);
}

#[test]
fn test_similarity_stays_in_unit_range() {
    let samples = [
        ("", ""),
        ("a b c", "a b c"),
        ("quiet quiet quiet quiet", "quiet"),
        ("Clean  tidy\tcalm", "calm clean"),
        ("night owl", "early bird"),
    ];

    for (a, b) in samples {
        let ratio = word_overlap(a, b);
        assert!((0.0..=1.0).contains(&ratio), "{:?} vs {:?} gave {}", a, b, ratio);
    }
}

#[test]
fn test_scores_always_in_range() {
    let weights = ScoringWeights::default();
    let locations = ["Toul Kork", "Sen Sok", ""];
    let prices = [None, Some(Amount::from(0)), Some(Amount::from(300)), Some(Amount::from("n/a"))];
    let descriptions = ["", "quiet", "quiet quiet quiet clean", "loud"];

    for location in locations {
        for price in &prices {
            for description in descriptions {
                let post = create_post(1, location, price.clone(), description);
                let preferences = seeker(Some("Toul Kork"), Some(Amount::from(300)), Some("quiet quiet quiet"));

                let (score, _) = calculate_match_score(&preferences, &post, &weights);

                assert!(score <= 100);
            }
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let recommender = Recommender::with_defaults();
    let preferences = seeker(Some("Toul Kork"), Some(Amount::from(300)), Some("quiet clean"));
    let posts = vec![
        create_post(1, "Toul Kork", Some(Amount::from(300)), "quiet clean roommate wanted"),
        create_post(2, "Toul Kork", Some(Amount::from(360)), "clean"),
        create_post(3, "Sen Sok", Some(Amount::from(100)), "quiet"),
    ];

    let first = recommender.recommend(&preferences, &posts);
    let second = recommender.recommend(&preferences, &posts);

    assert_eq!(first.posts, second.posts);
}

#[test]
fn test_empty_seeker_scores_zero_not_undefined() {
    let post = create_post(1, "Toul Kork", Some(Amount::from(300)), "quiet");

    let (score, breakdown) = calculate_match_score(&SeekerPreferences::default(), &post, &ScoringWeights::default());

    assert_eq!(score, 0);
    assert_eq!(breakdown.achievable, 100.0);
}
