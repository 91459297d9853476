// Criterion benchmarks for the match scorer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roommate_match::core::{calculate_match_score, word_overlap, Recommender};
use roommate_match::models::{Amount, Post, PostKind, PostStatus, ScoringWeights, SeekerPreferences};

const LOCATIONS: [&str; 4] = ["Toul Kork", "Sen Sok", "Chamkarmon", "Daun Penh"];
const DESCRIPTIONS: [&str; 3] = [
    "quiet clean room for a student who enjoys cooking",
    "social house with weekend parties and music",
    "calm riverside flat, looking for a tidy early bird",
];

fn create_post(id: usize) -> Post {
    Post {
        id: id as i64,
        title: format!("Room {}", id),
        image: String::new(),
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        number_of_members: 2,
        gender: "Any".to_string(),
        price_per_person: Some(Amount::from(150 + (id % 10) as i64 * 25)),
        description: DESCRIPTIONS[id % DESCRIPTIONS.len()].to_string(),
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
        budget: Some(Amount::from("250")),
        lifestyle_description: Some("quiet student who enjoys cooking and clean spaces".to_string()),
        preferences: None,
    }
}

fn bench_word_overlap(c: &mut Criterion) {
    c.bench_function("word_overlap", |b| {
        b.iter(|| word_overlap(black_box(DESCRIPTIONS[0]), black_box(DESCRIPTIONS[2])));
    });
}

fn bench_single_score(c: &mut Criterion) {
    let post = create_post(0);
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&preferences), black_box(&post), &weights));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("recommend");
    for size in [10usize, 100, 1000] {
        let posts: Vec<Post> = (0..size).map(create_post).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &posts, |b, posts| {
            b.iter(|| recommender.recommend(black_box(&preferences), black_box(posts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_word_overlap, bench_single_score, bench_recommend);
criterion_main!(benches);
