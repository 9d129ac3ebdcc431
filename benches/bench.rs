// Criterion benchmarks for Roomie Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomie_algo::core::{calculate_compatibility, Browser};
use roomie_algo::models::{BrowseFilters, RoommateProfile, ScoringWeights};

const LOCATIONS: [&str; 6] = ["mumbai", "pune", "bangalore", "delhi", "noida", "hyderabad"];
const LIFESTYLE: [&str; 6] = [
    "non-smoker",
    "early riser",
    "night owl",
    "clean",
    "social",
    "pet-friendly",
];

fn create_candidate(id: usize) -> RoommateProfile {
    RoommateProfile {
        id: id as i64,
        name: format!("User {}", id),
        age: Some(22 + (id % 10) as u8),
        gender: None,
        budget: Some(500 + (id as i64 % 12) * 100),
        preferred_locations: vec![
            LOCATIONS[id % LOCATIONS.len()].to_string(),
            LOCATIONS[(id + 1) % LOCATIONS.len()].to_string(),
        ],
        lifestyle_tags: vec![
            LIFESTYLE[id % LIFESTYLE.len()].to_string(),
            LIFESTYLE[(id + 2) % LIFESTYLE.len()].to_string(),
        ],
        bio: None,
        profile_image: None,
        created_at: None,
    }
}

fn create_requester() -> RoommateProfile {
    RoommateProfile {
        id: 0,
        name: "Requester".to_string(),
        age: Some(25),
        gender: None,
        budget: Some(900),
        preferred_locations: vec!["mumbai".to_string(), "pune".to_string()],
        lifestyle_tags: vec!["non-smoker".to_string(), "clean".to_string()],
        bio: None,
        profile_image: None,
        created_at: None,
    }
}

fn bench_compatibility_score(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let requester = create_requester();
    let candidate = create_candidate(1);

    c.bench_function("compatibility_score", |b| {
        b.iter(|| {
            calculate_compatibility(
                black_box(&requester),
                black_box(&candidate),
                black_box(&weights),
            )
        });
    });
}

fn bench_browse(c: &mut Criterion) {
    let browser = Browser::with_default_weights();
    let requester = create_requester();
    let filters = BrowseFilters::default();

    let mut group = c.benchmark_group("browse");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<RoommateProfile> =
            (1..=*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("browse", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    browser.browse(
                        black_box(&requester),
                        black_box(candidates.clone()),
                        black_box(&filters),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filtered_browse(c: &mut Criterion) {
    let browser = Browser::with_default_weights();
    let requester = create_requester();
    let candidates: Vec<RoommateProfile> = (1..=100).map(create_candidate).collect();

    let filters = BrowseFilters {
        location: Some("mumbai".to_string()),
        budget_min: Some(600),
        budget_max: Some(1400),
    };

    c.bench_function("filtered_browse_100_candidates", |b| {
        b.iter(|| {
            browser.browse(
                black_box(&requester),
                black_box(candidates.clone()),
                black_box(&filters),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_compatibility_score,
    bench_browse,
    bench_filtered_browse
);

criterion_main!(benches);
