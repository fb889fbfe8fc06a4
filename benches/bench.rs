// Criterion benchmarks for the Amora recommendation core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use amora_recs::core::{match_score, rank_candidates};
use amora_recs::models::{
    BookInterest, FoodInterest, Gender, MovieInterest, MusicInterest, Profile, SportInterest,
};
use uuid::Uuid;

fn create_candidate(id: usize) -> Profile {
    Profile {
        profile_id: Uuid::new_v4(),
        account_id: Uuid::new_v4(),
        image_paths: vec![],
        name: format!("User {}", id),
        description: String::new(),
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
        book_interest: (id % 3 == 0).then_some(BookInterest::Fantasy),
        sport_interest: (id % 4 == 0).then_some(SportInterest::Tennis),
        movie_interest: (id % 2 == 0).then_some(MovieInterest::Action),
        music_interest: (id % 5 == 0).then_some(MusicInterest::Rock),
        food_interest: (id % 7 == 0).then_some(FoodInterest::Italian),
        lifestyle_interest: None,
        travel_interest: None,
    }
}

fn create_reference() -> Profile {
    let mut reference = create_candidate(0);
    reference.book_interest = Some(BookInterest::Fantasy);
    reference.movie_interest = Some(MovieInterest::Action);
    reference.music_interest = Some(MusicInterest::Rock);
    reference.food_interest = Some(FoodInterest::Italian);
    reference
}

fn bench_match_score(c: &mut Criterion) {
    let reference = create_reference();
    let candidate = create_candidate(42);

    c.bench_function("match_score", |b| {
        b.iter(|| match_score(black_box(&reference), black_box(&candidate)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let reference = create_reference();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    rank_candidates(
                        black_box(&reference),
                        black_box(candidates.clone()),
                        black_box(30),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_ranking);
criterion_main!(benches);
