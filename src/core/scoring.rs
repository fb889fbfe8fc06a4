use crate::models::Profile;

/// Number of independent interest categories on a profile.
pub const INTEREST_CATEGORIES: usize = 7;

type CategoryMatch = fn(&Profile, &Profile) -> bool;

/// Fixed table of interest-category matchers, one entry per category.
///
/// Categories are never discovered at runtime; adding a category means adding
/// a row here.
const CATEGORY_MATCHERS: [(&str, CategoryMatch); INTEREST_CATEGORIES] = [
    ("book", |a, b| shared(&a.book_interest, &b.book_interest)),
    ("sport", |a, b| shared(&a.sport_interest, &b.sport_interest)),
    ("movie", |a, b| shared(&a.movie_interest, &b.movie_interest)),
    ("music", |a, b| shared(&a.music_interest, &b.music_interest)),
    ("food", |a, b| shared(&a.food_interest, &b.food_interest)),
    ("lifestyle", |a, b| {
        shared(&a.lifestyle_interest, &b.lifestyle_interest)
    }),
    ("travel", |a, b| shared(&a.travel_interest, &b.travel_interest)),
];

/// A category counts iff both sides recorded a value and the values are
/// equal. Absent values never contribute.
#[inline]
fn shared<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

/// Count the interest categories two profiles have in common.
///
/// Pure and symmetric; always in `0..=7`.
pub fn match_score(reference: &Profile, candidate: &Profile) -> u32 {
    CATEGORY_MATCHERS
        .iter()
        .filter(|(_, category_matches)| category_matches(reference, candidate))
        .count() as u32
}

/// Names of the categories two profiles have in common.
pub fn shared_interests(reference: &Profile, candidate: &Profile) -> Vec<&'static str> {
    CATEGORY_MATCHERS
        .iter()
        .filter(|(_, category_matches)| category_matches(reference, candidate))
        .map(|(name, _)| *name)
        .collect()
}
