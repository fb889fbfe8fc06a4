// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityKind, BookInterest, FoodInterest, Gender, LifestyleInterest, MovieInterest,
    MusicInterest, Profile, ScoredCandidate, SportInterest, TravelInterest,
};
pub use requests::{CreateRecordRequest, LikeRequest, RecommendationsQuery, RecordActivityRequest};
pub use responses::{ActivityAckResponse, ErrorResponse, HealthResponse};
