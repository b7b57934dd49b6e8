mod matcher;
mod ranker;
mod service;

pub use matcher::{ApproximateMatcher, Matcher, SubsequenceMatcher, matcher_for};
pub use ranker::{Ranker, SuggestionResult, suggest};
pub use service::SuggestionService;
