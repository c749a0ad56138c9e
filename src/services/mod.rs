pub mod catalog;
pub mod popularity;
pub mod providers;
pub mod questionnaire;
pub mod recommendations;
pub mod search;
pub mod similarity;
pub mod statistics;

pub use catalog::Catalog;
pub use popularity::PopularityRanker;
pub use recommendations::Recommender;
