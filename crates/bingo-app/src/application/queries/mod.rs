mod ranking_queries;

pub use ranking_queries::RankingQueries;
