/// Reasons a pattern cannot be prepared for searching.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchError {
    /// An empty pattern would match between every pair of symbols; it is rejected instead.
    #[error("the search pattern is empty")]
    EmptyPattern,
}
