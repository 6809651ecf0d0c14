use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// A history or statistics request asked for zero days.
    #[error("price window must cover at least one day")]
    EmptyWindow,

    #[error("a {days}-day price window reaches outside the supported calendar range")]
    DateOutOfRange { days: u32 },
}
