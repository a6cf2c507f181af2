#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    /// A filter or page request left nothing to show.
    #[error("No data available")]
    NoDataAvailable,
}
