use thiserror::Error;

/// Errors returned by [`crate::WindowStore`] actions.
///
/// A rejected action leaves the store exactly as it was.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// A page size of zero was requested.
    #[error("invalid page size {requested}: page size must be at least 1")]
    InvalidPageSize { requested: usize },
}
