use std::str::Utf8Error;

use thiserror::Error;

/// Errors for one analysis call.
/// Every variant is recovered at the call boundary; a failed call leaves no
/// state behind, so subsequent calls are unaffected.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The uploaded bytes are not valid UTF-8 text.
    #[error("could not decode the file as UTF-8 text: {0}")]
    Decode(#[from] Utf8Error),
    /// The requested page is outside the computed page range.
    /// An empty vocabulary has zero pages; only page 1 is accepted there.
    #[error("page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
    /// A page size of zero cannot paginate anything.
    #[error("page size must be at least 1")]
    InvalidPageSize,
}
