/// All errors that can be returned by a RecordSource implementation.
///
/// Fetch failures are propagated unchanged to the caller -- never retried,
/// never swallowed. Empty record sets and unsupported categories are not
/// errors; they are modeled as ordinary results in `cadran-core`.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No workflow exists with the given id.
    #[error("workflow not found: {id}")]
    WorkflowNotFound { id: String },

    /// The upstream store could not be reached or returned an error.
    #[error("data unavailable: {0}")]
    Unavailable(String),
}
