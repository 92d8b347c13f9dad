/// Retrieval subsystem errors.
///
/// The only real failure source in the pipeline is the vector-search
/// collaborator; the orchestrator downgrades per-call failures to zero hits,
/// so these surface mostly in logs and in collaborator implementations.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("search backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("authentication rejected by search backend: {reason}")]
    AuthFailed { reason: String },
}
