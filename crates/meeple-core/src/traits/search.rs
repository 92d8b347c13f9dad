use crate::errors::MeepleResult;
use crate::models::SearchHit;

/// The vector-similarity search collaborator.
///
/// Implementations must return `Ok(vec![])` for "no matches" and reserve
/// errors for transport or authentication failure. The retrieval engine
/// treats a failed call as zero hits for that call and keeps going.
pub trait IVectorSearch: Send + Sync {
    fn search(&self, query: &str) -> MeepleResult<Vec<SearchHit>>;
}
