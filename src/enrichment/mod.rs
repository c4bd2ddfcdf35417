//! Track enrichment: resolving artist/title hints into playable catalog
//! records.

mod deezer;

pub use deezer::{DeezerClient, DEEZER_API_BASE};

use crate::chat::{TrackRecord, TrackRequest};
use async_trait::async_trait;

/// An external music catalog that can resolve a track request to a record.
///
/// Implementations must be safely invocable concurrently for distinct
/// requests. A miss and a transport failure look the same to the caller:
/// `None`. There is no separate error path.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn lookup(&self, request: &TrackRequest) -> Option<TrackRecord>;
}
