//! Transport seam between orchestration and the network
//!
//! Dashboard controllers talk to the backend through this trait so they can
//! be exercised against an in-memory fake in tests.

use crate::ClientResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// API transport trait
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// Raw byte download (report blobs)
    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>>;
}
