//! Blob store client.
//!
//! The gallery keeps video and thumbnail bytes in an external blob store that
//! returns a durable public URL per uploaded object. The `BlobStorage` trait
//! is the seam the ingestion pipeline works against; `HttpBlobStorage` is the
//! production implementation over a token-authenticated HTTP API.

pub mod blob;
pub mod traits;

pub use blob::HttpBlobStorage;
pub use traits::{BlobStorage, StorageError, StorageResult};
