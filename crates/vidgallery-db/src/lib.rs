//! Database repositories for the gallery metadata store.
//!
//! The metadata store is a single `videos` table; `VideoRepository` provides
//! insert and the two read paths the gallery needs (by id, all sorted by
//! upload date). The pool is constructed once at startup and injected.

pub mod video;

pub use video::VideoRepository;
