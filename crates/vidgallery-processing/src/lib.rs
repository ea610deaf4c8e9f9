//! Video ingestion: the pipeline that turns a just-uploaded blob into a
//! queryable, thumbnailed gallery record, plus its two supporting pieces,
//! the scratch-file lifecycle manager and the ffmpeg frame-extractor adapter.

pub mod frame;
pub mod pipeline;
pub mod scratch;

pub use frame::{FfmpegFrameExtractor, FrameExtractor};
pub use pipeline::{IngestPipeline, MetadataStore, PipelineConfig, VideoReference};
pub use scratch::{ScratchArea, ScratchFile};
