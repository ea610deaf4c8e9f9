pub mod video;

pub use video::{NewVideoRecord, VideoRecord};
