pub mod download;
pub mod pipeline;
pub mod share;
pub mod watermark;
