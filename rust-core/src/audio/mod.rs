//! Sample buffers and buffer-level operations

pub mod buffer;
pub mod mixer;

pub use buffer::SampleBuffer;
pub use mixer::mix;
