pub mod anime;
pub mod comic;
mod raw_stream_map;

pub use raw_stream_map::RawStreamMap;
