pub mod json3;
pub mod srt;
pub mod time;
