//! Fishbone structure and its one-pass builder

pub mod bone;
pub mod builder;

pub use bone::Bone;
pub use builder::{build, Fishbone};
