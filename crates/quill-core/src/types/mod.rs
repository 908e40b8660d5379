//! Shared types used across Quill crates.

pub mod collections;
pub mod taxonomy;
