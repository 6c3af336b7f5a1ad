//! # Domain Services

pub mod text_preview;
