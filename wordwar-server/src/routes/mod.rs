//! HTTP route handlers

pub mod board;
pub mod letters;
pub mod play;
pub mod status;
