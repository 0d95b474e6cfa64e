//! Use cases (application services)
//!
//! - [`submit_question`] — one question, one POST, view feedback
//! - [`fill_template`] — prompt templates written into the input
//! - [`load_frames`] — frames loaded on first dialog display

pub mod fill_template;
pub mod load_frames;
pub mod submit_question;
