//! Lazily loaded embedded frames

pub mod deferred;
