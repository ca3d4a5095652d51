/*
[INPUT]:  Public API exports for taskbrief-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod classify;
pub mod compose;
pub mod config;
pub mod interaction;
pub mod pipeline;
pub mod server;

// Re-export main types for convenience
pub use classify::{Buckets, anchor_date, classify};
pub use compose::{Digest, compose};
pub use config::BotConfig;
pub use interaction::CommentContext;
pub use server::AppState;
