pub(crate) mod macros;

pub mod assignment;
pub mod event;
pub mod member;
pub mod state;
pub mod team;
pub mod validation;

// Re-export all models for easy importing
pub use assignment::*;
pub use event::*;
pub use member::*;
pub use state::*;
pub use team::*;
