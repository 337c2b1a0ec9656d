pub mod roster;
pub mod share;

pub use roster::RosterService;
