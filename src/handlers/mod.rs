pub mod assignments;
pub mod events;
pub mod members;
pub mod roster;
pub mod shared;
pub mod teams;
