pub mod assignment;
pub mod event;
pub mod member;
pub mod team;

// Re-export all repositories for easy importing
pub use assignment::AssignmentRepository;
pub use event::EventRepository;
pub use member::MemberRepository;
pub use team::TeamRepository;
