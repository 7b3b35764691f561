//! Concrete repository implementations.

pub mod log;
pub mod source;
pub mod user;

pub use log::LogEntryRepository;
pub use source::SourceRepository;
pub use user::UserRepository;
