//! Domain values read from the repository - plain data independent of git2

pub mod commit;
pub mod tag;

pub use commit::Commit;
pub use tag::Tag;
