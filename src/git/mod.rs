//! Git describe abstraction
//!
//! Version resolution only ever asks one question of version control: the
//! describe line for a working copy. The [Repository] trait keeps that seam
//! narrow so resolution logic can be exercised against [MockRepository]
//! without touching a real repository; [Git2Repository] is the libgit2-backed
//! implementation the CLI uses.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Source of describe output for a working copy
pub trait Repository {
    /// Run the describe query: nearest tag, commit distance, abbreviated
    /// object id and dirty marker, falling back to a bare object id when no
    /// tags exist (see [crate::domain::describe::DESCRIBE_COMMAND]).
    fn describe(&self) -> Result<String>;
}
