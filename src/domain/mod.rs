//! Domain logic - version string shapes independent of git operations

pub mod describe;
pub mod version;

pub use describe::DescribeOutput;
pub use version::VersionTriple;
