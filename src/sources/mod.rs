//! Read-only queries over the process environment, filesystem and git.
//!
//! Everything here degrades to a default instead of failing, except the
//! working directory lookup.

pub mod cwd;
pub mod env;
pub mod git;
pub mod lock;

pub use cwd::*;
pub use env::*;
pub use git::*;
pub use lock::*;
