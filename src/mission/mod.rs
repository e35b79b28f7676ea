//! Mission catalog for soroquest.
//!
//! Missions are static configuration: story text, a code template, and an
//! ordered list of checks. A built-in catalog ships inside the binary as
//! embedded YAML; a user-supplied directory of mission files can extend or
//! override it.

mod catalog;
mod model;


pub use catalog::Catalog;
pub use model::{Difficulty, Mission};
