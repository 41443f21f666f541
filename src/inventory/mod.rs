//! Package inventories
//!
//! Two independent sources of dependency data:
//! - freeze: what pip reports as installed
//! - requirements: what requirements.txt declares
//!
//! The two are not reconciled against each other.

mod freeze;
mod requirements;

pub use freeze::{parse_freeze, to_dependencies};
pub use requirements::{
    find_project_root, load_requirements, parse_requirements, to_requirements, MANIFEST_FILENAME,
};
