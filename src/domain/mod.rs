//! Domain logic - pure version rules independent of where tags come from

pub mod kind;
pub mod selector;
pub mod version;

pub use kind::{BumpKind, Request};
pub use selector::{collect_versions, latest, sort_versions};
pub use version::Version;
