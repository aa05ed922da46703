//! Sample project-item domain used to exercise the `row2entity` engine.
//!
//! [`ProjectItem`] registers a full type descriptor (five constructors, six
//! writable properties, two computed properties, and the
//! [`KnowledgeCategory`] enum table) through the
//! [`Describe`](row2entity_core::Describe) trait.

mod enums;
mod project_item;

pub use enums::{ItemDataType, KnowledgeCategory, UnknownEnumValue};
pub use project_item::{ProjectItem, ProjectItemError};
