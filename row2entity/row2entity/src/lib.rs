//! Object-materialization engine: construct and populate typed entities from
//! tabular records.
//!
//! For each record, the engine selects the most specific constructor the
//! record's non-null fields can satisfy ([`resolve_constructor`]), invokes it
//! with positionally-bound arguments, and backfills leftover fields through
//! property setters with typed coercion ([`materialize`]). Target types
//! describe themselves through hand-registered
//! [`TypeDescriptor`](row2entity_core::TypeDescriptor)s; no runtime
//! reflection is involved.

mod coerce;
mod error;
mod factory;
mod materializer;
mod policy;
mod resolver;

pub use coerce::coerce_value;
pub use error::FactoryError;
pub use factory::{ConstructorFactory, EntityFactory};
pub use materializer::materialize;
pub use policy::ConstructorPolicy;
pub use resolver::resolve_constructor;
pub use row2entity_core as core;
