//! Factory registry and per-type entity factories.

use row2entity_core::{ConstructorSpec, Describe, Record, TypeDescriptor};
use tracing::debug;

use crate::{
    error::FactoryError, materializer::materialize, policy::ConstructorPolicy,
    resolver::resolve_constructor,
};

/// Registry handing out per-type entity factories bound to one
/// [`ConstructorPolicy`].
///
/// Purely a configuration composition point; holds no other state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructorFactory {
    policy: ConstructorPolicy,
}

impl ConstructorFactory {
    pub fn new(policy: ConstructorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConstructorPolicy {
        self.policy
    }

    /// Factory for materializing entities of type `E`.
    pub fn entity_factory<E: Describe>(&self) -> EntityFactory<E> {
        EntityFactory::new(E::descriptor(), self.policy)
    }
}

/// Resolver and materializer bound to one type descriptor and one policy.
///
/// Holds only immutable shared state, so one instance is safe for
/// unsynchronized concurrent use across records.
pub struct EntityFactory<E: 'static> {
    descriptor: &'static TypeDescriptor<E>,
    policy: ConstructorPolicy,
}

impl<E> std::fmt::Debug for EntityFactory<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityFactory")
            .field("entity", &self.descriptor.entity_name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<E> Clone for EntityFactory<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EntityFactory<E> {}

impl<E> EntityFactory<E> {
    pub fn new(descriptor: &'static TypeDescriptor<E>, policy: ConstructorPolicy) -> Self {
        Self { descriptor, policy }
    }

    pub fn descriptor(&self) -> &'static TypeDescriptor<E> {
        self.descriptor
    }

    pub fn policy(&self) -> ConstructorPolicy {
        self.policy
    }

    /// Select the constructor to materialize `record` with (see
    /// [`resolve_constructor`]).
    pub fn resolve_constructor(
        &self,
        record: &Record,
    ) -> Result<&'static ConstructorSpec<E>, FactoryError> {
        resolve_constructor(self.descriptor, record, self.policy)
    }

    /// Materialize one entity using an already-selected constructor (see
    /// [`materialize`]).
    pub fn materialize(
        &self,
        constructor: &ConstructorSpec<E>,
        record: &Record,
    ) -> Result<E, FactoryError> {
        materialize(constructor, self.descriptor, record)
    }

    /// Resolve and materialize in one step.
    pub fn create(&self, record: &Record) -> Result<E, FactoryError> {
        let constructor = self.resolve_constructor(record)?;
        self.materialize(constructor, record)
    }

    /// Materialize every record in input order, one entity per record.
    ///
    /// Not fault-tolerant: the first resolution or materialization failure
    /// aborts the batch and is returned verbatim; no partial results.
    pub fn materialize_all(&self, records: &[Record]) -> Result<Vec<E>, FactoryError> {
        let mut entities = Vec::with_capacity(records.len());
        for record in records {
            entities.push(self.create(record)?);
        }
        debug!(
            entity = self.descriptor.entity_name(),
            count = entities.len(),
            "materialized batch"
        );
        Ok(entities)
    }
}
