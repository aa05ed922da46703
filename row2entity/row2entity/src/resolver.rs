//! Constructor selection under nullable-aware matching rules.

use std::cmp::Ordering;

use row2entity_core::{ConstructorSpec, Record, TypeDescriptor};
use tracing::debug;

use crate::{error::FactoryError, policy::ConstructorPolicy};

/// Select the constructor to materialize `record` with.
///
/// Under [`ConstructorPolicy::PreferParameterless`], a zero-arity constructor
/// is returned unconditionally if the type has one. Otherwise the qualifying
/// candidate with the most parameters wins, where a candidate qualifies iff
/// every non-nullable parameter has a same-named (case-insensitive) non-null
/// field in the record.
///
/// Ties at maximal arity break deterministically: the candidate whose
/// ASCII-lowercased parameter-name sequence sorts lexicographically smallest
/// wins, independent of registration order.
pub fn resolve_constructor<'a, E>(
    descriptor: &'a TypeDescriptor<E>,
    record: &Record,
    policy: ConstructorPolicy,
) -> Result<&'a ConstructorSpec<E>, FactoryError> {
    if policy == ConstructorPolicy::PreferParameterless {
        if let Some(constructor) = descriptor.parameterless() {
            debug!(
                entity = descriptor.entity_name(),
                "shortcut to parameterless constructor"
            );
            return Ok(constructor);
        }
    }

    let non_null: Vec<&str> = record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(column, _)| column.name())
        .collect();

    let mut best: Option<&ConstructorSpec<E>> = None;
    for candidate in descriptor.constructors() {
        if !qualifies(candidate, &non_null) {
            continue;
        }
        best = Some(match best {
            None => candidate,
            Some(current) => pick(current, candidate),
        });
    }

    match best {
        Some(constructor) => {
            debug!(
                entity = descriptor.entity_name(),
                arity = constructor.arity(),
                "resolved constructor"
            );
            Ok(constructor)
        }
        None => Err(FactoryError::NoMatchingConstructor {
            entity: descriptor.entity_name(),
        }),
    }
}

/// Every non-nullable parameter must be covered by a non-null field of the
/// same (case-insensitive) name; nullable parameters impose no requirement.
fn qualifies<E>(candidate: &ConstructorSpec<E>, non_null: &[&str]) -> bool {
    candidate.params().iter().all(|param| {
        param.is_nullable()
            || non_null
                .iter()
                .any(|name| name.eq_ignore_ascii_case(param.name()))
    })
}

fn pick<'a, E>(
    current: &'a ConstructorSpec<E>,
    candidate: &'a ConstructorSpec<E>,
) -> &'a ConstructorSpec<E> {
    match candidate
        .arity()
        .cmp(&current.arity())
        .then_with(|| name_sequence_cmp(current, candidate))
    {
        Ordering::Greater => candidate,
        _ => current,
    }
}

/// Lexicographic comparison of ASCII-lowercased parameter-name sequences;
/// `Greater` means `current` sorts after `candidate` (so `candidate` wins).
fn name_sequence_cmp<E>(current: &ConstructorSpec<E>, candidate: &ConstructorSpec<E>) -> Ordering {
    let current_names = current
        .params()
        .iter()
        .map(|p| p.name().to_ascii_lowercase());
    let candidate_names = candidate
        .params()
        .iter()
        .map(|p| p.name().to_ascii_lowercase());
    current_names.cmp(candidate_names)
}
