// src/generate/inherit.rs
//! Base-class method resolution for service mocks.
//!
//! Pure: reads a phase-1 snapshot of the service collection and computes
//! the transitive method set; it never mutates descriptors in place.

use crate::diagnostics::Diagnostics;
use crate::error::MockError;
use crate::mock::MockDescriptor;
use std::collections::HashSet;

/// Walks the extends chain upward and returns the descriptor's methods
/// followed by each ancestor's, nearest first, deduplicated order-stably
/// (first occurrence wins).
///
/// A missing parent or a cycle stops the walk with a warning; whatever was
/// gathered up to that point is kept.
#[must_use]
pub fn resolve_methods(
    descriptor: &MockDescriptor,
    services: &[MockDescriptor],
    diags: &mut Diagnostics,
) -> Vec<String> {
    let mut methods = descriptor.methods.clone();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(descriptor.mock_class_name.clone());

    let mut next = descriptor.base_mock.clone();
    while let Some(base) = next {
        if !visited.insert(base.clone()) {
            diags.warn(MockError::CyclicInheritance { class: base }.to_string());
            break;
        }
        let Some(parent) = services.iter().find(|m| m.mock_class_name == base) else {
            diags.warn(format!(
                "Cannot find parent class of {}. Methods from parent class will not be included in mock.",
                descriptor.class_name
            ));
            break;
        };
        methods.extend(parent.methods.iter().cloned());
        next = parent.base_mock.clone();
    }

    dedup_stable(methods)
}

fn dedup_stable(methods: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    methods
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}
