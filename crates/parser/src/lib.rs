//! Binding-header parsing for corpc-gen
//!
//! This crate recovers the rpc method surface of a service from the
//! `<project>.pb.h` binding header emitted by the protocol compiler. The
//! header is semi-regular generated text we have no grammar for, so recovery
//! is textual: [`binding`] locates the service block and captures one raw
//! declaration per rpc, [`signature`] turns each raw declaration into a
//! structured [`MethodDescriptor`].
//!
//! Exactly one service declaration per header is supported; headers with
//! multiple services are rejected by convention, not detected.
//!
//! [`MethodDescriptor`]: corpc_gen_common::MethodDescriptor

mod binding;
mod signature;

pub use binding::{scan_binding, RawBinding};
pub use signature::analyze_signature;

use corpc_gen_common::{GeneratorError, Result, ServiceDescriptor};
use std::collections::HashSet;

/// Parse the full text of a service binding header into a [`ServiceDescriptor`].
///
/// Runs the two recovery stages back to back and checks the cross-method
/// invariant: method names must be unique within a service, since they seed
/// generated file and class names. The first malformed declaration aborts the
/// whole parse; there is no partial recovery.
pub fn parse_binding_header(text: &str) -> Result<ServiceDescriptor> {
    let raw = binding::scan_binding(text)?;

    let mut methods = Vec::with_capacity(raw.declarations.len());
    let mut seen = HashSet::new();
    for declaration in &raw.declarations {
        let descriptor = signature::analyze_signature(declaration)?;
        if !seen.insert(descriptor.method_name.clone()) {
            return Err(GeneratorError::MalformedBindingHeader(format!(
                "duplicate rpc method [{}] in service [{}]",
                descriptor.method_name, raw.service_name
            )));
        }
        methods.push(descriptor);
    }

    Ok(ServiceDescriptor {
        name: raw.service_name,
        methods,
    })
}
