//! Common types and utilities for corpc-gen
//!
//! This crate contains the shared descriptor types, the error taxonomy and
//! the identifier casing helpers used across the parser, generator and CLI
//! components.

pub mod names;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during project generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid command line arguments: {0}")]
    InvalidCliArguments(String),

    #[error("Malformed binding header: {0}")]
    MalformedBindingHeader(String),

    #[error("No rpc methods found: {0}")]
    NoMethodsFound(String),

    #[error("Malformed rpc method signature: {0}")]
    MalformedMethodSignature(String),

    #[error("Protocol compilation failed: {0}")]
    ProtocolCompilationFailed(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Structured record of one rpc method recovered from the binding header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Raw rpc method identifier (e.g. `queryOrder`)
    pub method_name: String,
    /// Bare request payload type name
    pub request_type: String,
    /// Bare response payload type name
    pub response_type: String,
    /// UpperCamel method name plus `Interface`, the per-method stub class
    pub interface_class_name: String,
    /// lower_snake method name, used for header/source/test file naming
    pub interface_file_base_name: String,
}

impl MethodDescriptor {
    /// Build a descriptor from the raw method name and payload types.
    ///
    /// The interface class and file names are always derived here, so they
    /// stay mutually consistent with `method_name`.
    pub fn new(method_name: &str, request_type: &str, response_type: &str) -> Self {
        Self {
            method_name: method_name.to_string(),
            request_type: request_type.to_string(),
            response_type: response_type.to_string(),
            interface_class_name: format!("{}Interface", names::to_upper_camel(method_name)),
            interface_file_base_name: names::to_lower_snake(method_name),
        }
    }
}

/// Method surface of one rpc service, in declaration order
///
/// The method order equals declaration order in the binding header; it drives
/// generated file and build-target ordering, so appending one rpc to the
/// protocol definition yields an append-only diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name recovered from the virtual destructor declaration
    pub name: String,
    /// Rpc methods in source declaration order
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// `<ServiceName>Impl`, the generated dispatcher class
    pub fn impl_class_name(&self) -> String {
        format!("{}Impl", names::to_upper_camel(&self.name))
    }

    /// `<ServiceName>_Stub`, the protobuf-generated client stub class
    pub fn stub_class_name(&self) -> String {
        format!("{}_Stub", self.name)
    }
}
