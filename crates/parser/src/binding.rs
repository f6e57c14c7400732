//! Binding-header scan
//!
//! The service block inside a binding header is anchored by the last virtual
//! destructor declaration; every rpc after it shows up as one `virtual void`
//! declaration terminated by a literal `);`. The scan alternates between two
//! states: outside a declaration it looks for the entry sigil, inside one it
//! looks for the terminator.

use corpc_gen_common::{GeneratorError, Result};

/// Anchor of the service method block
const DESTRUCTOR_ANCHOR: &str = "virtual ~";
/// Declaration entry sigil
const DECL_START: &str = "virtual void";
/// Declaration completion predicate: a declaration is complete at the first
/// terminator after its entry sigil
const DECL_TERMINATOR: &str = ");";

/// Service name and ordered raw rpc declarations of one binding header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBinding {
    pub service_name: String,
    /// Raw declaration text, inclusive of the `);` terminator, in source order
    pub declarations: Vec<String>,
}

/// Scan binding-header text for the service name and its raw rpc declarations.
///
/// Anchoring at the *last* `virtual ~` in the text tolerates arbitrary content
/// before the service block, such as forward-declared message classes with
/// their own destructors.
pub fn scan_binding(text: &str) -> Result<RawBinding> {
    let anchor = text.rfind(DESTRUCTOR_ANCHOR).ok_or_else(|| {
        GeneratorError::MalformedBindingHeader(
            "no virtual destructor declaration found".to_string(),
        )
    })?;

    let after_sigil = anchor + DESTRUCTOR_ANCHOR.len();
    let paren = text[after_sigil..].find('(').ok_or_else(|| {
        GeneratorError::MalformedBindingHeader(
            "virtual destructor declaration has no parameter list".to_string(),
        )
    })?;
    let service_name = text[after_sigil..after_sigil + paren].trim().to_string();
    if service_name.is_empty() {
        return Err(GeneratorError::MalformedBindingHeader(
            "empty service name in destructor declaration".to_string(),
        ));
    }

    let declarations = scan_declarations(&text[after_sigil + paren..])?;
    if declarations.is_empty() {
        return Err(GeneratorError::NoMethodsFound(format!(
            "service [{}] declares no rpc methods",
            service_name
        )));
    }

    Ok(RawBinding {
        service_name,
        declarations,
    })
}

/// Strictly forward, single pass per declaration. A declaration that never
/// reaches its terminator is an error, not a truncated capture.
fn scan_declarations(block: &str) -> Result<Vec<String>> {
    let mut declarations = Vec::new();
    let mut rest = block;

    while let Some(start) = rest.find(DECL_START) {
        let decl = &rest[start..];
        let end = decl.find(DECL_TERMINATOR).ok_or_else(|| {
            GeneratorError::MalformedBindingHeader(format!(
                "unterminated rpc declaration: [{}]",
                preview(decl)
            ))
        })?;
        let complete = end + DECL_TERMINATOR.len();
        declarations.push(decl[..complete].to_string());
        rest = &decl[complete..];
    }

    Ok(declarations)
}

/// First line of a declaration, for diagnostics.
fn preview(decl: &str) -> &str {
    decl.lines().next().unwrap_or(decl).trim_end()
}
