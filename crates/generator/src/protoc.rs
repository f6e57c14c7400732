//! Protocol compiler invocation
//!
//! The input `.proto` is copied into the project `pb/` directory before
//! compilation so the generated pair lands next to it and the binding header
//! keeps its include-relative name.

use crate::ProjectLayout;
use corpc_gen_common::{GeneratorError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Copy the proto file into `pb/` and run `protoc --cpp_out=.` against it.
///
/// A compiler that cannot be spawned or exits non-zero is a fatal
/// [`GeneratorError::ProtocolCompilationFailed`]; there is no fallback.
pub fn compile_proto(proto_file: &Path, layout: &ProjectLayout) -> Result<()> {
    let file_name = proto_file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GeneratorError::ProtocolCompilationFailed(format!(
                "invalid proto file name: [{}]",
                proto_file.display()
            ))
        })?;

    let pb_dir = layout.pb_dir();
    let target = pb_dir.join(file_name);
    fs::copy(proto_file, &target).map_err(|e| {
        GeneratorError::FileSystem(format!(
            "failed to copy [{}] to [{}]: {}",
            proto_file.display(),
            target.display(),
            e
        ))
    })?;

    let status = Command::new("protoc")
        .arg("--cpp_out=.")
        .arg(file_name)
        .current_dir(&pb_dir)
        .status()
        .map_err(|e| {
            GeneratorError::ProtocolCompilationFailed(format!(
                "failed to run protoc on [{}]: {}",
                file_name, e
            ))
        })?;

    if !status.success() {
        return Err(GeneratorError::ProtocolCompilationFailed(format!(
            "protoc --cpp_out=. {} exited with {}",
            file_name, status
        )));
    }

    Ok(())
}
