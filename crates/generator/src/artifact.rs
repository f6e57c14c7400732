//! Artifact identity and overwrite policy
//!
//! The policy table is plain data, checked without touching the filesystem:
//! business-logic-bearing artifacts are created once and then owned by the
//! developer, fully derived artifacts are rewritten on every run.

use corpc_gen_common::{GeneratorError, Result};
use std::fs;
use std::path::Path;

/// Overwrite behavior of one generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Never overwrite existing content; the developer owns the file after
    /// first generation
    CreateIfAbsent,
    /// Fully derived from the descriptor; must reflect the current protocol
    /// definition exactly, even at the cost of discarding prior content
    AlwaysRegenerate,
}

/// What happened to one artifact during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    SkippedExisting,
}

/// Every output unit of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    BusinessException,
    DispatcherHeader,
    DispatcherSource,
    MainEntry,
    InterfaceHeader,
    InterfaceSource,
    TestClient,
    RootCmake,
    ServerCmake,
    ClientCmake,
    ServiceConf,
}

impl ArtifactKind {
    /// Overwrite policy of this artifact kind
    pub fn policy(self) -> WritePolicy {
        match self {
            ArtifactKind::BusinessException
            | ArtifactKind::MainEntry
            | ArtifactKind::InterfaceHeader
            | ArtifactKind::InterfaceSource
            | ArtifactKind::TestClient
            | ArtifactKind::ServiceConf => WritePolicy::CreateIfAbsent,
            ArtifactKind::DispatcherHeader
            | ArtifactKind::DispatcherSource
            | ArtifactKind::RootCmake
            | ArtifactKind::ServerCmake
            | ArtifactKind::ClientCmake => WritePolicy::AlwaysRegenerate,
        }
    }

    /// Name of the template rendering this artifact
    pub fn template(self) -> &'static str {
        match self {
            ArtifactKind::BusinessException => "business_exception.h",
            ArtifactKind::DispatcherHeader => "server.h",
            ArtifactKind::DispatcherSource => "server.cpp",
            ArtifactKind::MainEntry => "main.cpp",
            ArtifactKind::InterfaceHeader => "interface.h",
            ArtifactKind::InterfaceSource => "interface.cpp",
            ArtifactKind::TestClient => "test_client.cpp",
            ArtifactKind::RootCmake => "cmake_root",
            ArtifactKind::ServerCmake => "cmake_server",
            ArtifactKind::ClientCmake => "cmake_client",
            ArtifactKind::ServiceConf => "conf.yml",
        }
    }
}

/// Write one artifact honoring its overwrite policy.
pub fn write_artifact(path: &Path, policy: WritePolicy, content: &str) -> Result<WriteOutcome> {
    if policy == WritePolicy::CreateIfAbsent && path.exists() {
        return Ok(WriteOutcome::SkippedExisting);
    }
    fs::write(path, content).map_err(|e| {
        GeneratorError::FileSystem(format!("failed to write [{}]: {}", path.display(), e))
    })?;
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_developer_owned_artifacts_are_create_if_absent() {
        for kind in [
            ArtifactKind::BusinessException,
            ArtifactKind::MainEntry,
            ArtifactKind::InterfaceHeader,
            ArtifactKind::InterfaceSource,
            ArtifactKind::TestClient,
            ArtifactKind::ServiceConf,
        ] {
            assert_eq!(kind.policy(), WritePolicy::CreateIfAbsent);
        }
    }

    #[test]
    fn test_derived_artifacts_are_always_regenerated() {
        for kind in [
            ArtifactKind::DispatcherHeader,
            ArtifactKind::DispatcherSource,
            ArtifactKind::RootCmake,
            ArtifactKind::ServerCmake,
            ArtifactKind::ClientCmake,
        ] {
            assert_eq!(kind.policy(), WritePolicy::AlwaysRegenerate);
        }
    }

    #[test]
    fn test_create_if_absent_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("owned.h");

        let first = write_artifact(&path, WritePolicy::CreateIfAbsent, "original").unwrap();
        assert_eq!(first, WriteOutcome::Written);

        let second = write_artifact(&path, WritePolicy::CreateIfAbsent, "regenerated").unwrap();
        assert_eq!(second, WriteOutcome::SkippedExisting);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_always_regenerate_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("derived.h");

        write_artifact(&path, WritePolicy::AlwaysRegenerate, "v1").unwrap();
        let second = write_artifact(&path, WritePolicy::AlwaysRegenerate, "v2").unwrap();
        assert_eq!(second, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }
}
