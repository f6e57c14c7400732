//! Generated project directory layout
//!
//! Every path of the generated tree is computed here. The source subtree is
//! nested under the project name so that generated includes resolve as
//! `"<project>/pb/<project>.pb.h"` with the project root on the include path.

use corpc_gen_common::{GeneratorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of one generated project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    project_root: PathBuf,
    project_name: String,
}

impl ProjectLayout {
    pub fn new(output_dir: &Path, project_name: &str) -> Self {
        Self {
            project_root: output_dir.join(project_name),
            project_name: project_name.to_string(),
        }
    }

    /// `<out>/<project>`
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn conf_dir(&self) -> PathBuf {
        self.project_root.join("conf")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.project_root.join("log")
    }

    pub fn test_client_dir(&self) -> PathBuf {
        self.project_root.join("test_client")
    }

    /// `<out>/<project>/<project>`, the C++ source subtree
    pub fn src_dir(&self) -> PathBuf {
        self.project_root.join(&self.project_name)
    }

    pub fn pb_dir(&self) -> PathBuf {
        self.src_dir().join("pb")
    }

    pub fn service_dir(&self) -> PathBuf {
        self.src_dir().join("service")
    }

    pub fn interface_dir(&self) -> PathBuf {
        self.src_dir().join("interface")
    }

    pub fn common_dir(&self) -> PathBuf {
        self.src_dir().join("common")
    }

    /// `<project>.pb.h`, the binding header produced by the protocol compiler
    pub fn binding_header(&self) -> PathBuf {
        self.pb_dir().join(format!("{}.pb.h", self.project_name))
    }

    /// `conf/<project>.yml`, the generated service configuration
    pub fn conf_file(&self) -> PathBuf {
        self.conf_dir().join(format!("{}.yml", self.project_name))
    }

    /// Create every project directory, idempotently.
    pub fn create_all(&self) -> Result<()> {
        let dirs = [
            self.project_root.clone(),
            self.conf_dir(),
            self.log_dir(),
            self.test_client_dir(),
            self.src_dir(),
            self.pb_dir(),
            self.service_dir(),
            self.interface_dir(),
            self.common_dir(),
        ];
        for dir in dirs {
            fs::create_dir_all(&dir).map_err(|e| {
                GeneratorError::FileSystem(format!(
                    "failed to create directory [{}]: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new(Path::new("/tmp/out"), "order_server");
        assert_eq!(layout.project_root(), Path::new("/tmp/out/order_server"));
        assert_eq!(
            layout.pb_dir(),
            Path::new("/tmp/out/order_server/order_server/pb")
        );
        assert_eq!(
            layout.binding_header(),
            Path::new("/tmp/out/order_server/order_server/pb/order_server.pb.h")
        );
        assert_eq!(
            layout.conf_file(),
            Path::new("/tmp/out/order_server/conf/order_server.yml")
        );
        assert_eq!(
            layout.test_client_dir(),
            Path::new("/tmp/out/order_server/test_client")
        );
    }

    #[test]
    fn test_create_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path(), "order_server");
        layout.create_all().unwrap();
        layout.create_all().unwrap();
        assert!(layout.interface_dir().is_dir());
        assert!(layout.log_dir().is_dir());
        assert!(layout.common_dir().is_dir());
    }
}
