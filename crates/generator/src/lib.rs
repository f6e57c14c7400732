//! Artifact generation for corpc projects
//!
//! This crate transforms a parsed [`ServiceDescriptor`] into the generated
//! project tree: per-method interface stubs, the service dispatcher, client
//! test harnesses, the service configuration and CMake build fragments.
//!
//! Generation is strictly sequential and idempotent. Re-running against an
//! unchanged descriptor reproduces every [`WritePolicy::AlwaysRegenerate`]
//! artifact byte for byte and leaves every [`WritePolicy::CreateIfAbsent`]
//! artifact untouched, so the tool can be re-run as the protocol definition
//! evolves without clobbering hand-written business logic.

mod artifact;
mod layout;
mod protoc;
mod templates;

pub use artifact::{ArtifactKind, WriteOutcome, WritePolicy};
pub use layout::ProjectLayout;
pub use protoc::compile_proto;

use artifact::write_artifact;
use corpc_gen_common::{GeneratorError, MethodDescriptor, Result, ServiceDescriptor};
use std::path::PathBuf;
use tera::Tera;

/// Server endpoint baked into the generated configuration and test clients
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub host: String,
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 39999,
        }
    }
}

/// One artifact written (or deliberately skipped) during a run
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Project generator
///
/// Walks the artifact set in a fixed sequence, rendering each artifact via
/// template substitution and honoring its overwrite policy. Per-method
/// artifacts are emitted strictly in descriptor order, which equals
/// declaration order in the binding header, so appending one rpc to the
/// protocol definition produces an append-only diff.
pub struct ProjectGenerator {
    service: ServiceDescriptor,
    project_name: String,
    options: ServerOptions,
    tera: Tera,
}

impl ProjectGenerator {
    pub fn new(
        project_name: &str,
        service: ServiceDescriptor,
        options: ServerOptions,
    ) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            service,
            project_name: project_name.to_string(),
            options,
            tera,
        })
    }

    /// Generate the full artifact set under `layout`.
    ///
    /// Each step completes all of its writes before the next begins. On
    /// failure, artifacts already written stay in place; every artifact is
    /// individually idempotent to re-create on the next run.
    pub fn generate(&self, layout: &ProjectLayout) -> Result<Vec<GeneratedFile>> {
        let mut report = Vec::new();
        self.generate_conf(layout, &mut report)?;
        self.generate_exception(layout, &mut report)?;
        self.generate_dispatcher(layout, &mut report)?;
        self.generate_main(layout, &mut report)?;
        self.generate_interfaces(layout, &mut report)?;
        self.generate_cmake(layout, &mut report)?;
        Ok(report)
    }

    /// `conf/<project>.yml`, owned by the operator after first generation
    fn generate_conf(&self, layout: &ProjectLayout, report: &mut Vec<GeneratedFile>) -> Result<()> {
        let content = self.render(ArtifactKind::ServiceConf, &self.base_context())?;
        self.emit(ArtifactKind::ServiceConf, layout.conf_file(), content, report)
    }

    /// `common/business_exception.h`, the developer-owned exception base
    fn generate_exception(
        &self,
        layout: &ProjectLayout,
        report: &mut Vec<GeneratedFile>,
    ) -> Result<()> {
        let content = self.render(ArtifactKind::BusinessException, &self.base_context())?;
        let path = layout.common_dir().join("business_exception.h");
        self.emit(ArtifactKind::BusinessException, path, content, report)
    }

    /// `service/<project>.{h,cpp}`: one declared/defined method per rpc, each
    /// body delegating to its interface class
    fn generate_dispatcher(
        &self,
        layout: &ProjectLayout,
        report: &mut Vec<GeneratedFile>,
    ) -> Result<()> {
        let context = self.base_context();

        let header = self.render(ArtifactKind::DispatcherHeader, &context)?;
        let header_path = layout
            .service_dir()
            .join(format!("{}.h", self.project_name));
        self.emit(ArtifactKind::DispatcherHeader, header_path, header, report)?;

        let source = self.render(ArtifactKind::DispatcherSource, &context)?;
        let source_path = layout
            .service_dir()
            .join(format!("{}.cpp", self.project_name));
        self.emit(ArtifactKind::DispatcherSource, source_path, source, report)
    }

    /// `<project>/main.cpp`, the process entry point
    fn generate_main(&self, layout: &ProjectLayout, report: &mut Vec<GeneratedFile>) -> Result<()> {
        let content = self.render(ArtifactKind::MainEntry, &self.base_context())?;
        let path = layout.src_dir().join("main.cpp");
        self.emit(ArtifactKind::MainEntry, path, content, report)
    }

    /// Per-method interface header/source and client test harness, in
    /// descriptor order
    fn generate_interfaces(
        &self,
        layout: &ProjectLayout,
        report: &mut Vec<GeneratedFile>,
    ) -> Result<()> {
        for method in &self.service.methods {
            let mut context = self.base_context();
            context.insert("method", method);

            let header = self.render(ArtifactKind::InterfaceHeader, &context)?;
            let header_path = layout
                .interface_dir()
                .join(format!("{}.h", method.interface_file_base_name));
            self.emit(ArtifactKind::InterfaceHeader, header_path, header, report)?;

            let source = self.render(ArtifactKind::InterfaceSource, &context)?;
            let source_path = layout
                .interface_dir()
                .join(format!("{}.cpp", method.interface_file_base_name));
            self.emit(ArtifactKind::InterfaceSource, source_path, source, report)?;

            let client = self.render(ArtifactKind::TestClient, &context)?;
            let client_path = layout
                .test_client_dir()
                .join(test_client_file_name(method));
            self.emit(ArtifactKind::TestClient, client_path, client, report)?;
        }
        Ok(())
    }

    /// Root, server and client build fragments; the client fragment declares
    /// one buildable target per rpc, in descriptor order
    fn generate_cmake(
        &self,
        layout: &ProjectLayout,
        report: &mut Vec<GeneratedFile>,
    ) -> Result<()> {
        let context = self.base_context();

        let root = self.render(ArtifactKind::RootCmake, &context)?;
        let root_path = layout.project_root().join("CMakeLists.txt");
        self.emit(ArtifactKind::RootCmake, root_path, root, report)?;

        let server = self.render(ArtifactKind::ServerCmake, &context)?;
        let server_path = layout.src_dir().join("CMakeLists.txt");
        self.emit(ArtifactKind::ServerCmake, server_path, server, report)?;

        let client = self.render(ArtifactKind::ClientCmake, &context)?;
        let client_path = layout.test_client_dir().join("CMakeLists.txt");
        self.emit(ArtifactKind::ClientCmake, client_path, client, report)
    }

    fn render(&self, kind: ArtifactKind, context: &tera::Context) -> Result<String> {
        self.tera.render(kind.template(), context).map_err(|e| {
            GeneratorError::FileSystem(format!(
                "failed to render template [{}]: {}",
                kind.template(),
                e
            ))
        })
    }

    fn emit(
        &self,
        kind: ArtifactKind,
        path: PathBuf,
        content: String,
        report: &mut Vec<GeneratedFile>,
    ) -> Result<()> {
        let outcome = write_artifact(&path, kind.policy(), &content)?;
        report.push(GeneratedFile {
            kind,
            path,
            outcome,
        });
        Ok(())
    }

    /// Template context shared by every artifact of this run
    fn base_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("project_name", &self.project_name);
        context.insert("service_name", &self.service.name);
        context.insert("class_name", &self.service.impl_class_name());
        context.insert("stub_class", &self.service.stub_class_name());
        context.insert("host", &self.options.host);
        context.insert("port", &self.options.port);
        context.insert("methods", &self.service.methods);
        context
    }
}

/// `test_<base>_client.cpp`, the per-method client harness file name
fn test_client_file_name(method: &MethodDescriptor) -> String {
    format!("test_{}_client.cpp", method.interface_file_base_name)
}
