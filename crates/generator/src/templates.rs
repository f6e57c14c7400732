//! Template loading and management

use corpc_gen_common::{GeneratorError, Result};
use tera::Tera;

/// Load all embedded templates into one engine instance.
///
/// Template names match [`crate::ArtifactKind::template`]; the bodies live
/// under `templates/` and are compiled into the binary.
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    let sources = [
        (
            "business_exception.h",
            include_str!("../templates/business_exception.h.tera"),
        ),
        ("server.h", include_str!("../templates/server.h.tera")),
        ("server.cpp", include_str!("../templates/server.cpp.tera")),
        ("main.cpp", include_str!("../templates/main.cpp.tera")),
        ("interface.h", include_str!("../templates/interface.h.tera")),
        (
            "interface.cpp",
            include_str!("../templates/interface.cpp.tera"),
        ),
        (
            "test_client.cpp",
            include_str!("../templates/test_client.cpp.tera"),
        ),
        (
            "cmake_root",
            include_str!("../templates/CMakeLists_root.txt.tera"),
        ),
        (
            "cmake_server",
            include_str!("../templates/CMakeLists_server.txt.tera"),
        ),
        (
            "cmake_client",
            include_str!("../templates/CMakeLists_client.txt.tera"),
        ),
        ("conf.yml", include_str!("../templates/conf.yml.tera")),
    ];

    for (name, source) in sources {
        tera.add_raw_template(name, source).map_err(|e| {
            GeneratorError::FileSystem(format!("failed to load template [{}]: {}", name, e))
        })?;
    }

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_load() {
        let tera = load_templates().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"server.cpp"));
        assert!(names.contains(&"cmake_client"));
    }
}
