use std::path::PathBuf;

use crate::env::BuildEnv;

/// Project option naming the factory binary, relative to the project root.
pub const FACTORY_BINARY_OPTION: &str = "custom_factory_binary";

/// Resolve the configured factory binary against the project root. An unset
/// option or a missing file resolves to None with a diagnostic; whether that
/// is fatal is the caller's decision.
pub fn resolve_factory_image(env: &BuildEnv) -> Option<PathBuf> {
    let configured = env.project_option(FACTORY_BINARY_OPTION);
    if configured.is_empty() {
        log::warn!(
            "No factory binary specified for environment: {}!",
            env.env_name()
        );
        return None;
    }

    let factory_image = env.project_dir().join(configured);
    if factory_image.is_file() {
        Some(factory_image)
    } else {
        log::warn!("Factory binary: {} does not exist!", factory_image.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("parttab-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn unset_option_resolves_to_none() {
        let env = BuildEnv::new("/nonexistent", "esp32dev");
        assert!(resolve_factory_image(&env).is_none());
    }

    #[test]
    fn missing_file_resolves_to_none() {
        let dir = scratch_dir("factory-missing");
        let env = BuildEnv::new(&dir, "esp32dev")
            .with_option(FACTORY_BINARY_OPTION, "build/factory.bin");
        assert!(resolve_factory_image(&env).is_none());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn existing_file_resolves_to_joined_path() {
        let dir = scratch_dir("factory-exists");
        fs::create_dir_all(dir.join("build")).unwrap();
        fs::write(dir.join("build/factory.bin"), b"firmware").unwrap();

        let env = BuildEnv::new(&dir, "esp32dev")
            .with_option(FACTORY_BINARY_OPTION, "build/factory.bin");
        let resolved = resolve_factory_image(&env).unwrap();
        assert_eq!(resolved, dir.join("build/factory.bin"));
        fs::remove_dir_all(&dir).ok();
    }
}
