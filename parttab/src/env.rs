use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An (offset, path) pair flashed alongside the primary firmware image.
/// The offset keeps its source spelling, e.g. `0x10000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashImage {
    pub offset: String,
    pub path: String,
}

/// Narrow model of the host build environment. The hook reads the project
/// root, the active environment name, one project option and one board
/// configuration key, and appends to the extra-flash-images list; nothing
/// else of the host environment is visible here.
#[derive(Debug)]
pub struct BuildEnv {
    project_dir: PathBuf,
    env_name: String,
    options: HashMap<String, String>,
    board_config: HashMap<String, String>,
    extra_flash_images: Vec<FlashImage>,
}

impl BuildEnv {
    pub fn new<P: Into<PathBuf>>(project_dir: P, env_name: &str) -> Self {
        Self {
            project_dir: project_dir.into(),
            env_name: env_name.to_string(),
            options: HashMap::new(),
            board_config: HashMap::new(),
            extra_flash_images: Vec::new(),
        }
    }

    pub fn with_option(mut self, name: &str, value: &str) -> Self {
        self.options.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_board_config(mut self, key: &str, value: &str) -> Self {
        self.board_config.insert(key.to_string(), value.to_string());
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    /// Project-scoped option, empty string when unset.
    pub fn project_option(&self, name: &str) -> &str {
        self.options.get(name).map(String::as_str).unwrap_or("")
    }

    /// Board configuration value, empty string when unset.
    pub fn board_config(&self, key: &str) -> &str {
        self.board_config.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn append_flash_extra_image(&mut self, offset: &str, path: &str) {
        self.extra_flash_images.push(FlashImage {
            offset: offset.to_string(),
            path: path.to_string(),
        });
    }

    pub fn flash_extra_images(&self) -> &[FlashImage] {
        &self.extra_flash_images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_option_is_empty() {
        let env = BuildEnv::new("/tmp/project", "esp32dev");
        assert_eq!(env.project_option("custom_factory_binary"), "");
        assert_eq!(env.board_config("build.partitions"), "");
    }

    #[test]
    fn builder_sets_option_and_board_config() {
        let env = BuildEnv::new("/tmp/project", "esp32dev")
            .with_option("custom_factory_binary", "build/factory.bin")
            .with_board_config("build.partitions", "partitions.csv");
        assert_eq!(env.project_option("custom_factory_binary"), "build/factory.bin");
        assert_eq!(env.board_config("build.partitions"), "partitions.csv");
        assert_eq!(env.env_name(), "esp32dev");
    }

    #[test]
    fn appended_images_are_kept_in_order() {
        let mut env = BuildEnv::new("/tmp/project", "esp32dev");
        env.append_flash_extra_image("0x10000", "a.bin");
        env.append_flash_extra_image("0x20000", "b.bin");
        let images = env.flash_extra_images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].offset, "0x10000");
        assert_eq!(images[1].path, "b.bin");
    }
}
