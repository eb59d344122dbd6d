use std::path::PathBuf;

use crate::env::BuildEnv;
use crate::error::Error;
use crate::factory::resolve_factory_image;
use crate::partition::PartitionTable;

/// Name of the partition whose offset the factory image is flashed at.
pub const FACTORY_PARTITION_NAME: &str = "factory";

/// Board configuration key holding the partition table's relative path.
pub const PARTITIONS_BOARD_CONFIG: &str = "build.partitions";

/// The hook only acts when the build tool was asked to upload.
pub fn upload_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| arg.as_ref() == "upload")
}

/// Register the factory image with the extra flash images, at the offset the
/// partition table assigns to the factory partition.
///
/// Missing inputs degrade before the gates (absent image resolves to None,
/// absent table loads empty); the gates themselves are fatal. An offset of
/// `0` counts as not found.
pub fn add_factory_to_extra_images(env: &mut BuildEnv) -> Result<(), Error> {
    let factory_image = resolve_factory_image(env);
    let table = PartitionTable::load(partition_table_path(env));

    let Some(factory_image) = factory_image else {
        return Err(Error::NoFactoryImage);
    };

    let factory_offset = table
        .find(FACTORY_PARTITION_NAME)
        .map(|p| p.offset.as_str())
        .unwrap_or("");
    if factory_offset.is_empty() || factory_offset == "0" {
        return Err(Error::NoPartitionOffset(FACTORY_PARTITION_NAME.to_string()));
    }

    log::debug!(
        "Registering factory image {} at offset {}",
        factory_image.display(),
        factory_offset
    );
    env.append_flash_extra_image(factory_offset, &factory_image.to_string_lossy());
    Ok(())
}

fn partition_table_path(env: &BuildEnv) -> PathBuf {
    let configured = env.board_config(PARTITIONS_BOARD_CONFIG);
    if configured.is_empty() {
        PathBuf::new()
    } else {
        env.project_dir().join(configured)
    }
}
