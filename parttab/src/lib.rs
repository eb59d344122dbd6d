pub mod env;
pub mod error;
pub mod factory;
pub mod hook;
pub mod partition;

pub use env::{BuildEnv, FlashImage};
pub use error::Error;
pub use factory::{FACTORY_BINARY_OPTION, resolve_factory_image};
pub use hook::{
    FACTORY_PARTITION_NAME, PARTITIONS_BOARD_CONFIG, add_factory_to_extra_images, upload_requested,
};
pub use partition::{Partition, PartitionTable};
