use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("no factory image found")]
    NoFactoryImage,
    #[error("no offset found for partition: {0}")]
    NoPartitionOffset(String),
}
