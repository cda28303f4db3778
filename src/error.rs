use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("can't read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("can't parse an XML document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("port id {value:?} is not a valid port number")]
    InvalidPort { value: String },

    #[error("no host data found")]
    NoHost,
}
