use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use tracing::info;

use crate::error::{Error, Result};

/// where the report comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

impl Input {
    /// `-` and a missing argument both mean standard input
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") | Some("-") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        }
    }

    /// reads the whole input into memory; the handle is closed before returning
    pub fn read(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            Input::File(path) => fs::read(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?,
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf).map_err(Error::Stdin)?;
                buf
            }
        };
        info!("read {} bytes from {}", bytes.len(), self);
        Ok(bytes)
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::File(path) => write!(f, "{}", path.display()),
            Input::Stdin => write!(f, "<stdin>"),
        }
    }
}
