//! pulls reusable bits (open ports, address, hostnames) out of an nmap XML report
//! so they can be fed into the next command

pub mod error;
pub mod extract;
pub mod format;
pub mod input;
pub mod model;

pub use error::{Error, Result};
pub use input::Input;
pub use model::Run;

use tracing::debug;

/// what to print for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `-p21,22,...`, ready to be passed to nmap
    Ports,
    Address,
    /// comma-separated, without repeats
    Hostnames,
    /// multi-line overview of everything above
    Summary,
}

impl Mode {
    /// picks the mode from the flags; when several are set, ports win over address,
    /// address over hostnames
    pub fn from_flags(ports: bool, address: bool, hostnames: bool) -> Self {
        if ports {
            Mode::Ports
        } else if address {
            Mode::Address
        } else if hostnames {
            Mode::Hostnames
        } else {
            Mode::Summary
        }
    }
}

/// renders the requested piece of the report, without a trailing newline
pub fn render(run: &Run, mode: Mode) -> Result<String> {
    debug!("rendering {:?}", mode);
    let out = match mode {
        Mode::Ports => format::scanner_flag(&extract::ports(run)?),
        Mode::Address => extract::address(run)?.to_string(),
        Mode::Hostnames => format::join(&extract::hostnames(run)?, ", "),
        Mode::Summary => format::Summary {
            hostnames: extract::hostnames(run)?,
            address: extract::address(run)?,
            ports: extract::ports(run)?,
        }
        .to_string(),
    };
    Ok(out)
}

/// reads, parses and renders in one go; the report is parsed exactly once
pub fn process(input: &Input, mode: Mode) -> Result<String> {
    let run = Run::from_bytes(&input.read()?)?;
    render(&run, mode)
}
