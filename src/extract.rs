//! single values pulled from the first host of a parsed report
//!
//! Every extractor fails with [`Error::NoHost`] on a report without hosts.

use tracing::debug;

use crate::{
    error::{Error, Result},
    format,
    model::{Host, Run},
};

/// the only host this tool looks at
pub fn first_host(run: &Run) -> Result<&Host> {
    let host = run.hosts.first().ok_or(Error::NoHost)?;
    if run.hosts.len() > 1 {
        debug!(
            "report has {} hosts, ignoring all but the first",
            run.hosts.len()
        );
    }
    Ok(host)
}

/// port ids in document order
pub fn ports(run: &Run) -> Result<Vec<u16>> {
    Ok(first_host(run)?.ports.iter().map(|p| p.id).collect())
}

pub fn address(run: &Run) -> Result<&str> {
    Ok(first_host(run)?.address())
}

/// hostnames without repeats, in order of first appearance
pub fn hostnames(run: &Run) -> Result<Vec<&str>> {
    let host = first_host(run)?;
    Ok(format::dedup(host.hostnames.iter().map(|h| h.name.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, Hostname, Port};

    fn host(addr: &str, names: &[&str], ports: &[u16]) -> Host {
        Host {
            addresses: vec![Address {
                addr: addr.into(),
                kind: "ipv4".into(),
            }],
            hostnames: names
                .iter()
                .map(|n| Hostname {
                    name: n.to_string(),
                    kind: "user".into(),
                })
                .collect(),
            ports: ports
                .iter()
                .map(|&id| Port {
                    protocol: "tcp".into(),
                    id,
                    service: None,
                })
                .collect(),
        }
    }

    fn run(hosts: Vec<Host>) -> Run {
        Run {
            version: "7.80".into(),
            hosts,
        }
    }

    #[test]
    fn reads_first_host_only() {
        let run = run(vec![
            host("10.10.10.3", &["lame.htb", "lame.htb"], &[21, 22, 139, 445]),
            host("10.10.10.4", &["other.htb"], &[80]),
        ]);
        assert_eq!(ports(&run).unwrap(), vec![21, 22, 139, 445]);
        assert_eq!(address(&run).unwrap(), "10.10.10.3");
        assert_eq!(hostnames(&run).unwrap(), vec!["lame.htb"]);
    }

    #[test]
    fn hostnames_keep_document_order() {
        let run = run(vec![host("1.1.1.1", &["zeta", "alpha", "zeta", "beta"], &[])]);
        assert_eq!(hostnames(&run).unwrap(), vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn host_without_ports() {
        let run = run(vec![host("1.1.1.1", &[], &[])]);
        assert!(ports(&run).unwrap().is_empty());
        assert!(hostnames(&run).unwrap().is_empty());
    }

    #[test]
    fn no_host_is_an_error() {
        let run = run(vec![]);
        assert!(matches!(first_host(&run), Err(Error::NoHost)));
        assert!(matches!(ports(&run), Err(Error::NoHost)));
        assert!(matches!(address(&run), Err(Error::NoHost)));
        assert!(matches!(hostnames(&run), Err(Error::NoHost)));
    }
}
