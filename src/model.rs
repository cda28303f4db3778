//! typed view of the part of an nmap `-oX` report this tool reads:
//! `nmaprun` → `host` → `address` / `hostnames` / `ports`

use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

const ROOT_TAG: &str = "nmaprun";
const MAC_ADDRESS: &str = "mac";

/// one scanner invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub version: String,
    pub hosts: Vec<Host>,
}

/// one scanned target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    pub addresses: Vec<Address>,
    pub hostnames: Vec<Hostname>,
    pub ports: Vec<Port>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub addr: String,
    /// `addrtype`: ipv4, ipv6 or mac
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hostname {
    pub name: String,
    /// `type`: user, PTR
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Port {
    pub protocol: String,
    pub id: u16,
    pub service: Option<Service>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
}

impl Run {
    /// decodes a whole report held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::parse(std::str::from_utf8(bytes)?)
    }

    /// parses output of nmap -oX ...
    ///
    /// Non-well-formed XML is an error. A well-formed document with an unexpected
    /// shape is not: missing elements and attributes come out empty, and a root
    /// other than `nmaprun` yields a run without hosts.
    pub fn parse(content: &str) -> Result<Self> {
        let doc = Document::parse_with_options(
            content,
            ParsingOptions {
                allow_dtd: true,
                ..ParsingOptions::default()
            },
        )?;

        let root = doc.root_element();
        if !root.has_tag_name(ROOT_TAG) {
            warn!(
                "root element is <{}>, not <{}>, no hosts will be read",
                root.tag_name().name(),
                ROOT_TAG
            );
            return Ok(Run::default());
        }

        let hosts = root
            .children()
            .filter(|n| n.has_tag_name("host"))
            .map(Host::from_node)
            .collect::<Result<Vec<_>>>()?;
        debug!("parsed {} host(s)", hosts.len());

        Ok(Run {
            version: attribute(root, "version"),
            hosts,
        })
    }
}

impl Host {
    fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let addresses = node
            .children()
            .filter(|n| n.has_tag_name("address"))
            .map(|n| Address {
                addr: attribute(n, "addr"),
                kind: attribute(n, "addrtype"),
            })
            .collect();

        let hostnames = node
            .children()
            .filter(|n| n.has_tag_name("hostnames"))
            .flat_map(|n| n.children().filter(|h| h.has_tag_name("hostname")))
            .map(|n| Hostname {
                name: attribute(n, "name"),
                kind: attribute(n, "type"),
            })
            .collect();

        // there is also, at least extraports tag
        let ports = node
            .children()
            .filter(|n| n.has_tag_name("ports"))
            .flat_map(|n| n.children().filter(|p| p.has_tag_name("port")))
            .map(Port::from_node)
            .collect::<Result<Vec<_>>>()?;

        Ok(Host {
            addresses,
            hostnames,
            ports,
        })
    }

    /// the host's network address: the first non-MAC one if there is any
    pub fn address(&self) -> &str {
        self.addresses
            .iter()
            .find(|a| a.kind != MAC_ADDRESS)
            .or_else(|| self.addresses.first())
            .map(|a| a.addr.as_str())
            .unwrap_or_default()
    }
}

impl Port {
    fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let id: u16 = match node.attribute("portid") {
            Some(value) => value.trim().parse().map_err(|_| Error::InvalidPort {
                value: value.to_string(),
            })?,
            None => 0,
        };
        let service = node
            .children()
            .find(|n| n.has_tag_name("service"))
            .map(|n| Service {
                name: attribute(n, "name"),
            });
        trace!("port {}/{}", id, node.attribute("protocol").unwrap_or("?"));

        Ok(Port {
            protocol: attribute(node, "protocol"),
            id,
            service,
        })
    }
}

fn attribute(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}
