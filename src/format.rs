use std::{collections::HashSet, fmt, hash::Hash};

/// renders every item with `Display` and glues them with `sep`
pub fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<String>>()
        .join(sep)
}

/// port selection argument for a follow-up scan, e.g. `-p21,22,139,445`
pub fn scanner_flag(ports: &[u16]) -> String {
    format!("-p{}", join(ports, ","))
}

/// drops repeated items, keeping the first occurrence of each in its original place
pub fn dedup<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|i| seen.insert(i.clone()))
        .collect()
}

/// what gets printed when no single field was asked for
#[derive(Debug)]
pub struct Summary<'a> {
    pub hostnames: Vec<&'a str>,
    pub address: &'a str,
    pub ports: Vec<u16>,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[+] Hostname(s):\t{}", join(&self.hostnames, ", "))?;
        writeln!(f, "[+] Address:\t\t{}", self.address)?;
        write!(f, "[+] Ports:\t\t{}", join(&self.ports, ", "))
    }
}
