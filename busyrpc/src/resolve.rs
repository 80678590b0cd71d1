use std::str::FromStr;

use rpc_pb::sd::Host;

use super::Resolver;

////////////////////////////////////////// StringResolver //////////////////////////////////////////

/// A StringResolver provides round-robin resolution from a set of hosts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StringResolver {
    hosts: Vec<Host>,
    index: usize,
}

impl StringResolver {
    /// Create a new string resolver from the connect string.
    pub fn new(connect_str: &str) -> Result<Self, rpc_pb::Error> {
        let mut hosts = Vec::new();
        for host in connect_str.split(',') {
            hosts.push(host.parse::<Host>()?);
        }
        let index = hosts.len();
        Ok(Self { hosts, index })
    }
}

impl FromStr for StringResolver {
    type Err = rpc_pb::Error;

    fn from_str(s: &str) -> Result<StringResolver, rpc_pb::Error> {
        Self::new(s)
    }
}

impl Resolver for StringResolver {
    fn resolve(&mut self) -> Result<Host, rpc_pb::Error> {
        self.index += 1;
        if self.index >= self.hosts.len() {
            self.index = 0;
        }
        Ok(self.hosts[self.index].clone())
    }
}

impl std::fmt::Display for StringResolver {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        let mut connect = String::new();
        for host in self.hosts.iter() {
            if !connect.is_empty() {
                connect += ",";
            }
            connect += &host.host_id().human_readable();
            connect += ";";
            connect += host.connect();
        }
        write!(fmt, "{}", connect)
    }
}

/////////////////////////////////////////////// tests //////////////////////////////////////////////
