use crate::core::record::AddressFamily;
use crate::error::Error;

pub const USAGE: &str = "\
Usage: cloudflare-ddns <domain> <host> <api-token> <ip> <force> <verbose> <family>

  domain     zone domain name, e.g. example.com
  host       record label within the zone, or @ for the zone apex
  api-token  Cloudflare API token with DNS edit permission for the zone
  ip         candidate IP address for the record
  force      1 to replace the record even when it already matches
  verbose    1 to enable debug diagnostics
  family     0 for IPv4 (A record), 1 for IPv6 (AAAA record)";

#[derive(Clone, Debug)]
pub struct Config {
    pub domain: String,
    pub host: String,
    pub api_token: String,
    pub candidate_ip: String,
    pub force: bool,
    pub verbose: bool,
    pub family: AddressFamily,
}

impl Config {
    /// Validate the seven positional invocation parameters. No network or
    /// filesystem access happens here.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() != 7 {
            return Err(Error::InvalidArguments(format!(
                "expected 7 arguments, got {}",
                args.len()
            )));
        }

        for (name, value) in [
            ("domain", &args[0]),
            ("host", &args[1]),
            ("api-token", &args[2]),
            ("ip", &args[3]),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidArguments(format!("{name} must not be empty")));
            }
        }

        // Flags are boolean-as-integer: the literal "1" is true, anything
        // else false. The family flag doubles as the record type selector.
        let family = if args[6] == "1" {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        };

        if family.extract(&args[3]).is_none() {
            return Err(Error::InvalidArguments(format!(
                "ip '{}' does not look like an {} address",
                args[3],
                family.record_type()
            )));
        }

        Ok(Config {
            domain: args[0].clone(),
            host: args[1].clone(),
            api_token: args[2].clone(),
            candidate_ip: args[3].clone(),
            force: args[4] == "1",
            verbose: args[5] == "1",
            family,
        })
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for Config {
        fn default() -> Self {
            Config {
                domain: String::from("example.com"),
                host: String::from("@"),
                api_token: String::from("test-token"),
                candidate_ip: String::from("203.0.113.5"),
                force: false,
                verbose: false,
                family: AddressFamily::V4,
            }
        }
    }
}
