use std::net::{Ipv4Addr, Ipv6Addr};

/// Address family of the record under management. Selects both the DNS
/// record type (A or AAAA) and the IP version used for API transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn record_type(self) -> &'static str {
        match self {
            AddressFamily::V4 => "A",
            AddressFamily::V6 => "AAAA",
        }
    }

    fn in_charset(self, c: char) -> bool {
        match self {
            AddressFamily::V4 => c.is_ascii_digit() || c == '.',
            AddressFamily::V6 => c.is_ascii_hexdigit() || c == ':',
        }
    }

    fn parses(self, s: &str) -> bool {
        match self {
            AddressFamily::V4 => s.parse::<Ipv4Addr>().is_ok(),
            AddressFamily::V6 => s.parse::<Ipv6Addr>().is_ok(),
        }
    }

    /// Pull the first substring of `content` that reads as an address of
    /// this family, tolerating surrounding punctuation or whitespace.
    /// `None` means no usable address was published, which callers treat
    /// as "no known remote value" rather than an error.
    pub fn extract(self, content: &str) -> Option<String> {
        content
            .split(|c: char| !self.in_charset(c))
            .find(|s| !s.is_empty() && self.parses(s))
            .map(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_types() {
        assert_eq!(AddressFamily::V4.record_type(), "A");
        assert_eq!(AddressFamily::V6.record_type(), "AAAA");
    }

    #[test]
    fn extracts_plain_ipv4() {
        assert_eq!(
            AddressFamily::V4.extract("203.0.113.5"),
            Some("203.0.113.5".to_string())
        );
    }

    #[test]
    fn extracts_ipv4_with_surrounding_noise() {
        assert_eq!(
            AddressFamily::V4.extract(" \"203.0.113.5\"\n"),
            Some("203.0.113.5".to_string())
        );
        assert_eq!(
            AddressFamily::V4.extract("content: 198.51.100.7,"),
            Some("198.51.100.7".to_string())
        );
    }

    #[test]
    fn extracts_ipv6() {
        assert_eq!(
            AddressFamily::V6.extract("2001:db8::1"),
            Some("2001:db8::1".to_string())
        );
        assert_eq!(
            AddressFamily::V6.extract("\"2001:db8:0:1::2\""),
            Some("2001:db8:0:1::2".to_string())
        );
    }

    #[test]
    fn family_mismatch_yields_none() {
        assert_eq!(AddressFamily::V4.extract("2001:db8::1"), None);
        assert_eq!(AddressFamily::V6.extract("203.0.113.5"), None);
    }

    #[test]
    fn garbage_yields_none() {
        assert_eq!(AddressFamily::V4.extract("not an address"), None);
        assert_eq!(AddressFamily::V4.extract("999.999.999.999"), None);
        assert_eq!(AddressFamily::V4.extract(""), None);
        // hex words alone are not an IPv6 address
        assert_eq!(AddressFamily::V6.extract("dead beef"), None);
    }
}
