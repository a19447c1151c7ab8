/// Host label that designates the zone apex.
pub const APEX: &str = "@";

/// Build the fully-qualified record name from the zone domain and a host
/// label.
///
/// `@` selects the apex. A label equal to the domain itself is treated as
/// already qualified; joining it would yield "example.com.example.com".
/// Callers should still prefer the `@` sentinel for the apex rather than
/// relying on that equality fallback.
pub fn resolve(domain: &str, host: &str) -> String {
    if host == APEX {
        return domain.to_string();
    }
    if host == domain {
        return domain.to_string();
    }
    format!("{host}.{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apex_sentinel_yields_domain() {
        assert_eq!(resolve("example.com", "@"), "example.com");
    }

    #[test]
    fn label_is_prefixed_to_domain() {
        assert_eq!(resolve("example.com", "home"), "home.example.com");
        assert_eq!(resolve("example.com", "a.b"), "a.b.example.com");
    }

    #[test]
    fn label_equal_to_domain_is_not_doubled() {
        assert_eq!(resolve("example.com", "example.com"), "example.com");
    }
}
