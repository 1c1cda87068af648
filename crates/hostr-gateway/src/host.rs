//! Host header parsing.
//!
//! The gateway only serves hosts of the form `<label>.<domain>[:port]`.
//! A host outside the configured domain means the serving layer routed a
//! request here that it does not own, which is a deployment fault.

use crate::error::GatewayError;

/// Extract the subdomain label preceding `.<domain>` from a Host header.
///
/// Strips one trailing `:port` segment. The label may itself contain dots
/// (`a.b.example.com` yields `a.b`).
pub fn subdomain_label<'a>(host: &'a str, domain: &str) -> Result<&'a str, GatewayError> {
    let bare = match host.rsplit_once(':') {
        Some((h, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => h,
        _ => host,
    };

    bare.strip_suffix(domain)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|label| !label.is_empty())
        .ok_or_else(|| GatewayError::HostMismatch {
            host: host.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_subdomain() {
        assert_eq!(subdomain_label("abc.example.com", "example.com").unwrap(), "abc");
    }

    #[test]
    fn port_stripped() {
        assert_eq!(
            subdomain_label("abc.example.com:8443", "example.com").unwrap(),
            "abc"
        );
    }

    #[test]
    fn nested_label_kept_whole() {
        assert_eq!(
            subdomain_label("a.b.example.com", "example.com").unwrap(),
            "a.b"
        );
    }

    #[test]
    fn foreign_host_is_config_fault() {
        let err = subdomain_label("evil.com", "example.com").unwrap_err();
        assert!(matches!(err, GatewayError::HostMismatch { .. }));
    }

    #[test]
    fn bare_domain_is_config_fault() {
        assert!(subdomain_label("example.com", "example.com").is_err());
    }

    #[test]
    fn missing_separator_dot_is_config_fault() {
        // "abcexample.com" ends with the domain but not with ".example.com".
        assert!(subdomain_label("abcexample.com", "example.com").is_err());
    }

    #[test]
    fn empty_label_is_config_fault() {
        assert!(subdomain_label(".example.com", "example.com").is_err());
    }

    #[test]
    fn empty_host_is_config_fault() {
        assert!(subdomain_label("", "example.com").is_err());
    }

    #[test]
    fn non_numeric_port_segment_not_stripped() {
        // Only a numeric trailing segment is treated as a port.
        assert!(subdomain_label("abc.example.com:x", "example.com").is_err());
    }
}
