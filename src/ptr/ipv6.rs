use std::net::{IpAddr, Ipv6Addr};

use super::{error::PtrError, reverse::AddressReverser, strip_root};

/// There is no classless delegation for `ip6.arpa`; the address either sits
/// under `domain` or it does not.
pub fn resolve_v6<R: AddressReverser + ?Sized>(
    reverser: &R,
    name: &str,
    domain: &str,
) -> Result<String, PtrError> {
    let Some(ip) = parse_ipv6(name) else {
        return Ok(name.to_string());
    };

    let rev = reverser
        .reverse(&format!("{ip}/128"))
        .map_err(|source| PtrError::ReverseConversion {
            name: name.to_string(),
            source,
        })?;
    let rev = strip_root(&rev);

    match rev.strip_suffix(&format!(".{domain}")) {
        Some(relative) => Ok(relative.to_string()),
        None => Err(PtrError::WrongIpv6Domain {
            name: name.to_string(),
            domain: domain.to_string(),
            trimmed: rev.to_string(),
        }),
    }
}

fn parse_ipv6(name: &str) -> Option<Ipv6Addr> {
    if !name.contains(':') {
        return None;
    }
    match name.parse::<IpAddr>().ok()? {
        IpAddr::V6(ip) => Some(ip),
        IpAddr::V4(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ptr::reverse::ArpaReverser;

    const ZONE: &str = "8.b.d.0.1.0.0.2.ip6.arpa";

    #[test]
    fn test_full_suffix_match() {
        let result = resolve_v6(&ArpaReverser, "2001:db8::1", ZONE);
        assert_eq!(
            result.unwrap(),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0"
        );
    }

    #[test]
    fn test_expanded_literal() {
        let result = resolve_v6(&ArpaReverser, "2001:0db8:0000:0000:0000:0000:0000:00ff", ZONE);
        assert_eq!(
            result.unwrap(),
            "f.f.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0"
        );
    }

    #[test]
    fn test_wrong_domain_keeps_reverse_name() {
        let err = resolve_v6(&ArpaReverser, "2001:db9::1", ZONE).unwrap_err();
        assert!(matches!(err, PtrError::WrongIpv6Domain { .. }));
        assert_eq!(
            err.partial(),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.9.b.d.0.1.0.0.2.ip6.arpa"
        );
    }

    #[test]
    fn test_passthrough() {
        let names = ["hostname-not-an-ip", "192.168.1.1", "::zz", "host:name"];
        for name in names {
            assert_eq!(resolve_v6(&ArpaReverser, name, ZONE).unwrap(), name);
        }
    }
}
