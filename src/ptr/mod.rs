//! PTR name magic: turns address literals and fully qualified reverse names
//! into record names relative to the reverse zone they are placed in.
//!
//! Suffix comparisons are literal and case-sensitive. Zone names are passed
//! without the trailing root dot.

mod classless;
mod error;
mod ipv4;
mod ipv6;
mod reverse;

pub use classless::{Delegation, match_classless};
pub use error::{PtrError, ReverseError};
pub use reverse::{AddressReverser, ArpaReverser, ipv4_to_ptr, ipv6_to_ptr};

const IPV4_ARPA: &str = ".in-addr.arpa";
const IPV6_ARPA: &str = ".ip6.arpa";

/// Normalizes PTR record names against a reverse zone.
#[derive(Debug, Default, Clone)]
pub struct PtrMagic<R = ArpaReverser> {
    reverser: R,
}

impl<R: AddressReverser> PtrMagic<R> {
    pub const fn new(reverser: R) -> Self {
        Self { reverser }
    }

    pub const fn reverser(&self) -> &R {
        &self.reverser
    }

    /// Returns the record name for `name` relative to `domain`.
    ///
    /// - `name` already ends in `.in-addr.arpa.` or `.ip6.arpa.`: the zone
    ///   suffix is stripped, or [`PtrError::WrongDomain`] is returned.
    /// - `domain` is an `in-addr.arpa` zone: IPv4 literals are reversed,
    ///   including classless (RFC 2317 / RFC 4183) zones.
    /// - `domain` is an `ip6.arpa` zone: IPv6 literals are reversed.
    /// - Anything else is returned unchanged.
    ///
    /// On error, [`PtrError::partial`] holds the string each path hands back.
    pub fn normalize(&self, name: &str, domain: &str) -> Result<String, PtrError> {
        if name.ends_with(".in-addr.arpa.") || name.ends_with(".ip6.arpa.") {
            return name
                .strip_suffix(&format!(".{domain}."))
                .map(ToString::to_string)
                .ok_or_else(|| PtrError::WrongDomain {
                    name: name.to_string(),
                    domain: domain.to_string(),
                });
        }

        if domain.ends_with(IPV4_ARPA) {
            ipv4::resolve_v4(&self.reverser, name, domain)
        } else if domain.ends_with(IPV6_ARPA) {
            ipv6::resolve_v6(&self.reverser, name, domain)
        } else {
            Ok(name.to_string())
        }
    }
}

/// [`PtrMagic::normalize`] with the built-in [`ArpaReverser`].
pub fn ptr_name_magic(name: &str, domain: &str) -> Result<String, PtrError> {
    PtrMagic::<ArpaReverser>::default().normalize(name, domain)
}

// Reversers may hand back rooted names; suffix arithmetic works on unrooted ones.
fn strip_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RootedReverser;

    impl AddressReverser for RootedReverser {
        fn reverse(&self, cidr: &str) -> Result<String, ReverseError> {
            ArpaReverser.reverse(cidr).map(|name| format!("{name}."))
        }
    }

    struct FailingReverser;

    impl AddressReverser for FailingReverser {
        fn reverse(&self, cidr: &str) -> Result<String, ReverseError> {
            Err(ReverseError::InvalidCidr(cidr.to_string()))
        }
    }

    #[test]
    fn test_non_reverse_zone_passthrough() {
        let names = [
            "1.2.3.4",
            "2001:db8::1",
            "www",
            "1.2.3.4.in-addr.arpa",
            "",
        ];
        let domains = ["example.com", "in-addr.arpa", "arpa", "ip6.arpa.example"];
        for domain in domains {
            for name in names {
                assert_eq!(ptr_name_magic(name, domain).unwrap(), name, "{name} in {domain}");
            }
        }
    }

    #[test]
    fn test_fully_qualified_in_zone() {
        assert_eq!(
            ptr_name_magic("1.2.3.4.in-addr.arpa.", "3.4.in-addr.arpa").unwrap(),
            "1.2"
        );
        assert_eq!(
            ptr_name_magic("1.0.0.2.ip6.arpa.", "0.2.ip6.arpa").unwrap(),
            "1.0"
        );
    }

    #[test]
    fn test_fully_qualified_wrong_zone() {
        let err = ptr_name_magic("1.2.3.4.in-addr.arpa.", "9.9.in-addr.arpa").unwrap_err();
        assert!(matches!(err, PtrError::WrongDomain { .. }));
        assert_eq!(err.partial(), "1.2.3.4.in-addr.arpa.");
    }

    #[test]
    fn test_fully_qualified_any_zone_suffix() {
        // The fully qualified branch runs before the zone type is looked at
        let err = ptr_name_magic("1.2.3.4.in-addr.arpa.", "example.com").unwrap_err();
        assert!(matches!(err, PtrError::WrongDomain { .. }));
    }

    #[test]
    fn test_hostname_passthrough() {
        assert_eq!(
            ptr_name_magic("hostname-not-an-ip", "20.172.in-addr.arpa").unwrap(),
            "hostname-not-an-ip"
        );
        assert_eq!(
            ptr_name_magic("hostname-not-an-ip", "8.b.d.0.1.0.0.2.ip6.arpa").unwrap(),
            "hostname-not-an-ip"
        );
    }

    #[test]
    fn test_classless_zone() {
        let zone = "128/27.18.20.172.in-addr.arpa";
        assert_eq!(match_classless("172.20.18.131".parse().unwrap(), zone), 1);
        assert_eq!(ptr_name_magic("172.20.18.131", zone).unwrap(), "131");

        assert_eq!(match_classless("172.20.18.64".parse().unwrap(), zone), 0);
        let err = ptr_name_magic("172.20.18.64", zone).unwrap_err();
        assert!(matches!(err, PtrError::WrongIpv4Domain { .. }));
        assert_eq!(err.partial(), "");
    }

    #[test]
    fn test_ipv6_zone() {
        let zone = "8.b.d.0.1.0.0.2.ip6.arpa";
        let relative = ptr_name_magic("2001:db8::1", zone).unwrap();
        assert_eq!(
            relative,
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0"
        );

        let err = ptr_name_magic("2001:db8::1", "9.b.d.0.1.0.0.2.ip6.arpa").unwrap_err();
        assert!(matches!(err, PtrError::WrongIpv6Domain { .. }));
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let cases = [
            ("172.20.18.27", "20.172.in-addr.arpa"),
            ("172.20.18.131", "128/27.18.20.172.in-addr.arpa"),
            ("172.20.18.131", "16-12.172.in-addr.arpa"),
            ("2001:db8::1", "8.b.d.0.1.0.0.2.ip6.arpa"),
        ];
        for (name, domain) in cases {
            let once = ptr_name_magic(name, domain).unwrap();
            let twice = ptr_name_magic(&once, domain).unwrap();
            assert_eq!(once, twice, "{name} in {domain}");
        }
    }

    #[test]
    fn test_round_trip_reconstructs_reverse_name() {
        let addresses = ["10.0.0.1", "172.20.18.27", "192.168.1.254", "8.8.4.4"];
        for address in addresses {
            let ip: std::net::Ipv4Addr = address.parse().unwrap();
            let rev = ipv4_to_ptr(ip);
            for labels in 1..4 {
                let domain = rev.splitn(labels + 1, '.').last().unwrap();
                let relative = ptr_name_magic(address, domain).unwrap();
                assert_eq!(format!("{relative}.{domain}"), rev);
            }
        }
    }

    #[test]
    fn test_rooted_reverser_agrees() {
        let rooted = PtrMagic::new(RootedReverser);
        let plain = PtrMagic::new(ArpaReverser);
        let cases = [
            ("172.20.18.27", "20.172.in-addr.arpa"),
            ("172.20.18.131", "128-27.18.20.172.in-addr.arpa"),
            ("172.20.18.64", "128/27.18.20.172.in-addr.arpa"),
            ("2001:db8::1", "8.b.d.0.1.0.0.2.ip6.arpa"),
            ("2001:db8::1", "0.0.0.0.ip6.arpa"),
        ];
        for (name, domain) in cases {
            assert_eq!(
                rooted.normalize(name, domain),
                plain.normalize(name, domain),
                "{name} in {domain}"
            );
        }
    }

    #[test]
    fn test_reverser_failure_propagates() {
        let magic = PtrMagic::new(FailingReverser);
        let err = magic.normalize("172.20.18.27", "20.172.in-addr.arpa").unwrap_err();
        assert!(matches!(
            err,
            PtrError::ReverseConversion {
                source: ReverseError::InvalidCidr(_),
                ..
            }
        ));
        assert_eq!(err.partial(), "172.20.18.27");

        let err = magic.normalize("2001:db8::1", "8.b.d.0.1.0.0.2.ip6.arpa").unwrap_err();
        assert!(matches!(err, PtrError::ReverseConversion { .. }));

        // Passthrough never reaches the reverser
        assert_eq!(magic.normalize("www", "20.172.in-addr.arpa").unwrap(), "www");
    }

    #[test]
    fn test_case_sensitive_suffixes() {
        assert_eq!(
            ptr_name_magic("172.20.18.27", "20.172.IN-ADDR.ARPA").unwrap(),
            "172.20.18.27"
        );
        assert!(ptr_name_magic("172.20.18.27", "20.172.in-addr.arpa").is_ok());
    }
}
