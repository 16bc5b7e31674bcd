use regex::Regex;
use std::{net::Ipv4Addr, sync::LazyLock};
use strum_macros::Display;

use super::error::PtrError;

// Anchored at the end only: the leftmost digit run before the separator wins.
static RFC2317_SLASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3})/(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.in-addr\.arpa$").unwrap()
});
static RFC4183_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3})-(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.in-addr\.arpa$").unwrap()
});
static RFC4183_TWO_OCTET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3})-(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.in-addr\.arpa$").unwrap()
});
static RFC4183_ONE_OCTET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3})-(\d{1,3})\.(\d{1,3})\.in-addr\.arpa$").unwrap()
});

/// Classless `in-addr.arpa` delegation naming schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Delegation {
    #[strum(to_string = "RFC 2317 (F/M.X.Y.Z)")]
    Slash,
    #[strum(to_string = "RFC 4183 /25-/32 (F-M.X.Y.Z)")]
    DashFull,
    #[strum(to_string = "RFC 4183 /17-/23 (F-M.Y.Z)")]
    DashTwoOctet,
    #[strum(to_string = "RFC 4183 /9-/15 (F-M.Z)")]
    DashOneOctet,
}

impl Delegation {
    /// Evaluation order; the first grammar that accepts the address wins.
    pub const ALL: [Self; 4] = [
        Self::Slash,
        Self::DashFull,
        Self::DashTwoOctet,
        Self::DashOneOctet,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Slash => &*RFC2317_SLASH,
            Self::DashFull => &*RFC4183_FULL,
            Self::DashTwoOctet => &*RFC4183_TWO_OCTET,
            Self::DashOneOctet => &*RFC4183_ONE_OCTET,
        }
    }

    /// Number of leading reverse name labels that make up the record name.
    pub const fn octets(self) -> usize {
        match self {
            Self::Slash | Self::DashFull => 1,
            Self::DashTwoOctet => 2,
            Self::DashOneOctet => 3,
        }
    }

    /// Which delegation grammar, if any, the zone name is written in.
    pub fn detect(domain: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|delegation| delegation.pattern().is_match(domain))
    }

    // IP:          172.20.18.27
    //              A   B  C  D
    // Domain:      128/27.18.20.172.in-addr.arpa
    //              F   M  X  Y  Z
    // The zone octets are the address octets reversed, and masking the
    // address by M must land on F in the first octet the zone leaves open.
    fn accepts(self, ip: Ipv4Addr, domain: &str) -> Result<bool, PtrError> {
        let Some(captures) = self.pattern().captures(domain) else {
            return Ok(false);
        };
        let fields = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|field| parse_field(field.as_str()))
            .collect::<Result<Vec<u8>, _>>()?;

        let (f, prefix) = (fields[0], fields[1]);
        let Some(masked) = mask(ip, prefix) else {
            return Ok(false);
        };
        let [a, b, c, _] = ip.octets();

        let accepted = match (self, &fields[2..]) {
            (Self::Slash | Self::DashFull, &[x, y, z]) => {
                a == z && b == y && c == x && masked == Ipv4Addr::new(a, b, c, f)
            }
            (Self::DashTwoOctet, &[y, z]) => {
                a == z && b == y && masked == Ipv4Addr::new(a, b, f, 0)
            }
            (Self::DashOneOctet, &[z]) => a == z && masked == Ipv4Addr::new(a, f, 0, 0),
            _ => false,
        };
        Ok(accepted)
    }
}

/// Returns how many leading labels of the address's reverse name form its
/// record name in a classless delegated `domain`, or 0 when the domain is not
/// a classless zone containing `ip`.
pub fn match_classless(ip: Ipv4Addr, domain: &str) -> usize {
    Delegation::ALL
        .into_iter()
        .find(|delegation| delegation.accepts(ip, domain).unwrap_or(false))
        .map_or(0, Delegation::octets)
}

fn parse_field(field: &str) -> Result<u8, PtrError> {
    field
        .parse()
        .map_err(|_| PtrError::InvalidDelegationField(format!("{field} is not a byte")))
}

fn mask(ip: Ipv4Addr, prefix: u8) -> Option<Ipv4Addr> {
    if prefix > 32 {
        return None;
    }
    let mask = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    };
    Some(Ipv4Addr::from(u32::from(ip) & mask))
}
