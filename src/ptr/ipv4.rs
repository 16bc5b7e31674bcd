use std::net::{IpAddr, Ipv4Addr};

use super::{
    classless::match_classless, error::PtrError, reverse::AddressReverser, strip_root,
};

pub fn resolve_v4<R: AddressReverser + ?Sized>(
    reverser: &R,
    name: &str,
    domain: &str,
) -> Result<String, PtrError> {
    // Not an IPv4 literal, leave it alone
    let Some(ip) = parse_ipv4(name) else {
        return Ok(name.to_string());
    };

    let rev = reverser
        .reverse(&format!("{ip}/32"))
        .map_err(|source| PtrError::ReverseConversion {
            name: name.to_string(),
            source,
        })?;
    let rev = strip_root(&rev);

    if let Some(relative) = rev.strip_suffix(&format!(".{domain}")) {
        return Ok(relative.to_string());
    }

    let octets = match_classless(ip, domain);
    if octets > 0 {
        return Ok(rev.split('.').take(octets).collect::<Vec<_>>().join("."));
    }

    Err(PtrError::WrongIpv4Domain {
        name: name.to_string(),
        domain: domain.to_string(),
    })
}

// IPv4-mapped IPv6 literals are written with a dotted quad and count as IPv4.
fn parse_ipv4(name: &str) -> Option<Ipv4Addr> {
    if !name.contains('.') {
        return None;
    }
    match name.parse::<IpAddr>().ok()? {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(ip) => ip.to_ipv4_mapped(),
    }
}
