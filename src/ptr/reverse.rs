use std::{
    fmt::Write,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use super::error::ReverseError;

/// Turns an address in CIDR notation into its reverse zone name.
///
/// Names are returned without the trailing root dot, e.g.
/// `4.3.2.1.in-addr.arpa` for `1.2.3.4/32`.
pub trait AddressReverser {
    fn reverse(&self, cidr: &str) -> Result<String, ReverseError>;
}

impl<R: AddressReverser + ?Sized> AddressReverser for &R {
    fn reverse(&self, cidr: &str) -> Result<String, ReverseError> {
        (**self).reverse(cidr)
    }
}

/// Octet reversal for IPv4 and nibble reversal for IPv6, with RFC 2317
/// slash notation for IPv4 prefixes between /25 and /31.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArpaReverser;

impl AddressReverser for ArpaReverser {
    fn reverse(&self, cidr: &str) -> Result<String, ReverseError> {
        let (ip, prefix) = parse_cidr(cidr)?;
        match ip {
            IpAddr::V4(ipv4) => reverse_v4(ipv4, prefix, cidr),
            IpAddr::V6(ipv6) => reverse_v6(&ipv6, prefix, cidr),
        }
    }
}

// A bare address implies a full host prefix.
fn parse_cidr(cidr: &str) -> Result<(IpAddr, u8), ReverseError> {
    let cidr = cidr.trim();
    let Some((ip_str, prefix_str)) = cidr.split_once('/') else {
        let ip: IpAddr = cidr
            .parse()
            .map_err(|_| ReverseError::InvalidIp(cidr.to_string()))?;
        let prefix = if ip.is_ipv4() { 32 } else { 128 };
        return Ok((ip, prefix));
    };

    let ip: IpAddr = ip_str
        .trim()
        .parse()
        .map_err(|_| ReverseError::InvalidIp(ip_str.to_string()))?;
    let prefix: u8 = prefix_str
        .trim()
        .parse()
        .map_err(|_| ReverseError::InvalidCidr(cidr.to_string()))?;

    let max_prefix = if ip.is_ipv4() { 32 } else { 128 };
    if prefix > max_prefix {
        return Err(ReverseError::InvalidCidr(cidr.to_string()));
    }

    Ok((ip, prefix))
}

fn reverse_v4(ip: Ipv4Addr, prefix: u8, cidr: &str) -> Result<String, ReverseError> {
    if prefix == 0 {
        return Err(ReverseError::ZeroPrefix);
    }
    let mask = u32::MAX << (32 - prefix);
    if u32::from(ip) & !mask != 0 {
        return Err(ReverseError::HostBitsSet(cidr.to_string()));
    }

    let full = ipv4_to_ptr(ip);

    // RFC 2317 classless delegation: <first address>/<prefix>.<class C zone>
    if (25..32).contains(&prefix) {
        let [_, _, _, first] = ip.octets();
        let class_c = full.split_once('.').map_or(full.as_str(), |(_, rest)| rest);
        return Ok(format!("{first}/{prefix}.{class_c}"));
    }

    if prefix % 8 != 0 {
        return Err(ReverseError::UnalignedIpv4Mask(cidr.to_string()));
    }

    Ok(trim_labels(&full, usize::from((32 - prefix) / 8)))
}

fn reverse_v6(ip: &Ipv6Addr, prefix: u8, cidr: &str) -> Result<String, ReverseError> {
    if prefix == 0 {
        return Err(ReverseError::ZeroPrefix);
    }
    let mask = u128::MAX << (128 - prefix);
    if u128::from(*ip) & !mask != 0 {
        return Err(ReverseError::HostBitsSet(cidr.to_string()));
    }
    if prefix % 4 != 0 {
        return Err(ReverseError::UnalignedIpv6Mask(cidr.to_string()));
    }

    Ok(trim_labels(&ipv6_to_ptr(ip), usize::from((128 - prefix) / 4)))
}

fn trim_labels(name: &str, count: usize) -> String {
    name.splitn(count + 1, '.').last().unwrap_or(name).to_string()
}

pub fn ipv4_to_ptr(ip: Ipv4Addr) -> String {
    ip.octets()
        .iter()
        .rev()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
        + ".in-addr.arpa"
}

pub fn ipv6_to_ptr(ip: &Ipv6Addr) -> String {
    // Expanded hex representation without colons
    let mut expanded = String::with_capacity(32);
    for segment in ip.segments() {
        let _ = write!(expanded, "{segment:04x}");
    }

    let reversed = expanded.chars().rev().fold(String::new(), |mut acc, c| {
        acc.push(c);
        acc.push('.');
        acc
    });

    format!("{reversed}ip6.arpa")
}
