use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ReverseError {
    #[error("Invalid IP address: {0}")]
    InvalidIp(String),
    #[error("Invalid CIDR notation: {0}")]
    InvalidCidr(String),
    #[error("CIDR {0} has 1 bits beyond the mask")]
    HostBitsSet(String),
    #[error("Cannot use /0 in reverse CIDR")]
    ZeroPrefix,
    #[error("IPv4 mask must be a multiple of 8 bits: {0}")]
    UnalignedIpv4Mask(String),
    #[error("IPv6 mask must be a multiple of 4 bits: {0}")]
    UnalignedIpv6Mask(String),
}

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PtrError {
    #[error("PTR record {name} in wrong domain ({domain})")]
    WrongDomain { name: String, domain: String },
    #[error("PTR record {name} in wrong IPv4 domain ({domain})")]
    WrongIpv4Domain { name: String, domain: String },
    #[error("PTR record {name} in wrong IPv6 domain ({domain})")]
    WrongIpv6Domain {
        name: String,
        domain: String,
        trimmed: String,
    },
    #[error("Reverse conversion of {name} failed: {source}")]
    ReverseConversion {
        name: String,
        #[source]
        source: ReverseError,
    },
    #[error("Invalid delegation field: {0}")]
    InvalidDelegationField(String),
}

impl PtrError {
    /// The string handed back alongside the error. Each failure path has its
    /// own convention, so callers must never treat this as a valid record name.
    pub fn partial(&self) -> &str {
        match self {
            Self::WrongDomain { name, .. } | Self::ReverseConversion { name, .. } => name,
            Self::WrongIpv6Domain { trimmed, .. } => trimmed,
            Self::WrongIpv4Domain { .. } | Self::InvalidDelegationField(_) => "",
        }
    }
}
