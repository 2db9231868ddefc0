//! Network access policies: per-organisation allow lists of IPs and CIDR ranges.

use std::net::IpAddr;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{OrganisationId, PolicyId};

/// A named allow list scoped to one organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAccessPolicy {
    pub id: PolicyId,
    pub organisation_id: OrganisationId,
    pub name: String,
    /// Comma-separated IP addresses and CIDR ranges.
    pub allowed_ips: String,
    /// Global policies apply to every account in the organisation.
    pub is_global: bool,
    pub created_at: DateTime<Utc>,
}

impl NetworkAccessPolicy {
    /// Parse `allowed_ips`. Blank and malformed entries are skipped.
    pub fn allowed_networks(&self) -> Vec<AllowedNetwork> {
        self.allowed_ips
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| entry.parse().ok())
            .collect()
    }
}

/// One entry of an allow list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedNetwork {
    Address(IpAddr),
    Cidr { network: IpAddr, prefix: u8 },
}

impl AllowedNetwork {
    pub fn contains(&self, ip: IpAddr) -> bool {
        match *self {
            Self::Address(addr) => addr == ip,
            Self::Cidr { network, prefix } => match (network, ip) {
                (IpAddr::V4(net), IpAddr::V4(ip)) => {
                    prefix_matches(u32::from(net) as u128, u32::from(ip) as u128, prefix, 32)
                }
                (IpAddr::V6(net), IpAddr::V6(ip)) => {
                    prefix_matches(u128::from(net), u128::from(ip), prefix, 128)
                }
                _ => false,
            },
        }
    }
}

fn prefix_matches(network: u128, ip: u128, prefix: u8, width: u8) -> bool {
    if prefix == 0 {
        return true;
    }
    let shift = u32::from(width - prefix);
    (network >> shift) == (ip >> shift)
}

impl FromStr for AllowedNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            None => s
                .parse::<IpAddr>()
                .map(Self::Address)
                .map_err(|e| format!("invalid address {s}: {e}")),
            Some((addr, prefix)) => {
                let network: IpAddr = addr
                    .parse()
                    .map_err(|e| format!("invalid network {addr}: {e}"))?;
                let prefix: u8 = prefix
                    .parse()
                    .map_err(|e| format!("invalid prefix {prefix}: {e}"))?;
                let width = if network.is_ipv4() { 32 } else { 128 };
                if prefix > width {
                    return Err(format!("prefix /{prefix} exceeds /{width}"));
                }
                Ok(Self::Cidr { network, prefix })
            }
        }
    }
}

/// Whether `client_ip` is covered by any global policy.
///
/// Used before saving global policies to warn a caller that they would lock
/// themselves out.
pub fn is_client_ip_allowed<'a, I>(policies: I, client_ip: IpAddr) -> bool
where
    I: IntoIterator<Item = &'a NetworkAccessPolicy>,
{
    policies
        .into_iter()
        .filter(|p| p.is_global)
        .flat_map(NetworkAccessPolicy::allowed_networks)
        .any(|net| net.contains(client_ip))
}
