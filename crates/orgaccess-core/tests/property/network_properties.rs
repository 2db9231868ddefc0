//! Property tests: CIDR containment.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;

use orgaccess_core::models::AllowedNetwork;

proptest! {
    #[test]
    fn prop_network_contains_its_own_address(bits in any::<u32>(), prefix in 0u8..=32) {
        let ip = IpAddr::V4(Ipv4Addr::from(bits));
        let net: AllowedNetwork = format!("{ip}/{prefix}").parse().unwrap();
        prop_assert!(net.contains(ip));
    }

    #[test]
    fn prop_host_prefix_matches_only_itself(a in any::<u32>(), b in any::<u32>()) {
        let net: AllowedNetwork = format!("{}/32", Ipv4Addr::from(a)).parse().unwrap();
        prop_assert_eq!(net.contains(IpAddr::V4(Ipv4Addr::from(b))), a == b);
    }

    #[test]
    fn prop_zero_prefix_matches_every_address_of_its_family(a in any::<u128>(), b in any::<u128>()) {
        let net: AllowedNetwork = format!("{}/0", Ipv6Addr::from(a)).parse().unwrap();
        prop_assert!(net.contains(IpAddr::V6(Ipv6Addr::from(b))));
        prop_assert!(!net.contains(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    }

    #[test]
    fn prop_shared_prefix_bits_decide_membership(a in any::<u32>(), b in any::<u32>(), prefix in 1u8..=32) {
        let net: AllowedNetwork = format!("{}/{prefix}", Ipv4Addr::from(a)).parse().unwrap();
        let shift = 32 - u32::from(prefix);
        let same = (a >> shift) == (b >> shift);
        prop_assert_eq!(net.contains(IpAddr::V4(Ipv4Addr::from(b))), same);
    }
}
