// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for address handling and filter construction
//!
//! These tests use proptest to check the topic padding and the two-filter
//! query layout across arbitrary accounts and tokens.

use alloy_primitives::{Address, B256};
use alloy_sol_types::SolEvent;
use proptest::prelude::*;
use transferscan::address::{normalize, pad, pad_hex, to_lower_hex, unpad};
use transferscan::events::filter::{RECIPIENT_SLOT, SENDER_SLOT};
use transferscan::{ContractScope, RawLogEntry, Transfer, TransferFilterBuilder};

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Randomly upper-cases hex letters and optionally drops the prefix
fn arb_spelling(address: Address) -> impl Strategy<Value = String> {
    let hex = to_lower_hex(address);
    (any::<bool>(), proptest::collection::vec(any::<bool>(), 40)).prop_map(move |(prefix, upper)| {
        let body: String = hex[2..]
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        if prefix {
            format!("0x{body}")
        } else {
            body
        }
    })
}

proptest! {
    /// Property: unpad inverts pad
    #[test]
    fn prop_pad_round_trips(address in arb_address()) {
        prop_assert_eq!(unpad(pad(address)), Some(address));
    }

    /// Property: the padded topic is 12 zero bytes followed by the address
    #[test]
    fn prop_pad_is_left_zero_extension(address in arb_address()) {
        let topic = pad(address);
        prop_assert_eq!(&topic[..12], &[0u8; 12][..]);
        prop_assert_eq!(&topic[12..], address.as_slice());
    }

    /// Property: any spelling of an address normalizes to the same value
    #[test]
    fn prop_spelling_does_not_matter(
        (address, spelling) in arb_address().prop_flat_map(|a| (Just(a), arb_spelling(a)))
    ) {
        prop_assert_eq!(normalize(&spelling).unwrap(), address);
        prop_assert_eq!(pad_hex(&spelling).unwrap(), format!("{:#x}", pad(address)));
    }

    /// Property: a topic with a non-zero high byte is not a padded address
    #[test]
    fn prop_unpad_rejects_dirty_high_bytes(bytes in any::<[u8; 32]>(), index in 0usize..12) {
        let mut bytes = bytes;
        bytes[index] |= 1;
        prop_assert_eq!(unpad(B256::from(bytes)), None);
    }

    /// Property: the query always has the receiver then the sender filter,
    /// both on the Transfer signature, both carrying the same scope
    #[test]
    fn prop_query_layout(
        account in arb_address(),
        token in proptest::option::of(arb_address()),
    ) {
        let scope = ContractScope::from(token);
        let query = TransferFilterBuilder::new(account).with_scope(scope).build();
        let filters = query.filters();

        prop_assert_eq!(filters.len(), 2);
        prop_assert_eq!(filters[0].topic_slot(RECIPIENT_SLOT), &[pad(account)][..]);
        prop_assert!(filters[0].topic_slot(SENDER_SLOT).is_empty());
        prop_assert_eq!(filters[1].topic_slot(SENDER_SLOT), &[pad(account)][..]);
        prop_assert!(filters[1].topic_slot(RECIPIENT_SLOT).is_empty());

        for filter in filters {
            prop_assert_eq!(filter.event_signature(), Transfer::SIGNATURE_HASH);
            prop_assert_eq!(filter.scope(), scope);
        }
    }

    /// Property: a transfer from the scoped token matches exactly when the
    /// account is one of its parties
    #[test]
    fn prop_query_matches_involved_transfers(
        account in arb_address(),
        peer in arb_address(),
        emitter in arb_address(),
        sends in any::<bool>(),
        receives in any::<bool>(),
        restrict in any::<bool>(),
    ) {
        let from = if sends { account } else { peer };
        let to = if receives { account } else { peer };
        let scope = if restrict { ContractScope::RestrictedTo(emitter) } else { ContractScope::Unrestricted };
        let query = TransferFilterBuilder::new(account).with_scope(scope).build();

        let log = RawLogEntry {
            topics: vec![Transfer::SIGNATURE_HASH, pad(from), pad(to)],
            address: Some(emitter),
            ..Default::default()
        };

        prop_assert_eq!(query.matches(&log), from == account || to == account);
    }
}
