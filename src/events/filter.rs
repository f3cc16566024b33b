//! Semantic filter builders for Transfer lookups
//!
//! A transfer lookup for an account is the union of two filters over the
//! ERC-20 `Transfer` event:
//!
//! - **receiver filter**: the padded account in topic 2 (`to`)
//! - **sender filter**: the padded account in topic 1 (`from`)
//!
//! Filters are OR-combined at the query level; within one filter every
//! non-wildcard topic slot and the contract constraint must match.
//!
//! # Examples
//!
//! ```rust,ignore
//! use transferscan::events::filter::{ContractScope, TransferFilterBuilder};
//! use alloy_primitives::address;
//!
//! let query = TransferFilterBuilder::new(account)
//!     .with_token(usdc)
//!     .build();
//!
//! assert_eq!(query.filters().len(), 2);
//! ```

use alloy_primitives::{Address, BlockNumber, B256};
use alloy_rpc_types::Filter;
use alloy_sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::address;
use crate::events::definitions::Transfer;
use crate::types::{RawLogEntry, TransferQuery};

/// Topic slot holding `from` in an ERC-20 Transfer log
pub const SENDER_SLOT: usize = 1;

/// Topic slot holding `to` in an ERC-20 Transfer log
pub const RECIPIENT_SLOT: usize = 2;

/// Log fields requested from the remote service for a transfer lookup
pub const TRANSFER_FIELDS: [LogField; 7] = [
    LogField::Topic0,
    LogField::Topic1,
    LogField::Topic2,
    LogField::Data,
    LogField::Address,
    LogField::BlockNumber,
    LogField::TransactionHash,
];

/// Optional restriction of a lookup to one token contract
///
/// Applied uniformly to both filters of a [`LogQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractScope {
    /// Match Transfer logs from any contract.
    #[default]
    Unrestricted,
    /// Match only logs emitted by this contract.
    RestrictedTo(Address),
}

impl ContractScope {
    /// The contract constraint, if any.
    pub fn contract(&self) -> Option<Address> {
        match self {
            ContractScope::Unrestricted => None,
            ContractScope::RestrictedTo(contract) => Some(*contract),
        }
    }

    /// Whether a log emitted by `emitter` satisfies the scope.
    pub fn permits(&self, emitter: Option<Address>) -> bool {
        match self {
            ContractScope::Unrestricted => true,
            ContractScope::RestrictedTo(contract) => emitter == Some(*contract),
        }
    }
}

impl From<Option<Address>> for ContractScope {
    fn from(token: Option<Address>) -> Self {
        token.map_or(ContractScope::Unrestricted, ContractScope::RestrictedTo)
    }
}

/// A log field that can be requested from the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogField {
    Topic0,
    Topic1,
    Topic2,
    Data,
    Address,
    BlockNumber,
    TransactionHash,
}

/// One matching rule over ERC-20 Transfer logs
///
/// Slot 0 always holds [`Transfer::SIGNATURE_HASH`]. Each slot is a set of
/// allowed values; an empty set is a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    topics: [Vec<B256>; 3],
    scope: ContractScope,
}

impl LogFilter {
    fn with_account_in(slot: usize, account: Address, scope: ContractScope) -> Self {
        let mut topics: [Vec<B256>; 3] = [vec![Transfer::SIGNATURE_HASH], Vec::new(), Vec::new()];
        topics[slot].push(address::pad(account));
        Self { topics, scope }
    }

    /// Transfers where `account` is the recipient (topic 2).
    pub fn recipient(account: Address, scope: ContractScope) -> Self {
        Self::with_account_in(RECIPIENT_SLOT, account, scope)
    }

    /// Transfers where `account` is the sender (topic 1).
    pub fn sender(account: Address, scope: ContractScope) -> Self {
        Self::with_account_in(SENDER_SLOT, account, scope)
    }

    /// The event signature topic (slot 0).
    pub fn event_signature(&self) -> B256 {
        Transfer::SIGNATURE_HASH
    }

    /// Allowed values for a topic slot; empty means any value.
    pub fn topic_slot(&self, slot: usize) -> &[B256] {
        self.topics.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All topic slots in order.
    pub fn topics(&self) -> &[Vec<B256>] {
        &self.topics
    }

    /// Topic slots without trailing wildcards.
    ///
    /// This is the form sent over the wire: `[[sig], [], [to]]` for the
    /// receiver filter and `[[sig], [from]]` for the sender filter.
    pub fn trimmed_topics(&self) -> &[Vec<B256>] {
        let len = self
            .topics
            .iter()
            .rposition(|slot| !slot.is_empty())
            .map_or(0, |last| last + 1);
        &self.topics[..len]
    }

    /// The contract restriction shared by both filters of a query.
    pub fn scope(&self) -> ContractScope {
        self.scope
    }

    /// Whether `log` satisfies every constraint of this filter.
    pub fn matches(&self, log: &RawLogEntry) -> bool {
        self.scope.permits(log.address)
            && self
                .topics
                .iter()
                .enumerate()
                .all(|(slot, allowed)| match log.topic(slot) {
                    _ if allowed.is_empty() => true,
                    Some(topic) => allowed.contains(&topic),
                    None => false,
                })
    }

    /// Convert to an `eth_getLogs` filter without a block range.
    pub fn to_rpc_filter(&self) -> Filter {
        let mut filter = Filter::new().event_signature(self.event_signature());

        if let Some(contract) = self.scope.contract() {
            filter = filter.address(contract);
        }

        let sender = self.topic_slot(SENDER_SLOT);
        if !sender.is_empty() {
            filter = filter.topic1(sender.to_vec());
        }

        let recipient = self.topic_slot(RECIPIENT_SLOT);
        if !recipient.is_empty() {
            filter = filter.topic2(recipient.to_vec());
        }

        filter
    }
}

/// The two-filter query sent to a log source for one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// First block to scan
    pub from_block: BlockNumber,
    /// Filters, OR-combined
    pub filters: Vec<LogFilter>,
    /// Fields the service should return for each log
    pub field_selection: Vec<LogField>,
}

impl LogQuery {
    /// Whether `log` satisfies at least one filter.
    pub fn matches(&self, log: &RawLogEntry) -> bool {
        self.filters.iter().any(|filter| filter.matches(log))
    }

    /// The filters of this query.
    pub fn filters(&self) -> &[LogFilter] {
        &self.filters
    }
}

/// Builder for the bidirectional Transfer query of one account
///
/// Hides the topic layout of the Transfer event behind domain methods.
/// The built query scans from genesis unless [`from_block`] says otherwise.
///
/// [`from_block`]: TransferFilterBuilder::from_block
#[derive(Debug, Clone)]
pub struct TransferFilterBuilder {
    account: Address,
    scope: ContractScope,
    from_block: BlockNumber,
}

impl TransferFilterBuilder {
    /// Start a query for transfers to or from `account`.
    pub fn new(account: Address) -> Self {
        Self {
            account,
            scope: ContractScope::Unrestricted,
            from_block: 0,
        }
    }

    /// Start a query from a validated request.
    pub fn for_query(query: &TransferQuery) -> Self {
        Self::new(query.account).with_scope(query.scope)
    }

    /// Restrict both filters to a single token contract.
    pub fn with_token(self, token: Address) -> Self {
        self.with_scope(ContractScope::RestrictedTo(token))
    }

    /// Apply a contract scope to both filters.
    pub fn with_scope(mut self, scope: ContractScope) -> Self {
        self.scope = scope;
        self
    }

    /// Start scanning at `block` instead of genesis.
    pub fn from_block(mut self, block: BlockNumber) -> Self {
        self.from_block = block;
        self
    }

    /// Build the query: receiver filter first, sender filter second.
    pub fn build(self) -> LogQuery {
        LogQuery {
            from_block: self.from_block,
            filters: vec![
                LogFilter::recipient(self.account, self.scope),
                LogFilter::sender(self.account, self.scope),
            ],
            field_selection: TRANSFER_FIELDS.to_vec(),
        }
    }
}
