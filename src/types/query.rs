// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validated lookup request

use std::fmt;

use alloy_chains::{Chain, NamedChain};
use alloy_primitives::Address;

use crate::address;
use crate::errors::ValidationError;
use crate::events::filter::ContractScope;

/// A validated "which transfers involve this account" request.
///
/// Built from raw request parameters with [`TransferQuery::parse`], which
/// enforces that the account and chain are present and well formed. The
/// account is held as a decoded [`Address`], so its external form is always
/// lowercase.
///
/// # Examples
///
/// ```rust
/// use transferscan::{ContractScope, TransferQuery};
///
/// let query = TransferQuery::parse(
///     Some("8453"),
///     Some("0xABCDEF0123456789abcdef0123456789abcdef01"),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(query.chain.id(), 8453);
/// assert_eq!(query.account_hex(), "0xabcdef0123456789abcdef0123456789abcdef01");
/// assert_eq!(query.scope, ContractScope::Unrestricted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferQuery {
    /// Chain the lookup targets
    pub chain: Chain,
    /// Account whose incoming and outgoing transfers are requested
    pub account: Address,
    /// Optional restriction to a single token contract
    pub scope: ContractScope,
}

impl TransferQuery {
    /// Create a query from already validated parts.
    pub fn new(chain: Chain, account: Address, scope: ContractScope) -> Self {
        Self {
            chain,
            account,
            scope,
        }
    }

    /// Validate raw request parameters.
    ///
    /// Empty strings count as absent. An absent or empty `token` leaves the
    /// query unrestricted.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingParameters`] when `chain` or `account` is absent
    /// - [`ValidationError::InvalidChain`] for an unknown chain identifier
    /// - [`ValidationError::InvalidAddress`] for a malformed account or token
    pub fn parse(
        chain: Option<&str>,
        account: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, ValidationError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        let (Some(chain), Some(account)) = (present(chain), present(account)) else {
            return Err(ValidationError::MissingParameters);
        };

        let chain = parse_chain(chain)?;
        let account = address::parse("address", account)?;
        let scope = match present(token) {
            Some(token) => ContractScope::RestrictedTo(address::parse("token", token)?),
            None => ContractScope::Unrestricted,
        };

        Ok(Self::new(chain, account, scope))
    }

    /// The account in its canonical lowercase form, as echoed in responses.
    pub fn account_hex(&self) -> String {
        address::to_lower_hex(self.account)
    }
}

impl fmt::Display for TransferQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on chain {}", self.account_hex(), self.chain.id())?;
        if let ContractScope::RestrictedTo(token) = self.scope {
            write!(f, " for token {}", address::to_lower_hex(token))?;
        }
        Ok(())
    }
}

/// Parse a chain identifier.
///
/// Accepts a decimal chain id (`"8453"`) or a known chain name (`"base"`,
/// `"arbitrum"`), case-insensitively.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidChain`] for anything else.
pub fn parse_chain(value: &str) -> Result<Chain, ValidationError> {
    let value = value.trim();

    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse::<u64>()
            .map(Chain::from_id)
            .map_err(|_| ValidationError::invalid_chain(value));
    }

    value
        .to_ascii_lowercase()
        .parse::<NamedChain>()
        .map(Chain::from_named)
        .map_err(|_| ValidationError::invalid_chain(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ACCOUNT: &str = "0xABC0000000000000000000000000000000000123";

    #[test]
    fn test_parse_requires_chain_and_account() {
        assert_eq!(
            TransferQuery::parse(None, Some(ACCOUNT), None),
            Err(ValidationError::MissingParameters)
        );
        assert_eq!(
            TransferQuery::parse(Some("8453"), None, None),
            Err(ValidationError::MissingParameters)
        );
        assert_eq!(
            TransferQuery::parse(Some("  "), Some(ACCOUNT), None),
            Err(ValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_parse_normalizes_account() {
        let query = TransferQuery::parse(Some("8453"), Some(ACCOUNT), None).unwrap();

        assert_eq!(query.account, address!("abc0000000000000000000000000000000000123"));
        assert_eq!(
            query.account_hex(),
            "0xabc0000000000000000000000000000000000123"
        );
        assert_eq!(query.scope, ContractScope::Unrestricted);
    }

    #[test]
    fn test_parse_with_token_restricts_scope() {
        let query = TransferQuery::parse(
            Some("8453"),
            Some(ACCOUNT),
            Some("0xdef0000000000000000000000000000000000456"),
        )
        .unwrap();

        assert_eq!(
            query.scope,
            ContractScope::RestrictedTo(address!("def0000000000000000000000000000000000456"))
        );
    }

    #[test]
    fn test_parse_empty_token_is_unrestricted() {
        let query = TransferQuery::parse(Some("1"), Some(ACCOUNT), Some("")).unwrap();
        assert_eq!(query.scope, ContractScope::Unrestricted);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let query = TransferQuery::parse(
            Some(" 8453 "),
            Some("  0xabc0000000000000000000000000000000000123\n"),
            Some("   "),
        )
        .unwrap();

        assert_eq!(query.chain.id(), 8453);
        assert_eq!(query.account, address!("abc0000000000000000000000000000000000123"));
        assert_eq!(query.scope, ContractScope::Unrestricted);
    }

    #[test]
    fn test_parse_rejects_malformed_token() {
        let err = TransferQuery::parse(Some("1"), Some(ACCOUNT), Some("usdc")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidAddress { field: "token", .. }
        ));
    }

    #[test]
    fn test_parse_chain_numeric_and_named() {
        assert_eq!(parse_chain("8453").unwrap().id(), 8453);
        assert_eq!(parse_chain("999999999").unwrap().id(), 999_999_999);
        assert_eq!(parse_chain("Base").unwrap().id(), 8453);
        assert_eq!(parse_chain("mainnet").unwrap().id(), 1);
    }

    #[test]
    fn test_parse_chain_rejects_unknown_names() {
        assert_eq!(
            parse_chain("not-a-chain"),
            Err(ValidationError::invalid_chain("not-a-chain"))
        );
        assert!(parse_chain("99999999999999999999999").is_err());
    }

    #[test]
    fn test_display_mentions_token() {
        let query = TransferQuery::new(
            Chain::from_id(10),
            address!("1111111111111111111111111111111111111111"),
            ContractScope::RestrictedTo(address!("2222222222222222222222222222222222222222")),
        );
        assert_eq!(
            query.to_string(),
            "0x1111111111111111111111111111111111111111 on chain 10 for token 0x2222222222222222222222222222222222222222"
        );
    }
}
