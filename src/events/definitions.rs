//! Canonical ERC-20 event definition for blockchain event decoding
//!
//! # Event Signature
//!
//! - **Transfer**: `Transfer(address,address,uint256)`
//!
//! The `sol!` macro generates `SIGNATURE` (string) and `SIGNATURE_HASH` (B256)
//! constants. Filters use the hash as topic 0 and decoding checks it, so both
//! sides of a lookup agree on the event by construction.
//!
//! ```rust
//! use alloy_sol_types::SolEvent;
//! use transferscan::Transfer;
//!
//! assert_eq!(Transfer::SIGNATURE, "Transfer(address,address,uint256)");
//! ```
//!
//! ERC-721 `Transfer` shares the same signature hash but indexes the token id
//! as a fourth topic and carries no data. Such logs match the filters and
//! fail to decode, which the decoder reports per log.

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// ERC-20 Transfer event
    ///
    /// Emitted when tokens are transferred from one address to another.
    /// This includes:
    /// - Regular transfers between users
    /// - Minting (from = 0x0)
    /// - Burning (to = 0x0)
    ///
    /// # Fields
    ///
    /// - `from`: Address tokens are transferred from (indexed, topic 1)
    /// - `to`: Address tokens are transferred to (indexed, topic 2)
    /// - `value`: Amount of tokens transferred (raw, not adjusted for decimals)
    event Transfer(address indexed from, address indexed to, uint256 value);
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}
