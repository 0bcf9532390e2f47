//! # Test Utilities
//!
//! A minimal in-crate price oracle used by the test suites (and available to
//! downstream integration tests via the `testutils` feature). Mirrors the
//! behaviour the registry expects from a production oracle: admin-set feeds,
//! and an all-zero reading for any feed that was never set.

use soroban_sdk::{contract, contractimpl, contracttype, BytesN, Env};

use crate::types::PriceFeed;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MockOracleKey {
    Feed(BytesN<32>),
}

/// Stand-in price oracle: stores whatever `set_price` is given and reads it
/// back verbatim, stamped with the ledger timestamp at the time of the set.
#[contract]
pub struct MockPriceOracle;

#[contractimpl]
impl MockPriceOracle {
    pub fn set_price(env: Env, feed_id: BytesN<32>, price: i128, expo: i32) {
        let feed = PriceFeed {
            price,
            expo,
            timestamp: env.ledger().timestamp(),
        };
        env.storage()
            .persistent()
            .set(&MockOracleKey::Feed(feed_id), &feed);
    }

    /// Unset feeds read back as the zero triple, never a trap.
    pub fn read_price_feed(env: Env, feed_id: BytesN<32>) -> PriceFeed {
        env.storage()
            .persistent()
            .get(&MockOracleKey::Feed(feed_id))
            .unwrap_or(PriceFeed {
                price: 0,
                expo: 0,
                timestamp: 0,
            })
    }
}
