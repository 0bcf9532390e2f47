//! # Oracle
//!
//! Interface to the external price oracle contract. The registry never
//! stores asset prices itself; every oracle-settled purchase reads the
//! relevant feed at call time and converts through [`crate::pricing`].
//!
//! The oracle is a black-box collaborator: any contract implementing
//! [`PriceOracle`] can be wired in at `init` (or rotated later via
//! `set_oracle`). Feeds are addressed by 32-byte IDs, Pyth style; the two
//! feeds the registry consumes have well-known IDs defined here.

use soroban_sdk::{contractclient, BytesN, Env};

use crate::types::PriceFeed;

/// Price oracle collaborator contract.
///
/// `read_price_feed` must return the all-zero triple for a feed that has
/// never been set, not trap; the registry turns that into
/// `Error::OracleUnavailable`.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn read_price_feed(env: Env, feed_id: BytesN<32>) -> PriceFeed;
}

/// Feed ID for the native gas token's USD price.
pub fn stx_usd_feed(env: &Env) -> BytesN<32> {
    let mut id = [0u8; 32];
    id[0] = 0x01;
    BytesN::from_array(env, &id)
}

/// Feed ID for the BTC USD price backing the BTC-pegged token.
pub fn btc_usd_feed(env: &Env) -> BytesN<32> {
    let mut id = [0u8; 32];
    id[0] = 0x02;
    BytesN::from_array(env, &id)
}
