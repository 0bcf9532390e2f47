//! # Pricing
//!
//! Pure conversion arithmetic: USD-cent prices to per-asset payment amounts,
//! and the 97/3 fee split applied on every sale.
//!
//! ## Fee split rounding
//!
//! [`writer_amount`] and [`platform_fee`] each floor independently, so their
//! sum can fall one cent short of the price (price 50 splits into 48 + 1).
//! Because the two rates sum to exactly 10_000 bps, the shortfall is never
//! more than one cent. The leaked cent is credited to neither party; the
//! accounting layer records it in `PlatformStats::rounding_dust` so that
//! `earnings + revenue + dust` always reconciles against gross spend.
//!
//! ## Oracle conversion
//!
//! A feed reading means `mantissa * 10^expo` USD per whole asset unit, with
//! `expo` negative (Pyth-style 8-decimal feeds use `expo == -8`). Converting
//! a cent price into the asset's smallest unit rescales by
//! `10^(token_decimals + |expo| - 2)` before dividing by the mantissa:
//!
//! ```text
//! amount = price_usd_cents * 10^(token_decimals + |expo| - 2) / mantissa
//! ```
//!
//! With 6-decimal STX at expo -8 that is `cents * 10^12 / mantissa`; with
//! 8-decimal sBTC it is `cents * 10^14 / mantissa`. The USD-pegged token
//! skips the oracle entirely and rescales cents to micro-units.

use crate::types::PriceFeed;
use crate::Error;

/// Platform fee rate: 300 basis points (3%).
pub const PLATFORM_FEE_BPS: u32 = 300;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Decimal places of the native gas token.
pub const STX_DECIMALS: u32 = 6;

/// Decimal places of the BTC-pegged token.
pub const SBTC_DECIMALS: u32 = 8;

/// Decimal places of the USD-pegged token.
pub const USDCX_DECIMALS: u32 = 6;

/// Largest feed exponent magnitude we accept. Anything wilder is a
/// misconfigured oracle, not a price.
const MAX_EXPO_MAGNITUDE: u32 = 18;

/// Net amount credited to the author: `floor(price * 97%)` in USD cents.
pub fn writer_amount(price_usd_cents: u64) -> u64 {
    price_usd_cents * (BPS_DENOMINATOR - PLATFORM_FEE_BPS as u64) / BPS_DENOMINATOR
}

/// Platform cut: `floor(price * 3%)` in USD cents.
pub fn platform_fee(price_usd_cents: u64) -> u64 {
    price_usd_cents * PLATFORM_FEE_BPS as u64 / BPS_DENOMINATOR
}

/// Cents that neither split receives for this price. Always 0 or 1.
pub fn rounding_gap(price_usd_cents: u64) -> u64 {
    price_usd_cents - writer_amount(price_usd_cents) - platform_fee(price_usd_cents)
}

/// Convert a USD-cent price into an oracle-priced asset's smallest unit.
///
/// Fails with [`Error::OracleUnavailable`] when the feed mantissa is zero or
/// negative (feed never set), and with [`Error::Overflow`] when the exponent
/// is non-negative, implausibly large, or the rescale does not fit in `i128`.
pub fn usd_to_token_amount(
    price_usd_cents: u64,
    feed: &PriceFeed,
    token_decimals: u32,
) -> Result<i128, Error> {
    if feed.price <= 0 {
        return Err(Error::OracleUnavailable);
    }
    if feed.expo >= 0 {
        return Err(Error::Overflow);
    }
    let expo_magnitude = feed.expo.unsigned_abs();
    if expo_magnitude > MAX_EXPO_MAGNITUDE {
        return Err(Error::Overflow);
    }

    // cents carry 2 implied decimals, hence the -2 in the scaling exponent.
    let scale = token_decimals
        .checked_add(expo_magnitude)
        .and_then(|s| s.checked_sub(2))
        .ok_or(Error::Overflow)?;
    let factor = 10i128.checked_pow(scale).ok_or(Error::Overflow)?;

    let scaled = (price_usd_cents as i128)
        .checked_mul(factor)
        .ok_or(Error::Overflow)?;
    Ok(scaled / feed.price)
}

/// Convert a USD-cent price into USD-pegged micro-units at the fixed 1:1 peg.
///
/// Cents to 6-decimal smallest units is a pure rescale: `cents * 10^4`.
pub fn usd_to_pegged_amount(price_usd_cents: u64) -> i128 {
    price_usd_cents as i128 * 10_000
}
