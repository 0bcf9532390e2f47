//! # Accounting
//!
//! The aggregate ledger: per-author, per-buyer, and platform-wide running
//! totals, updated alongside every publish and purchase.
//!
//! Each helper performs its full set of counter updates before returning.
//! Because a Soroban invocation either commits wholly or not at all, a panic
//! anywhere in the calling operation (failed transfer, overflow) discards
//! every write made here, so the aggregates can never drift from the
//! underlying article and purchase records.
//!
//! Counter arithmetic is checked: an overflowing total aborts the whole
//! call rather than wrapping. The conserved quantity per sale is
//!
//! ```text
//! writer_amount(p) + platform_fee(p) + rounding_gap(p) == p
//! ```
//!
//! with the gap (0 or 1 cent) accumulated in `PlatformStats::rounding_dust`
//! and credited to no one.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::pricing;
use crate::storage;
use crate::Error;

/// Record a publish: bumps the author's and the platform's article counts.
pub fn credit_publish(env: &Env, author: &Address) {
    let mut writer = storage::load_writer_stats(env, author);
    writer.total_articles = match writer.total_articles.checked_add(1) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    storage::save_writer_stats(env, author, &writer);

    let mut platform = storage::load_platform_stats(env);
    platform.total_articles = match platform.total_articles.checked_add(1) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    storage::save_platform_stats(env, &platform);
}

/// Record a sale: five counter updates applied as one unit.
///
/// Writer: `total_sales += 1`, `total_earnings += 97% of price`.
/// Reader: `total_purchases += 1`, `total_spent += gross price`.
/// Platform: `total_revenue += 3% of price`, plus the rounding gap into dust.
pub fn credit_sale(env: &Env, author: &Address, buyer: &Address, price_usd_cents: u64) {
    let earned = pricing::writer_amount(price_usd_cents);
    let fee = pricing::platform_fee(price_usd_cents);
    let dust = pricing::rounding_gap(price_usd_cents);

    let mut writer = storage::load_writer_stats(env, author);
    writer.total_sales = match writer.total_sales.checked_add(1) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    writer.total_earnings = match writer.total_earnings.checked_add(earned) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    storage::save_writer_stats(env, author, &writer);

    let mut reader = storage::load_reader_stats(env, buyer);
    reader.total_purchases = match reader.total_purchases.checked_add(1) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    reader.total_spent = match reader.total_spent.checked_add(price_usd_cents) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    storage::save_reader_stats(env, buyer, &reader);

    let mut platform = storage::load_platform_stats(env);
    platform.total_revenue = match platform.total_revenue.checked_add(fee) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    platform.rounding_dust = match platform.rounding_dust.checked_add(dust) {
        Some(n) => n,
        None => panic_with_error!(env, Error::Overflow),
    };
    storage::save_platform_stats(env, &platform);
}
