//! # Types
//!
//! Shared data structures used across all modules of the content registry.
//!
//! ## Design decisions
//!
//! ### USD cents as the canonical pricing unit
//!
//! Every article carries a single integer price in USD cents. Per-asset
//! payment amounts are derived at purchase time by [`crate::pricing`], never
//! stored on the article. Repricing an article therefore changes what future
//! buyers pay in every settlement asset at once.
//!
//! ### Soft deletion
//!
//! [`Article::is_active`] is a one-way flag. A deactivated article stays
//! readable through `get_article` (buyers who already paid keep their
//! entitlement proof pointing at real metadata) but is treated as nonexistent
//! by every purchase path. There is deliberately no reactivation entry point.

use soroban_sdk::{contracttype, Address, String};

/// Settlement asset recorded on each purchase.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentToken {
    /// Native chain gas token, 6 decimal places.
    Stx,
    /// Synthetic BTC-pegged token, 8 decimal places.
    Sbtc,
    /// Synthetic USD-pegged token, 6 decimal places, assumed exactly 1:1.
    Usdcx,
}

/// A priced catalog entry representing purchasable content metadata
/// (not the content itself; `content_ref` points off-chain).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Article {
    /// Auto-incremented unique ID, assigned densely starting at 1.
    pub id: u64,
    /// Address that published the article; sole authority for
    /// `deactivate_article` and `update_article_price`.
    pub author: Address,
    /// Display title, at most 256 bytes.
    pub title: String,
    /// Off-chain content pointer (e.g. IPFS CID), at most 64 bytes.
    pub content_ref: String,
    /// Price in USD cents, 1 ..= 1_000_000 ($0.01 ..= $10,000.00).
    pub price_usd_cents: u64,
    /// Free-form category label, at most 64 bytes.
    pub category: String,
    /// False once the author deactivates the article. Terminal.
    pub is_active: bool,
    /// Ledger sequence at publication. Immutable.
    pub published_at: u32,
}

/// Proof that a buyer paid for an article exactly once.
///
/// Keyed in storage by `(article_id, buyer)`; written on a successful
/// purchase and never mutated or deleted afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Purchase {
    /// Which settlement asset the buyer used.
    pub token_used: PaymentToken,
    /// Amount transferred, in the asset's smallest unit.
    pub amount_paid: i128,
    /// Ledger sequence at purchase. Immutable.
    pub purchased_at: u32,
}

/// Per-author running totals. Created lazily; monotonically non-decreasing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriterStats {
    /// Articles ever published by this author.
    pub total_articles: u32,
    /// Successful purchases of this author's articles.
    pub total_sales: u32,
    /// Accumulated net earnings in USD cents (97% of each sale price).
    pub total_earnings: u64,
}

impl WriterStats {
    pub fn zero() -> Self {
        WriterStats {
            total_articles: 0,
            total_sales: 0,
            total_earnings: 0,
        }
    }
}

/// Per-buyer running totals. Created lazily; monotonically non-decreasing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReaderStats {
    /// Successful purchases made by this buyer.
    pub total_purchases: u32,
    /// Accumulated gross spend in USD cents (full price, not net of fee).
    pub total_spent: u64,
}

impl ReaderStats {
    pub fn zero() -> Self {
        ReaderStats {
            total_purchases: 0,
            total_spent: 0,
        }
    }
}

/// Platform-wide singleton counters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformStats {
    /// Articles published across all authors.
    pub total_articles: u32,
    /// Accumulated platform fees in USD cents (3% of each sale price).
    pub total_revenue: u64,
    /// Fee rate in basis points. Constant 300.
    pub platform_fee_bps: u32,
    /// Cents lost to independent floor rounding of the 97/3 split.
    /// Credited to no one; tracked so the books still balance.
    pub rounding_dust: u64,
}

impl PlatformStats {
    pub fn zero() -> Self {
        PlatformStats {
            total_articles: 0,
            total_revenue: 0,
            platform_fee_bps: crate::pricing::PLATFORM_FEE_BPS,
            rounding_dust: 0,
        }
    }
}

/// One oracle feed reading: `price * 10^expo` USD per whole asset unit.
///
/// An unset feed reads back as the all-zero triple; [`crate::pricing`]
/// rejects it rather than dividing by zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceFeed {
    pub price: i128,
    pub expo: i32,
    pub timestamp: u64,
}
