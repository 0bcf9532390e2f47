//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type            | Description                          |
//! |-----------------|-----------------|--------------------------------------|
//! | `Admin`         | `Address`       | Deployment admin (oracle rotation)   |
//! | `StxToken`      | `Address`       | Native gas token contract            |
//! | `SbtcToken`     | `Address`       | BTC-pegged token contract            |
//! | `UsdcxToken`    | `Address`       | USD-pegged token contract            |
//! | `Oracle`        | `Address`       | Price oracle contract                |
//! | `ArticleCount`  | `u64`           | Last assigned article ID             |
//! | `PlatformStats` | `PlatformStats` | Platform-wide counters               |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type          | Description                    |
//! |-------------------------|---------------|--------------------------------|
//! | `Article(id)`           | `Article`     | Catalog entry                  |
//! | `Purchase(id, buyer)`   | `Purchase`    | At most one per (id, buyer)    |
//! | `WriterStats(author)`   | `WriterStats` | Lazily created on first write  |
//! | `ReaderStats(buyer)`    | `ReaderStats` | Lazily created on first write  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! Article IDs are allocated densely starting at **1**; `ArticleCount` holds
//! the last ID handed out, so a fresh contract reads 0 and assigns 1 first.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Article, PlatformStats, Purchase, ReaderStats, WriterStats};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys hold deployment configuration and the two global
/// counters; they live as long as the contract and are extended together.
/// Persistent-tier keys hold per-article, per-purchase, and per-identity
/// data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Deployment admin (Instance).
    Admin,
    /// Native gas token contract address (Instance).
    StxToken,
    /// BTC-pegged token contract address (Instance).
    SbtcToken,
    /// USD-pegged token contract address (Instance).
    UsdcxToken,
    /// Price oracle contract address (Instance).
    Oracle,
    /// Last assigned article ID (Instance).
    ArticleCount,
    /// Platform-wide counters (Instance).
    PlatformStats,
    /// Catalog entry keyed by article ID (Persistent).
    Article(u64),
    /// Purchase record keyed by article ID and buyer (Persistent).
    Purchase(u64, Address),
    /// Per-author totals (Persistent).
    WriterStats(Address),
    /// Per-buyer totals (Persistent).
    ReaderStats(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// True once `init` has stored the deployment configuration.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Store the deployment configuration. Called exactly once from `init`.
pub fn set_config(
    env: &Env,
    admin: &Address,
    stx_token: &Address,
    sbtc_token: &Address,
    usdcx_token: &Address,
    oracle: &Address,
) {
    bump_instance(env);
    let inst = env.storage().instance();
    inst.set(&DataKey::Admin, admin);
    inst.set(&DataKey::StxToken, stx_token);
    inst.set(&DataKey::SbtcToken, sbtc_token);
    inst.set(&DataKey::UsdcxToken, usdcx_token);
    inst.set(&DataKey::Oracle, oracle);
}

fn get_config_address(env: &Env, key: &DataKey) -> Result<Address, crate::Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .ok_or(crate::Error::NotInitialized)
}

pub fn get_admin(env: &Env) -> Result<Address, crate::Error> {
    get_config_address(env, &DataKey::Admin)
}

pub fn get_stx_token(env: &Env) -> Result<Address, crate::Error> {
    get_config_address(env, &DataKey::StxToken)
}

pub fn get_sbtc_token(env: &Env) -> Result<Address, crate::Error> {
    get_config_address(env, &DataKey::SbtcToken)
}

pub fn get_usdcx_token(env: &Env) -> Result<Address, crate::Error> {
    get_config_address(env, &DataKey::UsdcxToken)
}

pub fn get_oracle(env: &Env) -> Result<Address, crate::Error> {
    get_config_address(env, &DataKey::Oracle)
}

/// Replace the oracle contract address. Admin gating happens in `lib.rs`.
pub fn set_oracle(env: &Env, oracle: &Address) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::Oracle, oracle);
}

// ─────────────────────────────────────────────────────────
// Article counter
// ─────────────────────────────────────────────────────────

/// Allocate the next article ID. First call returns 1; IDs are dense,
/// strictly increasing, and never reused.
pub fn next_article_id(env: &Env) -> u64 {
    bump_instance(env);
    let last: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ArticleCount)
        .unwrap_or(0);
    let id = last + 1;
    env.storage().instance().set(&DataKey::ArticleCount, &id);
    id
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save a catalog entry (new or updated).
pub fn save_article(env: &Env, article: &Article) {
    let key = DataKey::Article(article.id);
    env.storage().persistent().set(&key, article);
    bump_persistent(env, &key);
}

/// Load a catalog entry, active or not. `None` if the ID was never assigned.
pub fn load_article(env: &Env, id: u64) -> Option<Article> {
    let key = DataKey::Article(id);
    let article: Option<Article> = env.storage().persistent().get(&key);
    if article.is_some() {
        bump_persistent(env, &key);
    }
    article
}

/// True if `buyer` has already completed a purchase of `article_id`.
pub fn has_purchase(env: &Env, article_id: u64, buyer: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Purchase(article_id, buyer.clone()))
}

/// Write the one-and-only purchase record for `(article_id, buyer)`.
/// Callers must have checked [`has_purchase`] first; records are never
/// overwritten or deleted.
pub fn save_purchase(env: &Env, article_id: u64, buyer: &Address, purchase: &Purchase) {
    let key = DataKey::Purchase(article_id, buyer.clone());
    env.storage().persistent().set(&key, purchase);
    bump_persistent(env, &key);
}

/// Load the purchase record for `(article_id, buyer)`, if any.
pub fn load_purchase(env: &Env, article_id: u64, buyer: &Address) -> Option<Purchase> {
    let key = DataKey::Purchase(article_id, buyer.clone());
    let purchase: Option<Purchase> = env.storage().persistent().get(&key);
    if purchase.is_some() {
        bump_persistent(env, &key);
    }
    purchase
}

// ─────────────────────────────────────────────────────────
// Aggregate counters
// ─────────────────────────────────────────────────────────

/// Load an author's totals, zeroed if the author has no history yet.
pub fn load_writer_stats(env: &Env, author: &Address) -> WriterStats {
    let key = DataKey::WriterStats(author.clone());
    match env.storage().persistent().get(&key) {
        Some(stats) => {
            bump_persistent(env, &key);
            stats
        }
        None => WriterStats::zero(),
    }
}

pub fn save_writer_stats(env: &Env, author: &Address, stats: &WriterStats) {
    let key = DataKey::WriterStats(author.clone());
    env.storage().persistent().set(&key, stats);
    bump_persistent(env, &key);
}

/// Load a buyer's totals, zeroed if the buyer has no history yet.
pub fn load_reader_stats(env: &Env, buyer: &Address) -> ReaderStats {
    let key = DataKey::ReaderStats(buyer.clone());
    match env.storage().persistent().get(&key) {
        Some(stats) => {
            bump_persistent(env, &key);
            stats
        }
        None => ReaderStats::zero(),
    }
}

pub fn save_reader_stats(env: &Env, buyer: &Address, stats: &ReaderStats) {
    let key = DataKey::ReaderStats(buyer.clone());
    env.storage().persistent().set(&key, stats);
    bump_persistent(env, &key);
}

/// Load the platform-wide counters, zeroed before the first publish.
pub fn load_platform_stats(env: &Env) -> PlatformStats {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PlatformStats)
        .unwrap_or_else(PlatformStats::zero)
}

pub fn save_platform_stats(env: &Env, stats: &PlatformStats) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::PlatformStats, stats);
}
