//! # Content Registry Contract
//!
//! This is the root crate of the **Content Registry**, a multi-token paid
//! content marketplace ledger. It exposes the single Soroban contract
//! `ContentRegistry` whose entry points cover the full article lifecycle:
//!
//! | Phase      | Entry Point(s)                                           |
//! |------------|----------------------------------------------------------|
//! | Bootstrap  | [`ContentRegistry::init`], `set_oracle`                  |
//! | Catalog    | `publish_article`, `deactivate_article`, `update_article_price` |
//! | Purchases  | `purchase_with_stx`, `purchase_with_sbtc`, `purchase_with_usdcx` |
//! | Queries    | `get_article`, `has_purchased`, `get_purchase_info`, stats getters |
//!
//! ## Architecture
//!
//! Conversion arithmetic is fully delegated to [`pricing`], storage access to
//! [`storage`], and aggregate bookkeeping to [`accounting`]. This file
//! contains only the public entry points, the shared purchase routine, and
//! event emissions.
//!
//! All three purchase entry points funnel into one internal routine
//! parameterized by a payment method, so the existence/activity check, the
//! once-per-buyer check, the transfer, and the bookkeeping are written once.
//! A failure anywhere (including inside the token or oracle collaborator)
//! panics, and the host discards every state write of the invocation; a
//! purchase record can never exist without its matching fee credits.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String,
};

mod accounting;
pub mod events;
pub mod oracle;
pub mod pricing;
mod storage;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use oracle::PriceOracleClient;
pub use types::{
    Article, PaymentToken, PlatformStats, PriceFeed, Purchase, ReaderStats, WriterStats,
};

/// Longest accepted article title, in bytes.
const MAX_TITLE_LEN: u32 = 256;
/// Longest accepted content reference, in bytes.
const MAX_CONTENT_REF_LEN: u32 = 64;
/// Longest accepted category label, in bytes.
const MAX_CATEGORY_LEN: u32 = 64;

/// Highest article price: 1_000_000 cents = $10,000.00.
const MAX_PRICE_USD_CENTS: u64 = 1_000_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the article's author.
    NotAuthorized = 100,
    /// Price outside 1 ..= 1_000_000 USD cents.
    InvalidPrice = 101,
    /// Article ID never assigned, or article deactivated (purchase paths
    /// collapse both causes into this one code).
    ArticleNotFound = 102,
    /// This buyer already owns this article.
    AlreadyPurchased = 103,
    /// `init` called twice.
    AlreadyInitialized = 104,
    /// Token or oracle configuration read before `init`.
    NotInitialized = 105,
    /// Oracle feed unset (zero mantissa); wait for the oracle, then retry.
    OracleUnavailable = 106,
    /// Checked arithmetic failed or the feed exponent is unusable.
    Overflow = 107,
    /// Caller-asserted payment amount does not match the oracle-derived one.
    PaymentMismatch = 108,
    /// A string argument exceeds its length bound.
    InvalidInput = 109,
}

/// How a purchase settles. Internal to the shared purchase routine; the
/// recorded [`PaymentToken`] tag is derived from it.
enum PaymentMethod {
    /// Native gas token; the caller asserts the amount it expects to pay and
    /// the contract independently recomputes it from the oracle.
    Stx { offered_amount: i128 },
    /// BTC-pegged token; amount derived from the BTC/USD feed.
    Sbtc,
    /// USD-pegged token; amount derived from the fixed 1:1 peg, no oracle.
    Usdcx,
}

#[contract]
pub struct ContentRegistry;

#[contractimpl]
impl ContentRegistry {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Wire up the token and oracle collaborators.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `admin` may later rotate the oracle via [`Self::set_oracle`] and
    ///   must sign the transaction.
    pub fn init(
        env: Env,
        admin: Address,
        stx_token: Address,
        sbtc_token: Address,
        usdcx_token: Address,
        oracle: Address,
    ) {
        admin.require_auth();
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        storage::set_config(&env, &admin, &stx_token, &sbtc_token, &usdcx_token, &oracle);
    }

    /// Point the registry at a different oracle contract.
    ///
    /// - `caller` must be the `init` admin.
    pub fn set_oracle(env: Env, caller: Address, oracle: Address) {
        caller.require_auth();
        let admin = ok_or_panic(&env, storage::get_admin(&env));
        if caller != admin {
            panic_with_error!(&env, Error::NotAuthorized);
        }
        storage::set_oracle(&env, &oracle);
    }

    // ─────────────────────────────────────────────────────────
    // Article catalog
    // ─────────────────────────────────────────────────────────

    /// Publish a new priced article and return its ID.
    ///
    /// IDs are assigned densely starting at 1, in call order, regardless of
    /// author. The article starts active with `published_at` set to the
    /// current ledger sequence.
    pub fn publish_article(
        env: Env,
        author: Address,
        title: String,
        content_ref: String,
        price_usd_cents: u64,
        category: String,
    ) -> u64 {
        author.require_auth();
        Self::require_valid_price(&env, price_usd_cents);
        if title.len() > MAX_TITLE_LEN
            || content_ref.len() > MAX_CONTENT_REF_LEN
            || category.len() > MAX_CATEGORY_LEN
        {
            panic_with_error!(&env, Error::InvalidInput);
        }

        let id = storage::next_article_id(&env);
        let article = Article {
            id,
            author: author.clone(),
            title,
            content_ref,
            price_usd_cents,
            category,
            is_active: true,
            published_at: env.ledger().sequence(),
        };
        storage::save_article(&env, &article);
        accounting::credit_publish(&env, &author);

        events::emit_article_published(&env, id, author, price_usd_cents);
        id
    }

    /// Deactivate an article, blocking all future purchases.
    ///
    /// - `caller` must be the article's author.
    /// - Deactivation is terminal; there is no reactivation entry point.
    ///   Existing purchase records are unaffected.
    pub fn deactivate_article(env: Env, caller: Address, article_id: u64) {
        caller.require_auth();
        let mut article = match storage::load_article(&env, article_id) {
            Some(a) => a,
            None => panic_with_error!(&env, Error::ArticleNotFound),
        };
        if article.author != caller {
            panic_with_error!(&env, Error::NotAuthorized);
        }

        article.is_active = false;
        storage::save_article(&env, &article);

        events::emit_article_deactivated(&env, article_id, caller);
    }

    /// Change an article's USD-cent price.
    ///
    /// - `caller` must be the article's author.
    /// - `new_price` is validated exactly like a publish price.
    pub fn update_article_price(env: Env, caller: Address, article_id: u64, new_price: u64) {
        caller.require_auth();
        let mut article = match storage::load_article(&env, article_id) {
            Some(a) => a,
            None => panic_with_error!(&env, Error::ArticleNotFound),
        };
        if article.author != caller {
            panic_with_error!(&env, Error::NotAuthorized);
        }
        Self::require_valid_price(&env, new_price);

        let old_price = article.price_usd_cents;
        article.price_usd_cents = new_price;
        storage::save_article(&env, &article);

        events::emit_article_price_updated(&env, article_id, old_price, new_price);
    }

    // ─────────────────────────────────────────────────────────
    // Purchases
    // ─────────────────────────────────────────────────────────

    /// Buy an article with the native gas token.
    ///
    /// The contract derives the fair payment from the STX/USD oracle feed
    /// and compares it against `offered_amount`; a mismatch fails with
    /// `Error::PaymentMismatch` before any transfer. Callers quote the
    /// amount they were shown; the oracle, not the caller, sets the price.
    pub fn purchase_with_stx(env: Env, buyer: Address, article_id: u64, offered_amount: i128) {
        Self::execute_purchase(
            &env,
            &buyer,
            article_id,
            PaymentMethod::Stx { offered_amount },
        );
    }

    /// Buy an article with the BTC-pegged token, at the BTC/USD feed rate.
    pub fn purchase_with_sbtc(env: Env, buyer: Address, article_id: u64) {
        Self::execute_purchase(&env, &buyer, article_id, PaymentMethod::Sbtc);
    }

    /// Buy an article with the USD-pegged token at the fixed 1:1 peg.
    pub fn purchase_with_usdcx(env: Env, buyer: Address, article_id: u64) {
        Self::execute_purchase(&env, &buyer, article_id, PaymentMethod::Usdcx);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Return the article, active or not. `None` for an unassigned ID.
    ///
    /// Note the asymmetry with purchases: a deactivated article is still
    /// visible here but indistinguishable from a missing one to buyers.
    pub fn get_article(env: Env, article_id: u64) -> Option<Article> {
        storage::load_article(&env, article_id)
    }

    /// True if `buyer` has completed a purchase of `article_id`.
    pub fn has_purchased(env: Env, article_id: u64, buyer: Address) -> bool {
        storage::has_purchase(&env, article_id, &buyer)
    }

    /// The purchase record for `(article_id, buyer)`, if one exists.
    pub fn get_purchase_info(env: Env, article_id: u64, buyer: Address) -> Option<Purchase> {
        storage::load_purchase(&env, article_id, &buyer)
    }

    /// An author's totals; zeroed for an author with no history.
    pub fn get_writer_stats(env: Env, author: Address) -> WriterStats {
        storage::load_writer_stats(&env, &author)
    }

    /// A buyer's totals; zeroed for a buyer with no history.
    pub fn get_reader_stats(env: Env, buyer: Address) -> ReaderStats {
        storage::load_reader_stats(&env, &buyer)
    }

    /// Platform-wide totals.
    pub fn get_platform_stats(env: Env) -> PlatformStats {
        storage::load_platform_stats(&env)
    }

    /// Net USD cents an author receives for a sale at `price_usd_cents`.
    pub fn calculate_writer_amount(_env: Env, price_usd_cents: u64) -> u64 {
        pricing::writer_amount(price_usd_cents)
    }

    /// USD cents the platform retains for a sale at `price_usd_cents`.
    pub fn calculate_platform_fee(_env: Env, price_usd_cents: u64) -> u64 {
        pricing::platform_fee(price_usd_cents)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    /// The one purchase routine behind all three entry points.
    ///
    /// Ordering matters: eligibility and once-per-buyer checks precede the
    /// amount resolution (which may call the oracle), which precedes the
    /// transfer, which precedes every state write. Any panic along the way
    /// leaves the ledger untouched.
    fn execute_purchase(env: &Env, buyer: &Address, article_id: u64, method: PaymentMethod) {
        buyer.require_auth();

        // Deactivated and never-assigned collapse into the same error:
        // deactivation is purchase-blocking but not existence-destroying.
        let article = match storage::load_article(env, article_id) {
            Some(a) if a.is_active => a,
            _ => panic_with_error!(env, Error::ArticleNotFound),
        };

        if storage::has_purchase(env, article_id, buyer) {
            panic_with_error!(env, Error::AlreadyPurchased);
        }

        let price = article.price_usd_cents;
        let (token_address, token_used, amount) = match method {
            PaymentMethod::Stx { offered_amount } => {
                let expected = Self::oracle_amount(
                    env,
                    price,
                    oracle::stx_usd_feed(env),
                    pricing::STX_DECIMALS,
                );
                if offered_amount != expected {
                    panic_with_error!(env, Error::PaymentMismatch);
                }
                let token = ok_or_panic(env, storage::get_stx_token(env));
                (token, PaymentToken::Stx, expected)
            }
            PaymentMethod::Sbtc => {
                let amount = Self::oracle_amount(
                    env,
                    price,
                    oracle::btc_usd_feed(env),
                    pricing::SBTC_DECIMALS,
                );
                let token = ok_or_panic(env, storage::get_sbtc_token(env));
                (token, PaymentToken::Sbtc, amount)
            }
            PaymentMethod::Usdcx => {
                let token = ok_or_panic(env, storage::get_usdcx_token(env));
                (token, PaymentToken::Usdcx, pricing::usd_to_pegged_amount(price))
            }
        };

        // An insufficient balance traps inside the token contract, which
        // unwinds this whole invocation before any record is written.
        let token_client = token::Client::new(env, &token_address);
        token_client.transfer(buyer, &env.current_contract_address(), &amount);

        let purchase = Purchase {
            token_used: token_used.clone(),
            amount_paid: amount,
            purchased_at: env.ledger().sequence(),
        };
        storage::save_purchase(env, article_id, buyer, &purchase);
        accounting::credit_sale(env, &article.author, buyer, price);

        events::emit_article_purchased(env, article_id, buyer.clone(), token_used, amount);
    }

    /// Read `feed_id` from the configured oracle and convert `price` into
    /// the asset's smallest unit.
    fn oracle_amount(
        env: &Env,
        price_usd_cents: u64,
        feed_id: soroban_sdk::BytesN<32>,
        token_decimals: u32,
    ) -> i128 {
        let oracle_address = ok_or_panic(env, storage::get_oracle(env));
        let feed = PriceOracleClient::new(env, &oracle_address).read_price_feed(&feed_id);
        ok_or_panic(
            env,
            pricing::usd_to_token_amount(price_usd_cents, &feed, token_decimals),
        )
    }

    fn require_valid_price(env: &Env, price_usd_cents: u64) {
        if price_usd_cents == 0 || price_usd_cents > MAX_PRICE_USD_CENTS {
            panic_with_error!(env, Error::InvalidPrice);
        }
    }
}

/// Lift a typed result into the contract's panic-based failure channel.
fn ok_or_panic<T>(env: &Env, result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}
