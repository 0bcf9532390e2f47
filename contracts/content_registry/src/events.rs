use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::PaymentToken;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArticlePublished {
    pub article_id: u64,
    pub author: Address,
    pub price_usd_cents: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArticleDeactivated {
    pub article_id: u64,
    pub author: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArticlePriceUpdated {
    pub article_id: u64,
    pub old_price_usd_cents: u64,
    pub new_price_usd_cents: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArticlePurchased {
    pub article_id: u64,
    pub buyer: Address,
    pub token_used: PaymentToken,
    pub amount_paid: i128,
}

pub fn emit_article_published(env: &Env, article_id: u64, author: Address, price_usd_cents: u64) {
    let topics = (symbol_short!("published"), article_id);
    let data = ArticlePublished {
        article_id,
        author,
        price_usd_cents,
    };
    env.events().publish(topics, data);
}

pub fn emit_article_deactivated(env: &Env, article_id: u64, author: Address) {
    let topics = (symbol_short!("retired"), article_id);
    let data = ArticleDeactivated { article_id, author };
    env.events().publish(topics, data);
}

pub fn emit_article_price_updated(
    env: &Env,
    article_id: u64,
    old_price_usd_cents: u64,
    new_price_usd_cents: u64,
) {
    let topics = (symbol_short!("repriced"), article_id);
    let data = ArticlePriceUpdated {
        article_id,
        old_price_usd_cents,
        new_price_usd_cents,
    };
    env.events().publish(topics, data);
}

pub fn emit_article_purchased(
    env: &Env,
    article_id: u64,
    buyer: Address,
    token_used: PaymentToken,
    amount_paid: i128,
) {
    let topics = (symbol_short!("purchased"), article_id);
    let data = ArticlePurchased {
        article_id,
        buyer,
        token_used,
        amount_paid,
    };
    env.events().publish(topics, data);
}
