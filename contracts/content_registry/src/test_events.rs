extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{ArticleDeactivated, ArticlePriceUpdated, ArticlePublished, ArticlePurchased};
use crate::testutils::MockPriceOracle;
use crate::types::PaymentToken;
use crate::{ContentRegistry, ContentRegistryClient};
use soroban_sdk::symbol_short;

fn setup() -> (Env, ContentRegistryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(ContentRegistry, ());
    let client = ContentRegistryClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let stx = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let sbtc = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let usdcx = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let oracle_id = env.register(MockPriceOracle, ());

    client.init(&admin, &stx, &sbtc, &usdcx, &oracle_id);
    (env, client, usdcx)
}

fn publish(env: &Env, client: &ContentRegistryClient, author: &Address, price: u64) -> u64 {
    client.publish_article(
        author,
        &String::from_str(env, "Test Article"),
        &String::from_str(env, "QmHash"),
        &price,
        &String::from_str(env, "tech"),
    )
}

#[test]
fn test_article_published_event() {
    let (env, client, _) = setup();
    let writer = Address::generate(&env);

    let id = publish(&env, &client, &writer, 50);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("published"), article_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("published").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ArticlePublished = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ArticlePublished {
            article_id: id,
            author: writer.clone(),
            price_usd_cents: 50,
        }
    );
}

#[test]
fn test_article_deactivated_event() {
    let (env, client, _) = setup();
    let writer = Address::generate(&env);

    let id = publish(&env, &client, &writer, 50);
    client.deactivate_article(&writer, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("retired").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ArticleDeactivated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ArticleDeactivated {
            article_id: id,
            author: writer.clone(),
        }
    );
}

#[test]
fn test_article_price_updated_event() {
    let (env, client, _) = setup();
    let writer = Address::generate(&env);

    let id = publish(&env, &client, &writer, 50);
    client.update_article_price(&writer, &id, &150);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("repriced").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ArticlePriceUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ArticlePriceUpdated {
            article_id: id,
            old_price_usd_cents: 50,
            new_price_usd_cents: 150,
        }
    );
}

#[test]
fn test_article_purchased_event() {
    let (env, client, usdcx) = setup();
    let writer = Address::generate(&env);
    let reader = Address::generate(&env);

    let id = publish(&env, &client, &writer, 50);
    token::StellarAssetClient::new(&env, &usdcx).mint(&reader, &100_000_000);

    client.purchase_with_usdcx(&reader, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("purchased").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ArticlePurchased = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ArticlePurchased {
            article_id: id,
            buyer: reader.clone(),
            token_used: PaymentToken::Usdcx,
            amount_paid: 500_000,
        }
    );
}
