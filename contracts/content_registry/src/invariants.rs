#![allow(dead_code)]

extern crate std;

use crate::pricing;
use crate::types::{Article, PlatformStats, ReaderStats, WriterStats};

/// INV-1: The fee split conserves value. For any price, writer amount plus
/// platform fee plus the rounding gap equals the price exactly, and the gap
/// is at most one cent.
pub fn assert_fee_split_conserved(price_usd_cents: u64) {
    let writer = pricing::writer_amount(price_usd_cents);
    let fee = pricing::platform_fee(price_usd_cents);
    let gap = pricing::rounding_gap(price_usd_cents);
    assert_eq!(
        writer + fee + gap,
        price_usd_cents,
        "INV-1 violated: {} + {} + {} != {}",
        writer,
        fee,
        gap,
        price_usd_cents
    );
    assert!(
        gap <= 1,
        "INV-1 violated: rounding gap {} exceeds one cent for price {}",
        gap,
        price_usd_cents
    );
}

/// INV-2: Article IDs are dense and sequential starting from 1.
pub fn assert_sequential_ids(ids: &[u64]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            *id,
            i as u64 + 1,
            "INV-2 violated: expected id {}, got {}",
            i + 1,
            id
        );
    }
}

/// INV-3: Article fields other than `price_usd_cents` and `is_active` never
/// change after publication.
pub fn assert_article_immutable_fields(original: &Article, current: &Article) {
    assert_eq!(original.id, current.id, "INV-3 violated: id changed");
    assert_eq!(
        original.author, current.author,
        "INV-3 violated: author changed"
    );
    assert_eq!(
        original.title, current.title,
        "INV-3 violated: title changed"
    );
    assert_eq!(
        original.content_ref, current.content_ref,
        "INV-3 violated: content_ref changed"
    );
    assert_eq!(
        original.category, current.category,
        "INV-3 violated: category changed"
    );
    assert_eq!(
        original.published_at, current.published_at,
        "INV-3 violated: published_at changed"
    );
}

/// INV-4: Writer totals equal the sum over the underlying records.
/// `sale_prices` are the gross USD-cent prices of every sale of this
/// author's articles, in any order.
pub fn assert_writer_stats_consistent(
    stats: &WriterStats,
    published_articles: u32,
    sale_prices: &[u64],
) {
    assert_eq!(
        stats.total_articles, published_articles,
        "INV-4 violated: article count drifted"
    );
    assert_eq!(
        stats.total_sales,
        sale_prices.len() as u32,
        "INV-4 violated: sale count drifted"
    );
    let expected_earnings: u64 = sale_prices.iter().map(|p| pricing::writer_amount(*p)).sum();
    assert_eq!(
        stats.total_earnings, expected_earnings,
        "INV-4 violated: earnings drifted"
    );
}

/// INV-5: Reader totals equal the sum over the underlying records.
pub fn assert_reader_stats_consistent(stats: &ReaderStats, purchase_prices: &[u64]) {
    assert_eq!(
        stats.total_purchases,
        purchase_prices.len() as u32,
        "INV-5 violated: purchase count drifted"
    );
    let expected_spent: u64 = purchase_prices.iter().sum();
    assert_eq!(
        stats.total_spent, expected_spent,
        "INV-5 violated: gross spend drifted"
    );
}

/// INV-6: Platform totals equal the sum over the underlying records, and the
/// dust bucket accounts for every cent the 97/3 split leaked.
pub fn assert_platform_stats_consistent(
    stats: &PlatformStats,
    published_articles: u32,
    sale_prices: &[u64],
) {
    assert_eq!(
        stats.total_articles, published_articles,
        "INV-6 violated: article count drifted"
    );
    let expected_revenue: u64 = sale_prices.iter().map(|p| pricing::platform_fee(*p)).sum();
    assert_eq!(
        stats.total_revenue, expected_revenue,
        "INV-6 violated: revenue drifted"
    );
    let expected_dust: u64 = sale_prices.iter().map(|p| pricing::rounding_gap(*p)).sum();
    assert_eq!(
        stats.rounding_dust, expected_dust,
        "INV-6 violated: rounding dust drifted"
    );
    assert_eq!(
        stats.platform_fee_bps,
        pricing::PLATFORM_FEE_BPS,
        "INV-6 violated: fee rate changed"
    );
}
