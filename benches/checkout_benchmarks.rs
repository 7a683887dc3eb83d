//! Performance benchmarks for the tool rental checkout engine.
//!
//! Covers day counting over long rentals, a full library checkout, and a
//! checkout round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use tool_rental::api::{AppState, create_router};
use tool_rental::calculation::count_chargeable_days;
use tool_rental::checkout::{Checkout, CheckoutRequest};
use tool_rental::config::{Catalog, ConfigLoader, PolicyCatalog};
use tool_rental::models::RentalPeriod;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_catalog() -> Catalog {
    ConfigLoader::load("./config/catalog")
        .expect("Failed to load catalog")
        .into_catalog()
}

/// Benchmark: chargeable day counting for growing rental lengths.
fn bench_count_chargeable_days(c: &mut Criterion) {
    let catalog = load_catalog();
    let policy = catalog.policy_for_type("Chainsaw").expect("Chainsaw policy");
    let start = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();

    let mut group = c.benchmark_group("count_chargeable_days");
    for days in [7u32, 30, 365, 3650] {
        let period = RentalPeriod::new(start, days).unwrap();
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &period, |b, period| {
            b.iter(|| count_chargeable_days(black_box(period), black_box(policy)))
        });
    }
    group.finish();
}

/// Benchmark: validation, lookup, counting and pricing for one request.
fn bench_checkout(c: &mut Criterion) {
    let catalog = load_catalog();
    let checkout = Checkout::from_catalog(&catalog);
    let request = CheckoutRequest::new("LADW", 3, 10, "7/2/20");

    c.bench_function("checkout_ladder", |b| {
        b.iter(|| checkout.checkout(black_box(&request)).unwrap())
    });
}

/// Benchmark: POST /checkout through the router.
fn bench_http_checkout(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_catalog()));
    let body = serde_json::json!({
        "tool_code": "CHNS",
        "rental_day_count": 5,
        "discount_percent": 25,
        "checkout_date": "7/2/15"
    })
    .to_string();

    c.bench_function("http_checkout", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/checkout")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_count_chargeable_days,
    bench_checkout,
    bench_http_checkout
);
criterion_main!(benches);
