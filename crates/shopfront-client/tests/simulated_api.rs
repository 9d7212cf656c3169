//! Behavior of the simulated API under concurrent and repeated use.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use shopfront_client::{
    retry, AlwaysFail, BackoffStrategy, ClientConfig, LatencyConfig, NeverFail, RandomFailure,
    RetryPolicy, SimulatedClient, StorefrontApi,
};
use shopfront_commerce::prelude::*;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::bundled().expect("bundled dataset loads"))
}

fn order() -> OrderRequest {
    let catalog = catalog();
    let store = CartStore::new();
    let console = catalog.get(&ProductId::new("p3")).expect("p3 exists");
    store.add_to_cart(console, Variation::Refurbished);

    let customer = CustomerInfo::new("Ada", "222-555-1234", "1 Main St", "4111-1111-1111-1111");
    OrderRequest::from_cart(&store.items(), customer).expect("cart is not empty")
}

#[tokio::test]
async fn concurrent_submissions_get_distinct_ids() {
    let client = SimulatedClient::new(catalog(), LatencyConfig::instant(), NeverFail);
    let order = order();

    let results = join_all((0..50).map(|_| client.submit_order(&order))).await;

    let ids: HashSet<_> = results
        .into_iter()
        .map(|r| r.expect("never fails").order_id)
        .collect();
    assert_eq!(ids.len(), 50);
}

#[tokio::test(start_paused = true)]
async fn faster_call_is_not_blocked_by_slower_one() {
    let latency = LatencyConfig {
        list_ms: 800,
        fetch_ms: 500,
        submit_ms: 1000,
    };
    let client = SimulatedClient::new(catalog(), latency, NeverFail);
    let start = tokio::time::Instant::now();

    let list = async {
        let products = client.list_products().await;
        (products, start.elapsed())
    };
    let fetch = async {
        let product = client.fetch_product(&ProductId::new("p5")).await;
        (product, start.elapsed())
    };

    let ((products, list_done), (product, fetch_done)) = tokio::join!(list, fetch);

    assert_eq!(products.unwrap().len(), 10);
    assert_eq!(product.unwrap().name(), "Turbo Kart Rally");
    assert!(fetch_done < list_done);
    assert!(fetch_done < Duration::from_millis(800));
}

#[tokio::test]
async fn list_fails_about_ten_percent_of_the_time() {
    let client = SimulatedClient::new(
        catalog(),
        LatencyConfig::instant(),
        RandomFailure::seeded(0.1, 7),
    );
    let expected = catalog();

    let mut failures = 0;
    for _ in 0..2_000 {
        match client.list_products().await {
            Ok(products) => assert_eq!(products.as_slice(), expected.products()),
            Err(err) => {
                assert_eq!(err.status_code(), 500);
                failures += 1;
            }
        }
    }

    assert!((120..=280).contains(&failures), "got {} failures", failures);
}

#[tokio::test]
async fn unknown_product_always_not_found() {
    let client = SimulatedClient::from_config(catalog(), &ClientConfig::instant().with_seed(1));

    for _ in 0..100 {
        let err = client
            .fetch_product(&ProductId::new("does-not-exist"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

#[tokio::test]
async fn retry_layers_on_top_of_the_client() {
    let flaky = SimulatedClient::new(
        catalog(),
        LatencyConfig::instant(),
        RandomFailure::seeded(0.5, 11),
    );
    let policy = RetryPolicy::new(20).with_backoff(BackoffStrategy::None);

    let products = retry(&policy, || flaky.list_products()).await.unwrap();
    assert_eq!(products.len(), 10);

    let down = SimulatedClient::new(catalog(), LatencyConfig::instant(), AlwaysFail);
    let order = order();
    let err = retry(&policy, || down.submit_order(&order))
        .await
        .unwrap_err();
    assert!(err.is_transient());
}
