//! Demonstrates TaskEither pipelines with tracing
//!
//! Run with: cargo run --example checkout_pipeline --features "tracing async"

use std::time::Duration;

use tidewater::{Either, Task, TaskEither, Thrown};

#[derive(Debug, Clone)]
struct Cart {
    id: u32,
    skus: Vec<u32>,
}

#[derive(Debug)]
struct Receipt {
    cart_id: u32,
    total_cents: u64,
}

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting checkout demo");

    for cart in [
        Cart { id: 1, skus: vec![10, 20, 30] },
        Cart { id: 2, skus: vec![10, 404] },
        Cart { id: 3, skus: vec![] },
    ] {
        let cart_id = cart.id;
        let outcome = checkout(cart)
            .fold(
                |e| format!("checkout failed: {}", e),
                |r| format!("charged {} cents for cart {}", r.total_cents, r.cart_id),
            )
            .run()
            .await;
        tracing::info!(cart_id, "{}", outcome);
    }

    // Re-running a task runs it again from scratch
    let clock = Task::new(|| async { std::time::Instant::now() });
    let first = clock.run().await;
    let second = clock.run().await;
    tracing::info!("re-run moved forward: {}", second >= first);
}

fn checkout(cart: Cart) -> TaskEither<String, Receipt> {
    let cart_id = cart.id;
    TaskEither::from_either(non_empty(cart))
        .flat_map(|cart| {
            let id = cart.id;
            price_all(cart.skus).map(move |total_cents| (id, total_cents))
        })
        .flat_map(|(cart_id, total_cents)| charge(cart_id, total_cents))
        .tap_left(|e| tracing::warn!("checkout step failed: {}", e))
        .instrument(tracing::info_span!("checkout", cart_id))
}

fn non_empty(cart: Cart) -> Either<String, Cart> {
    Either::right(cart).filter_or_else(|c| !c.skus.is_empty(), || "cart is empty".to_string())
}

// Prices are looked up concurrently; the first unknown SKU in cart order fails the lookup.
fn price_all(skus: Vec<u32>) -> TaskEither<String, u64> {
    TaskEither::all(skus.into_iter().map(price))
        .map(|prices| prices.into_iter().sum())
}

fn price(sku: u32) -> TaskEither<String, u64> {
    TaskEither::try_catch(
        move || async move {
            if sku == 404 {
                Err(format!("unknown sku {}", sku))
            } else {
                Ok(u64::from(sku) * 125)
            }
        },
        |thrown: Thrown<String>| thrown.to_string(),
    )
    .delay(Duration::from_millis(u64::from(sku % 7) * 10))
    .instrument(tracing::debug_span!("price", sku))
}

fn charge(cart_id: u32, total_cents: u64) -> TaskEither<String, Receipt> {
    TaskEither::new(move || async move {
        tracing::debug!(total_cents, "charging card");
        Either::right(Receipt {
            cart_id,
            total_cents,
        })
    })
}
