//! Example: Placing and cancelling an order with the blocking client.
//!
//! Run with: cargo run --example blocking_trading
//!
//! Places a small limit buy well below the market, looks it up by its client
//! id, then cancels it. Requires WALLEX_API_KEY and WALLEX_PLACE_ORDER=1.

use std::env;

use wallex_api_client::blocking::WallexClient;
use wallex_api_client::rest::private::OrderParams;
use wallex_api_client::{Number, OrderSide};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let client = WallexClient::new()?;
    if !client.as_async().has_credentials() {
        println!("Set WALLEX_API_KEY to run this example.");
        return Ok(());
    }

    let book = client.order_book("USDTTMN")?;
    let Some(best_bid) = book.best_bid() else {
        println!("No bids on USDTTMN.");
        return Ok(());
    };
    let price = Number::from((best_bid.price.as_f64() * 0.8).floor());
    println!("Best bid {}, placing at {}", best_bid.price, price);

    if env::var("WALLEX_PLACE_ORDER").ok().as_deref() != Some("1") {
        println!("Set WALLEX_PLACE_ORDER=1 to actually place the order.");
        return Ok(());
    }

    let client_id = format!("demo-{}", std::process::id());
    let params = OrderParams::limit("USDTTMN", OrderSide::Buy, price, "1").client_id(&client_id);
    let order = client.place_order(&params)?;
    println!("Placed: {} {} @ {} [{}]", order.side, order.orig_qty, order.price, order.status);

    let order = client.order(&client_id)?;
    println!("Looked up: active={}", order.active);

    client.cancel_order(&client_id)?;
    println!("Cancelled {}", client_id);

    Ok(())
}
