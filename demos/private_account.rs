//! Example: Reading account data.
//!
//! Run with: cargo run --example private_account
//! The API key is read from WALLEX_API_KEY (a `.env` file works too).

use wallex_api_client::rest::WallexClient;
use wallex_api_client::rest::private::{OpenOrdersRequest, TradesRequest};
use wallex_api_client::{OrderSide, WallexError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let client = WallexClient::new();
    if !client.has_credentials() {
        println!("Set WALLEX_API_KEY to run this example.");
        return Ok(());
    }

    let profile = match client.profile().await {
        Ok(profile) => profile,
        Err(WallexError::Unauthorized) => {
            println!("The API key was rejected.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("Account: {} {} (KYC level {})", profile.first_name, profile.last_name, profile.kyc_info.level);

    println!("\n=== Balances ===");
    let balances = client.balances().await?;
    for (asset, balance) in balances.iter().filter(|(_, b)| b.value.as_f64() > 0.0) {
        println!("{}: {} (locked {})", asset, balance.value, balance.locked);
    }

    println!("\n=== Fees (BTCUSDT) ===");
    if let Some(fee) = client.fee_levels().await?.get("BTCUSDT") {
        println!("maker={} taker={} fixed={}", fee.maker_fee, fee.taker_fee, fee.is_fixed);
    }

    println!("\n=== Payout Accounts ===");
    for card in client.banking_cards().await? {
        println!("Card {} ({})", card.card_number, card.status);
    }
    for account in client.bank_accounts().await? {
        println!("IBAN {} at {} ({})", account.iban, account.bank_name, account.status);
    }

    println!("\n=== Open Orders (BTCUSDT) ===");
    let request = OpenOrdersRequest::for_symbol("BTCUSDT");
    for order in client.open_orders(Some(&request)).await? {
        println!(
            "{:?} {} {} @ {} [{}]",
            order.client_order_id, order.side, order.orig_qty, order.price, order.status
        );
    }

    println!("\n=== Recent Buys ===");
    let request = TradesRequest::new().side(OrderSide::Buy);
    for trade in client.trades(Some(&request)).await?.iter().take(5) {
        println!("{} {} @ {} fee={} {}", trade.symbol, trade.quantity, trade.price, trade.fee, trade.fee_asset);
    }

    Ok(())
}
