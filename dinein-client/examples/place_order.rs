//! Place an order against a running backend
//!
//! ```sh
//! DINEIN_BASE_URL=http://localhost:4000 cargo run --example place_order -- 1/table-4 SAVE50
//! ```

use anyhow::{Context, Result};
use dinein_client::logging::init_logger_with_level;
use dinein_client::menu::MenuView;
use dinein_client::{CartSession, ClientConfig, DineInClient, qr};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger_with_level(std::env::var("LOG_LEVEL").ok().as_deref());

    let mut args = std::env::args().skip(1);
    let qr_payload = args.next().unwrap_or_else(|| "1/table-1".to_string());
    let coupon = args.next();

    let client = DineInClient::new(ClientConfig::from_env()).context("failed to build client")?;
    qr::apply_table_qr(client.session(), &qr_payload)?;

    let menu = MenuView::load(&client).await.context("failed to load menu")?;
    let Some(dish) = menu.dishes().iter().find(|d| d.is_active) else {
        println!("No dishes available.");
        return Ok(());
    };
    menu.add_to_cart(dish.id)?;

    let mut cart = CartSession::open(&client, &[], None)?;
    if let Some(notice) = cart.newly_added_notice() {
        println!("{}", notice);
    }
    if let Some(code) = coupon {
        match cart.apply_coupon(&code).await {
            Ok(discount) => println!("Coupon applied: Rs {} off", discount),
            Err(e) => println!("{}", e.user_message()),
        }
    }
    println!("Payable: Rs {}", cart.payable());

    let outcome = cart.submit().await.context("failed to place order")?;
    println!("{} ({})", outcome.notice(), outcome.order_id);
    let next = outcome.redirect.wait().await;
    println!("-> {}", next);
    Ok(())
}
