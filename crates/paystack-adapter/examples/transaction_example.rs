/*
[INPUT]:  PAYSTACK_SECRET_KEY environment variable, customer email
[OUTPUT]: Checkout URL, verification result and recent transactions
[POS]:    Examples - Transactions resource
[UPDATE]: When transaction endpoints change
*/

use paystack_adapter::*;

/// Example: initialize a checkout, verify it, then list recent transactions
#[tokio::main]
async fn main() {
    println!("=== Paystack Transactions Example ===\n");

    let config = match PaystackConfig::new(PaystackSettings {
        secret_key: std::env::var("PAYSTACK_SECRET_KEY").unwrap_or_default(),
        enable_logging: true,
        log_level: LogLevel::Debug,
        ..PaystackSettings::default()
    }) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };
    let client = match PaystackClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let cancel = CancellationToken::new();

    // 500.00 NGN, expressed in kobo
    let mut request = InitializeTransactionRequest::new("customer@email.com", 50_000);
    request.channels = Some(vec![Channel::Card, Channel::BankTransfer]);

    println!("Initializing transaction...");
    let reference = match client.transactions().initialize(&request, &cancel).await {
        Ok(response) => match response.into_data() {
            Ok(checkout) => {
                println!("✓ Pay at: {}", checkout.authorization_url);
                checkout.reference
            }
            Err(e) => {
                println!("✗ Error: {}", e);
                return;
            }
        },
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nVerifying {}...", reference);
    match client.transactions().verify(&reference, &cancel).await {
        Ok(response) => {
            if let Some(transaction) = response.data {
                println!("✓ Status: {}", transaction.status.as_str());
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nListing abandoned transactions...");
    let request = ListTransactionsRequest {
        per_page: 10,
        status: Some(TransactionStatus::Abandoned),
        ..ListTransactionsRequest::default()
    };
    match client.transactions().list(&request, &cancel).await {
        Ok(response) => {
            let count = response.data.as_ref().map_or(0, Vec::len);
            println!("✓ {} transaction(s)", count);
            if let Some(meta) = response.meta {
                println!("  page {} of {}", meta.page, meta.page_count);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Transactions example complete");
}
