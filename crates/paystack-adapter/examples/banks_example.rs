/*
[INPUT]:  PAYSTACK_SECRET_KEY environment variable
[OUTPUT]: Nigerian bank list and a resolved account name
[POS]:    Examples - Banks resource
[UPDATE]: When bank endpoints change
*/

use paystack_adapter::*;

/// Example: list banks and resolve an account number
///
/// Uses a test secret key; Paystack's test mode resolves account
/// 0022728151 at bank 063.
#[tokio::main]
async fn main() {
    println!("=== Paystack Banks Example ===\n");

    let secret_key = std::env::var("PAYSTACK_SECRET_KEY").unwrap_or_default();
    let client = match PaystackClient::from_secret_key(secret_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created\n");

    let cancel = CancellationToken::new();

    println!("Listing banks in nigeria...");
    let request = ListBanksRequest {
        country: Some("nigeria".to_string()),
        per_page: 5,
        ..ListBanksRequest::default()
    };
    match client.banks().list_banks(&request, &cancel).await {
        Ok(response) => {
            for bank in response.data.unwrap_or_default() {
                println!("  {} ({})", bank.name, bank.code);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nResolving account 0022728151 at bank 063...");
    let request = ResolveAccountRequest::new("0022728151", "063");
    match client.banks().resolve_account(&request, &cancel).await {
        Ok(response) => println!("✓ Account: {:?}", response.data),
        Err(e) if e.is_api_error() => println!("✗ Rejected by Paystack: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Banks example complete");
}
