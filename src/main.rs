use anyhow::Result;
use tracing_subscriber::EnvFilter;

use account_registry::{Account, AccountRegistry, AccountStatus, AccountType, Customer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🏦 Account Registry - in-memory bank account store");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let registry = AccountRegistry::shared();

    // 1. Build and save a savings account (status request gets overridden)
    println!("\n🔧 Building accounts...");
    let savings = Account::builder()
        .with_balance(100.0)
        .with_currency("USD")
        .with_account_type(AccountType::Savings)
        .with_status(AccountStatus::Blocked)
        .with_customer(Customer::new(1, "Alice Example"))
        .build();
    let savings = registry.save(savings);
    println!(
        "✓ Saved account #{} ({}, {})",
        savings.account_id,
        savings.account_type.as_str(),
        savings.account_status.as_str()
    );

    let current = Account::builder()
        .with_balance(-42.0)
        .with_currency("EUR")
        .with_account_type(AccountType::Current)
        .with_status(AccountStatus::Blocked)
        .with_customer(Customer::new(2, "Bob Example"))
        .build();
    let current = registry.save(current);
    println!(
        "✓ Saved account #{} ({}, {})",
        current.account_id,
        current.account_type.as_str(),
        current.account_status.as_str()
    );

    // 2. Search
    println!("\n🔍 Searching overdrawn accounts...");
    let overdrawn = registry.search(|account| account.balance < 0.0);
    println!("✓ Found {} overdrawn account(s)", overdrawn.len());

    // 3. Duplicate (independent copy, same id until saved on its own)
    println!("\n📋 Duplicating account #{}...", savings.account_id);
    let mut copy = savings.duplicate();
    copy.customer.name = "Alice (copy)".to_string();
    println!(
        "✓ Copy keeps id #{}, original customer is still {:?}",
        copy.account_id, savings.customer.name
    );

    // 4. Update + delete
    println!("\n💾 Updating and deleting...");
    let mut updated = current.clone();
    updated.balance = 0.0;
    registry.update(updated);
    registry.delete_by_id(savings.account_id);
    println!("✓ {} account(s) remain", registry.count());

    println!("\n📦 Final registry contents:");
    for account in registry.all_accounts() {
        println!("{}", serde_json::to_string_pretty(&account)?);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 Done (v{})", account_registry::VERSION);

    Ok(())
}
