use std::time::Instant;

mod setup;
use setup::TestEnv;
use soroban_sdk::{vec, Address, Vec};

// ============================================================================
// TESTES DE PERFORMANCE - KEOCHAIN TOKEN
// ============================================================================

#[test]
fn test_performance_mint() {
    let t = TestEnv::new();
    t.jump_days(365);

    let start = Instant::now();
    t.client.mint(&t.owner);
    let duration = start.elapsed();

    println!("=== Performance: Mint (365 dias) ===");
    println!("Time: {:.3}ms", duration.as_secs_f64() * 1000.0);
    t.env.budget().print();
    println!();
}

#[test]
fn test_performance_transfer() {
    let t = TestEnv::new();
    let user = t.create_user();

    let start = Instant::now();
    t.client.transfer(&t.owner, &user, &500_000);
    let duration = start.elapsed();

    println!("=== Performance: Transfer ===");
    println!("Time: {:.3}ms", duration.as_secs_f64() * 1000.0);
    t.env.budget().print();
    println!();
}

#[test]
fn test_performance_bulk_transfer() {
    let t = TestEnv::new();

    let mut destinations: Vec<Address> = vec![&t.env];
    let mut amounts: Vec<i128> = vec![&t.env];
    for i in 1..=20 {
        destinations.push_back(t.create_user());
        amounts.push_back(i);
    }

    let start = Instant::now();
    t.client.bulk_transfer(&t.owner, &destinations, &amounts);
    let duration = start.elapsed();

    println!("=== Performance: Bulk Transfer (20 destinos) ===");
    println!("Time: {:.3}ms", duration.as_secs_f64() * 1000.0);
    t.env.budget().print();
    println!();
}
