use rental_core::core::{shareholder_distribution, total_collected, MonthlySummary, PaymentStatus};
use rental_core::domain::{Expenses, Shareholder, Tenant};
use rental_core::store::seed;

fn tenant(rent: f64, payment: f64) -> Tenant {
    let mut tenant = Tenant::new("Someone", seed::UNIT_1).with_rent(rent);
    tenant.payment = payment;
    tenant
}

#[test]
fn monthly_totals_for_mixed_payments() {
    let tenants = vec![tenant(2000.0, 2000.0), tenant(1000.0, 800.0), tenant(1000.0, 1200.0)];
    let expenses = Expenses {
        internet: 1585.54,
        ..Expenses::default()
    };

    let summary = MonthlySummary::from_snapshot(&tenants, &expenses);
    assert_eq!(summary.total_expected, 4000.0);
    assert_eq!(summary.total_collected, 4000.0);
    assert_eq!(summary.outstanding_balance, 0.0);
    assert!((summary.net_income - 2414.46).abs() < 1e-9);

    let statuses: Vec<PaymentStatus> = tenants.iter().map(|t| t.balance().status).collect();
    assert_eq!(
        statuses,
        vec![
            PaymentStatus::Paid,
            PaymentStatus::Pending,
            PaymentStatus::AdvancePayment
        ]
    );
}

#[test]
fn collected_ignores_rent() {
    assert_eq!(total_collected([0.0, 500.0, 1250.5]), 1750.5);
    assert_eq!(total_collected(std::iter::empty::<f64>()), 0.0);
}

#[test]
fn distribution_follows_percentages() {
    let shares = shareholder_distribution(2414.46, &seed::shareholders());
    let amounts: Vec<f64> = shares.iter().map(|share| share.amount).collect();
    assert!((amounts[0] - 845.061).abs() < 1e-6);
    assert!((amounts[2] - 724.338).abs() < 1e-6);
    let total: f64 = amounts.iter().sum();
    assert!((total - 2414.46).abs() < 1e-6);
}

#[test]
fn distribution_keeps_order_and_handles_losses() {
    let holders = vec![Shareholder::new("A", 60.0), Shareholder::new("B", 40.0)];
    let shares = shareholder_distribution(-100.0, &holders);
    assert_eq!(shares[0].name, "A");
    assert!((shares[0].amount + 60.0).abs() < 1e-9);
    assert!((shares[1].amount + 40.0).abs() < 1e-9);
}
