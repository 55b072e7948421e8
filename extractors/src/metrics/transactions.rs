use rust_decimal::Decimal;
use shared_types::{TransactionMetrics, TransactionRecord, TransactionType};
use tracing::debug;

/// `total + amount`, pinned to the nearest bound when the sum leaves the decimal range
pub(crate) fn saturating_add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        debug!("Decimal overflow adding {}, saturating", amount);
        if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Revenue, expenses and groupings in a single pass over `transactions`.
///
/// Positive amounts count as revenue, negative ones as expenses (stored as magnitudes).
/// `average_order_value` is the mean of `sale` amounts rounded to the cent, zero
/// without sales. Sums saturate at the decimal bounds instead of overflowing.
pub fn transaction_metrics(transactions: &[TransactionRecord]) -> TransactionMetrics {
    let mut metrics = TransactionMetrics::default();
    let mut sale_total = Decimal::ZERO;
    let mut sale_count = 0u32;

    for transaction in transactions {
        let amount = transaction.amount;

        if amount > Decimal::ZERO {
            metrics.total_revenue = saturating_add(metrics.total_revenue, amount);
        } else if amount < Decimal::ZERO {
            metrics.total_expenses = saturating_add(metrics.total_expenses, amount.abs());
            let category = metrics
                .expenses_by_category
                .entry(transaction.kind)
                .or_insert(Decimal::ZERO);
            *category = saturating_add(*category, amount.abs());
        }

        let month = transaction.date.format("%Y-%m").to_string();
        let period = metrics.sales_by_period.entry(month).or_insert(Decimal::ZERO);
        *period = saturating_add(*period, amount);

        if transaction.kind == TransactionType::Sale {
            sale_total = saturating_add(sale_total, amount);
            sale_count += 1;
        }
    }

    metrics.net_profit = metrics.total_revenue - metrics.total_expenses;
    if sale_count > 0 {
        metrics.average_order_value = (sale_total / Decimal::from(sale_count)).round_dp(2);
    }

    metrics
}
