use chrono::NaiveDate;
use shared_types::{ProfileAnalysis, TextExtractor, TransactionAnalysis};

use crate::metrics::{profile_metrics, transaction_metrics};
use crate::profile::ProfileExtractor;
use crate::transactions::TransactionExtractor;

/// Extract a profile and derive its metrics
pub fn analyze_profile(text: &str, reference_date: NaiveDate) -> ProfileAnalysis {
    analyze_profile_with(&ProfileExtractor::new(reference_date), text)
}

pub fn analyze_profile_with(extractor: &ProfileExtractor, text: &str) -> ProfileAnalysis {
    let profile = extractor.extract(text);
    let metrics = profile_metrics(&profile);

    ProfileAnalysis { profile, metrics }
}

/// Extract a transaction history and derive its metrics
pub fn analyze_transactions(text: &str) -> TransactionAnalysis {
    analyze_transactions_with(&TransactionExtractor::new(), text)
}

pub fn analyze_transactions_with(
    extractor: &TransactionExtractor,
    text: &str,
) -> TransactionAnalysis {
    let history = extractor.extract(text);
    let metrics = transaction_metrics(&history.transactions);

    TransactionAnalysis { history, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared_types::Country;

    #[test]
    fn test_profile_scenario() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let text = "ma_boutique\n300 Abonnés\nÉvaluations des membres (100)\n\
            il y a 2 jours ... merci\nil y a 1 mois ... danke";

        let analysis = analyze_profile(text, today);

        assert_eq!(analysis.profile.sales.by_country[&Country::France], 1);
        assert_eq!(analysis.profile.sales.by_country[&Country::Germany], 1);
        assert_eq!(analysis.profile.sales.by_date.len(), 2);
        assert!((analysis.metrics.engagement_rate - 25.0).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&analysis.metrics.quality_score));
    }

    #[test]
    fn test_transaction_scenario() {
        let text = "Solde initial 0,00 €\n\
            Vente produit X\n+25,00 €\n3 janvier 2024\n\
            Commande Y\n-10,00 €\n5 janvier 2024";

        let analysis = analyze_transactions(text);

        assert_eq!(analysis.history.transactions.len(), 2);
        assert_eq!(analysis.metrics.total_revenue, Decimal::new(2500, 2));
        assert_eq!(analysis.metrics.total_expenses, Decimal::new(1000, 2));
        assert_eq!(analysis.metrics.net_profit, Decimal::new(1500, 2));
        assert_eq!(analysis.metrics.average_order_value, Decimal::new(2500, 2));
        assert_eq!(analysis.metrics.sales_by_period["2024-01"], Decimal::new(1500, 2));
    }

    #[test]
    fn test_oversized_amounts_do_not_overflow() {
        let text = "Vente A\n+70000000000000000000000000000 €\n3 janvier 2024\n\
            Vente B\n+70000000000000000000000000000 €\n4 janvier 2024";

        let analysis = analyze_transactions(text);

        assert_eq!(analysis.history.transactions.len(), 2);
        assert_eq!(analysis.metrics.total_revenue, Decimal::MAX);
        assert_eq!(analysis.metrics.sales_by_period["2024-01"], Decimal::MAX);
        assert_eq!(analysis.metrics.net_profit, Decimal::MAX);
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = analyze_transactions("Vente produit X\n+25,00 €\n3 janvier 2024");
        let json = serde_json::to_value(&analysis).unwrap();

        let first = &json["history"]["transactions"][0];
        assert_eq!(first["type"], "sale");
        assert_eq!(first["amount"], "25.00");
        assert_eq!(first["date"], "2024-01-03");
        assert_eq!(json["history"]["summary"]["period"]["start"], "2024-01-03");
    }
}
