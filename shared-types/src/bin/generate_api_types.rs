use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Profile types
    types.push(clean_type(Country::export_to_string()?));
    types.push(clean_type(ProfileStats::export_to_string()?));
    types.push(clean_type(SalesSummary::export_to_string()?));
    types.push(clean_type(ShopItem::export_to_string()?));
    types.push(clean_type(Ratings::export_to_string()?));
    types.push(clean_type(ProfileRecord::export_to_string()?));
    types.push(clean_type(ProfileMetrics::export_to_string()?));

    // Transaction types
    types.push(clean_type(TransactionType::export_to_string()?));
    types.push(clean_type(TransactionRecord::export_to_string()?));
    types.push(clean_type(Period::export_to_string()?));
    types.push(clean_type(TransactionSummary::export_to_string()?));
    types.push(clean_type(TransactionHistory::export_to_string()?));
    types.push(clean_type(TransactionMetrics::export_to_string()?));

    // Analysis endpoint types
    types.push(clean_type(AnalysisKind::export_to_string()?));
    types.push(clean_type(AnalyzeRequest::export_to_string()?));
    types.push(clean_type(ProfileAnalysis::export_to_string()?));
    types.push(clean_type(TransactionAnalysis::export_to_string()?));
    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output_dir = Path::new("../web/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // All definitions land in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
