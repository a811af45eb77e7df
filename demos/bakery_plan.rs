//! 烘焙坊生產優化完整範例
//!
//! 展示從目錄載入、庫存調整到生產建議的完整流程

use prodplan::catalog::{CatalogError, RawMaterialDraft};
use prodplan::{logging, seed_demo_catalog, InMemoryCatalog, PlannerConfig, ProductionOptimizer};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("===== Bakery Production Plan Example =====\n");

    // 步驟 1: 載入配置（可用 PRODPLAN_CONFIG 指定 JSON 檔）
    println!("[1] Load Configuration");
    let config = match std::env::var("PRODPLAN_CONFIG") {
        Ok(path) => PlannerConfig::from_json_file(&path)?,
        Err(_) => PlannerConfig::default(),
    };
    println!("    {:?}\n", config);

    // 步驟 2: 載入示範目錄
    println!("[2] Seed Demo Catalog");
    let mut catalog = InMemoryCatalog::new();
    let outcome = seed_demo_catalog(&mut catalog, &config)?;
    println!("    {:?}\n", outcome);

    // 步驟 3: 顯示目前庫存
    println!("[3] Current Stock");
    for material in catalog.list_raw_materials() {
        let mark = if material.is_in_stock() { "" } else { " (out of stock)" };
        println!(
            "    {} {:<12} {}{}",
            material.code, material.name, material.stock_quantity, mark
        );
    }
    println!();

    // 步驟 4: 執行優化
    println!("[4] Optimize");
    let optimizer = ProductionOptimizer::new(config.clone());
    let plan = optimizer.plan_from_sources(&catalog, &catalog)?;
    print_plan(&plan);

    // 步驟 5: 補貨奶油後重新計算
    println!("[5] Restock Butter and Re-optimize");
    let butter = catalog
        .list_raw_materials()
        .iter()
        .find(|m| m.code == "MP005")
        .cloned()
        .ok_or(CatalogError::Validation {
            field: "code".to_string(),
            message: "MP005 not found".to_string(),
        })?;
    catalog.update_raw_material(
        butter.id,
        RawMaterialDraft::new(butter.code, butter.name, Decimal::from(400)),
    )?;

    let plan = optimizer.plan_from_sources(&catalog, &catalog)?;
    print_plan(&plan);

    println!("===== Production Plan Complete =====\n");

    Ok(())
}

fn print_plan(plan: &prodplan::ProductionPlan) {
    println!(
        "    Completed in {} ms",
        plan.calculation_time_ms.unwrap_or(0)
    );
    for suggestion in &plan.suggestions {
        println!(
            "      - {} {:<16} | Qty: {:>3} | Unit: {:>6} | Total: {:>8}",
            suggestion.product_code,
            suggestion.product_name,
            suggestion.quantity,
            suggestion.unit_price,
            suggestion.total_value
        );
    }
    println!(
        "    Products: {} | Units: {} | Grand Total: {}",
        plan.product_count(),
        plan.total_units(),
        plan.grand_total()
    );

    if !plan.warnings.is_empty() {
        println!("    Warnings:");
        for warning in &plan.warnings {
            println!("      - [{}] {}", warning.product_code, warning.message);
        }
    }
    println!();
}
