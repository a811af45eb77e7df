//! 示範資料載入
//!
//! 一次性、可重複執行：目錄已有原物料時不做任何事。優化器從不呼叫此模組。

use prodplan_core::{BomLine, PlannerConfig};
use rust_decimal::Decimal;

use crate::draft::{ProductDraft, RawMaterialDraft};
use crate::error::CatalogResult;
use crate::store::InMemoryCatalog;

/// 載入結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// 已寫入示範資料
    Seeded {
        raw_materials: usize,
        products: usize,
    },
    /// 已停用或目錄非空，略過
    Skipped,
}

/// 目錄為空時載入烘焙坊示範資料
pub fn seed_demo_catalog(
    catalog: &mut InMemoryCatalog,
    config: &PlannerConfig,
) -> CatalogResult<SeedOutcome> {
    if !config.seed_demo_data {
        tracing::debug!("示範資料載入已停用");
        return Ok(SeedOutcome::Skipped);
    }

    if !catalog.is_empty() {
        tracing::info!("目錄已有資料，略過示範資料載入");
        return Ok(SeedOutcome::Skipped);
    }

    tracing::info!("目錄為空，開始載入示範資料");

    let flour = catalog.create_raw_material(RawMaterialDraft::new(
        "MP001",
        "Wheat Flour",
        Decimal::from(1000),
    ))?;
    let sugar =
        catalog.create_raw_material(RawMaterialDraft::new("MP002", "Sugar", Decimal::from(500)))?;
    let milk =
        catalog.create_raw_material(RawMaterialDraft::new("MP003", "Milk", Decimal::from(300)))?;
    let eggs =
        catalog.create_raw_material(RawMaterialDraft::new("MP004", "Eggs", Decimal::from(200)))?;
    let butter =
        catalog.create_raw_material(RawMaterialDraft::new("MP005", "Butter", Decimal::from(150)))?;

    // 麵包：200 麵粉、50 牛奶、10 奶油
    catalog.create_product(
        ProductDraft::new("PRD001", "French Bread", Decimal::new(1250, 2))
            .with_line(BomLine::new(flour.id, Decimal::from(200)))
            .with_line(BomLine::new(milk.id, Decimal::from(50)))
            .with_line(BomLine::new(butter.id, Decimal::from(10))),
    )?;

    // 巧克力蛋糕：300 麵粉、200 糖、100 牛奶、50 蛋、80 奶油
    catalog.create_product(
        ProductDraft::new("PRD002", "Chocolate Cake", Decimal::from(35))
            .with_line(BomLine::new(flour.id, Decimal::from(300)))
            .with_line(BomLine::new(sugar.id, Decimal::from(200)))
            .with_line(BomLine::new(milk.id, Decimal::from(100)))
            .with_line(BomLine::new(eggs.id, Decimal::from(50)))
            .with_line(BomLine::new(butter.id, Decimal::from(80))),
    )?;

    // 奶油餅乾：150 麵粉、100 糖、60 奶油、30 蛋
    catalog.create_product(
        ProductDraft::new("PRD003", "Butter Cookie", Decimal::from(8))
            .with_line(BomLine::new(flour.id, Decimal::from(150)))
            .with_line(BomLine::new(sugar.id, Decimal::from(100)))
            .with_line(BomLine::new(butter.id, Decimal::from(60)))
            .with_line(BomLine::new(eggs.id, Decimal::from(30))),
    )?;

    let outcome = SeedOutcome::Seeded {
        raw_materials: catalog.raw_material_count(),
        products: catalog.product_count(),
    };
    tracing::info!("示範資料載入完成: {:?}", outcome);

    Ok(outcome)
}
