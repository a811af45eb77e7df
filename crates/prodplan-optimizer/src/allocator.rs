//! 生產優化器（貪婪 BOM 分配）

use prodplan_core::{
    ManufacturingSuggestion, PlannerConfig, Product, ProductSource, RawMaterial, StockSource,
};
use rust_decimal::Decimal;

use crate::capacity::CapacityCalculator;
use crate::ledger::StockLedger;
use crate::{PlanWarning, ProductionPlan};

/// 生產優化器
///
/// 依單價由高到低逐一處理產品，每個產品一次取盡可生產量後才輪到下一個。
/// 單次掃描、不回溯，不保證全域最優。
#[derive(Debug, Clone, Default)]
pub struct ProductionOptimizer {
    config: PlannerConfig,
}

impl ProductionOptimizer {
    /// 創建新的優化器
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// 獲取配置
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 計算生產建議（依處理順序，即單價遞減）
    pub fn optimize(
        &self,
        products: &[Product],
        raw_materials: &[RawMaterial],
    ) -> Vec<ManufacturingSuggestion> {
        let mut ledger = StockLedger::from_materials(raw_materials);
        self.allocate(products, &mut ledger, None)
    }

    /// 計算完整生產計劃（建議 + 合計 + 原物料使用 + 警告）
    pub fn plan(&self, products: &[Product], raw_materials: &[RawMaterial]) -> ProductionPlan {
        let start_time = std::time::Instant::now();

        let mut ledger = StockLedger::from_materials(raw_materials);
        let mut warnings = Vec::new();
        let collector = if self.config.collect_warnings {
            Some(&mut warnings)
        } else {
            None
        };

        let suggestions = self.allocate(products, &mut ledger, collector);

        let mut plan = ProductionPlan::new(suggestions, ledger.usage());
        plan.warnings = warnings;
        plan.calculation_time_ms = Some(start_time.elapsed().as_millis());
        plan
    }

    /// 從外部來源取得快照後計算生產計劃
    ///
    /// 取得快照時的錯誤原樣返回；分配本身不會失敗。
    pub fn plan_from_sources(
        &self,
        products: &dyn ProductSource,
        stock: &dyn StockSource,
    ) -> prodplan_core::Result<ProductionPlan> {
        let products = products.products()?;
        let raw_materials = stock.raw_materials()?;
        Ok(self.plan(&products, &raw_materials))
    }

    /// 主分配迴圈
    fn allocate(
        &self,
        products: &[Product],
        ledger: &mut StockLedger,
        mut warnings: Option<&mut Vec<PlanWarning>>,
    ) -> Vec<ManufacturingSuggestion> {
        tracing::info!(
            "開始生產優化：產品 {} 筆，原物料 {} 筆",
            products.len(),
            ledger.len()
        );
        if ledger.is_empty() {
            tracing::warn!("庫存快照為空，所有需要原物料的產品皆不可生產");
        }

        // 穩定排序：同價產品保持輸入順序
        let mut ordered: Vec<&Product> = products.iter().collect();
        ordered.sort_by(|a, b| b.price.cmp(&a.price));

        let mut suggestions = Vec::new();

        for product in ordered {
            let mut warn = |warning: PlanWarning| {
                if let Some(list) = warnings.as_deref_mut() {
                    list.push(warning);
                }
            };

            if !product.has_bill_of_materials() {
                tracing::debug!("產品 {} 沒有 BOM，略過", product.code);
                warn(PlanWarning::info(
                    product.code.clone(),
                    "產品沒有 BOM，略過".to_string(),
                ));
                continue;
            }

            let requirements = CapacityCalculator::requirements(product);
            if requirements.is_empty() {
                tracing::debug!("產品 {} 沒有用量大於 0 的 BOM 行，略過", product.code);
                warn(PlanWarning::warning(
                    product.code.clone(),
                    "BOM 中沒有用量大於 0 的行，視為不可生產".to_string(),
                ));
                continue;
            }

            for (raw_material_id, _) in &requirements {
                if !ledger.contains(raw_material_id) {
                    warn(PlanWarning::warning(
                        product.code.clone(),
                        format!("BOM 引用未知原物料 {}，視為庫存 0", raw_material_id),
                    ));
                }
            }

            let capacity = CapacityCalculator::evaluate(product, ledger);
            if !capacity.is_producible() {
                tracing::debug!(
                    "產品 {} 可生產量為 0（瓶頸: {:?}）",
                    product.code,
                    capacity.bottleneck
                );
                if let Some(bottleneck) = capacity.bottleneck {
                    warn(PlanWarning::info(
                        product.code.clone(),
                        format!("原物料 {} 庫存不足，無法生產", bottleneck),
                    ));
                }
                continue;
            }

            let Some(suggestion) = ManufacturingSuggestion::for_product(product, capacity.units)
            else {
                tracing::warn!(
                    "產品 {} 總價值溢位（數量 {}，單價 {}），略過",
                    product.code,
                    capacity.units,
                    product.price
                );
                warn(PlanWarning::warning(
                    product.code.clone(),
                    format!("數量 {} × 單價 {} 溢位，略過", capacity.units, product.price),
                ));
                continue;
            };

            let units = Decimal::from(capacity.units);
            for (raw_material_id, required) in &requirements {
                ledger.consume(raw_material_id, *required * units);
            }

            tracing::debug!(
                "產品 {}: 生產 {} 單位，總價值 {}",
                product.code,
                suggestion.quantity,
                suggestion.total_value
            );

            suggestions.push(suggestion);
        }

        tracing::info!("生產優化完成，建議數量: {}", suggestions.len());

        suggestions
    }
}

/// 使用預設配置計算生產建議
pub fn optimize(
    products: &[Product],
    raw_materials: &[RawMaterial],
) -> Vec<ManufacturingSuggestion> {
    ProductionOptimizer::default().optimize(products, raw_materials)
}
