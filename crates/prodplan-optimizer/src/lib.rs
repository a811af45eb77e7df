//! # Production Optimizer
//!
//! 貪婪 BOM 分配引擎：依現有原物料庫存，計算應生產哪些產品及數量以取得最高銷售總值。

pub mod allocator;
pub mod capacity;
pub mod ledger;

// Re-export 主要類型
pub use allocator::{optimize, ProductionOptimizer};
pub use capacity::{Capacity, CapacityCalculator};
pub use ledger::{MaterialUsage, StockLedger};

use chrono::{DateTime, Utc};
use prodplan_core::ManufacturingSuggestion;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生產計劃（優化結果）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 生產建議（單價遞減）
    pub suggestions: Vec<ManufacturingSuggestion>,

    /// 原物料使用情況
    pub material_usage: Vec<MaterialUsage>,

    /// 警告信息
    pub warnings: Vec<PlanWarning>,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ProductionPlan {
    /// 創建生產計劃
    pub fn new(suggestions: Vec<ManufacturingSuggestion>, material_usage: Vec<MaterialUsage>) -> Self {
        Self {
            suggestions,
            material_usage,
            warnings: Vec::new(),
            generated_at: Utc::now(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PlanWarning) {
        self.warnings.push(warning);
    }

    /// 是否沒有任何建議
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// 銷售總值
    ///
    /// 單筆建議的總值已確認不溢位；加總超出 `Decimal` 範圍時停在 `Decimal::MAX`。
    pub fn grand_total(&self) -> Decimal {
        self.suggestions
            .iter()
            .fold(Decimal::ZERO, |sum, s| sum.saturating_add(s.total_value))
    }

    /// 生產總單位數
    pub fn total_units(&self) -> u64 {
        self.suggestions
            .iter()
            .fold(0u64, |sum, s| sum.saturating_add(s.quantity))
    }

    /// 建議生產的產品數
    pub fn product_count(&self) -> usize {
        self.suggestions.len()
    }

    /// 查找指定產品的建議
    pub fn suggestion_for(&self, product_id: &Uuid) -> Option<&ManufacturingSuggestion> {
        self.suggestions.iter().find(|s| s.product_id == *product_id)
    }

    /// 查找指定原物料的使用情況
    pub fn usage_for(&self, raw_material_id: &Uuid) -> Option<&MaterialUsage> {
        self.material_usage
            .iter()
            .find(|u| u.raw_material_id == *raw_material_id)
    }
}

/// 計劃警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWarning {
    pub product_code: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PlanWarning {
    pub fn new(product_code: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            product_code,
            message,
            severity,
        }
    }

    pub fn info(product_code: String, message: String) -> Self {
        Self::new(product_code, message, WarningSeverity::Info)
    }

    pub fn warning(product_code: String, message: String) -> Self {
        Self::new(product_code, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
