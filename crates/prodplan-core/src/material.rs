//! 原物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 原物料（含目前庫存）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 原物料ID
    pub id: Uuid,

    /// 原物料代碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 可用庫存
    pub stock_quantity: Decimal,
}

impl RawMaterial {
    /// 創建新的原物料
    pub fn new(code: String, name: String, stock_quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            stock_quantity,
        }
    }

    /// 建構器模式：指定ID（例如從外部系統載入）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：設置庫存
    pub fn with_stock_quantity(mut self, stock_quantity: Decimal) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// 檢查是否有可用庫存
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > Decimal::ZERO
    }
}
