//! 庫存帳（單次優化的工作副本）

use prodplan_core::RawMaterial;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 原物料使用情況
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialUsage {
    /// 原物料ID
    pub raw_material_id: Uuid,
    /// 期初庫存
    pub initial: Decimal,
    /// 計劃消耗
    pub consumed: Decimal,
    /// 剩餘庫存
    pub remaining: Decimal,
}

/// 庫存帳
///
/// 每次優化從快照建立一份，就地扣減，結束後丟棄；從不寫回持久層。
#[derive(Debug, Clone)]
pub struct StockLedger {
    /// 期初庫存
    initial: HashMap<Uuid, Decimal>,

    /// 剩餘庫存
    remaining: HashMap<Uuid, Decimal>,

    /// 原物料首次出現順序
    order: Vec<Uuid>,
}

impl StockLedger {
    /// 從原物料快照建立庫存帳
    ///
    /// 同一ID出現多次時，以後出現者為準。
    pub fn from_materials(materials: &[RawMaterial]) -> Self {
        let mut initial = HashMap::with_capacity(materials.len());
        let mut order = Vec::with_capacity(materials.len());

        for material in materials {
            if initial
                .insert(material.id, material.stock_quantity)
                .is_none()
            {
                order.push(material.id);
            }
        }

        Self {
            remaining: initial.clone(),
            initial,
            order,
        }
    }

    /// 可用庫存（未知原物料視為 0）
    pub fn available(&self, raw_material_id: &Uuid) -> Decimal {
        self.remaining
            .get(raw_material_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// 檢查原物料是否在快照中
    pub fn contains(&self, raw_material_id: &Uuid) -> bool {
        self.remaining.contains_key(raw_material_id)
    }

    /// 扣減庫存
    ///
    /// 未知原物料不做任何處理。
    pub fn consume(&mut self, raw_material_id: &Uuid, quantity: Decimal) {
        if let Some(stock) = self.remaining.get_mut(raw_material_id) {
            *stock -= quantity;
        }
    }

    /// 原物料數量
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 各原物料使用情況（依快照順序）
    pub fn usage(&self) -> Vec<MaterialUsage> {
        self.order
            .iter()
            .map(|id| {
                let initial = self.initial.get(id).copied().unwrap_or(Decimal::ZERO);
                let remaining = self.available(id);
                MaterialUsage {
                    raw_material_id: *id,
                    initial,
                    consumed: initial - remaining,
                    remaining,
                }
            })
            .collect()
    }
}
