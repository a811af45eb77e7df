//! 產能計算（瓶頸原物料）

use prodplan_core::Product;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::StockLedger;

/// 單一產品的可生產量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// 可生產單位數
    pub units: u64,

    /// 瓶頸原物料（沒有任何限制行時為 None）
    pub bottleneck: Option<Uuid>,
}

impl Capacity {
    /// 不可生產
    pub fn none() -> Self {
        Self {
            units: 0,
            bottleneck: None,
        }
    }

    /// 是否可生產至少一單位
    pub fn is_producible(&self) -> bool {
        self.units > 0
    }
}

/// 產能計算器
pub struct CapacityCalculator;

impl CapacityCalculator {
    /// 計算產品在目前庫存下的最大可生產量
    ///
    /// 取所有用量 > 0 的行中 floor(可用 / 用量) 的最小值。
    /// 沒有任何用量 > 0 的行時視為不可生產（而非無上限）。
    pub fn evaluate(product: &Product, ledger: &StockLedger) -> Capacity {
        let mut capacity: Option<Capacity> = None;

        for (raw_material_id, required) in Self::requirements(product) {
            let units = Self::units_from(ledger.available(&raw_material_id), required);

            match capacity {
                Some(current) if current.units <= units => {}
                _ => {
                    capacity = Some(Capacity {
                        units,
                        bottleneck: Some(raw_material_id),
                    })
                }
            }
        }

        capacity.unwrap_or_else(Capacity::none)
    }

    /// 每單位產品對各原物料的總用量
    ///
    /// 只計入用量 > 0 的行；同一原物料出現多次時合併，順序依首次出現。
    pub fn requirements(product: &Product) -> Vec<(Uuid, Decimal)> {
        let mut requirements: Vec<(Uuid, Decimal)> = Vec::new();

        for line in product.constraining_lines() {
            match requirements
                .iter_mut()
                .find(|(id, _)| *id == line.raw_material_id)
            {
                Some((_, total)) => {
                    *total = total.saturating_add(line.required_quantity);
                }
                None => requirements.push((line.raw_material_id, line.required_quantity)),
            }
        }

        requirements
    }

    /// floor(可用 / 用量)，用量必須 > 0
    fn units_from(available: Decimal, required: Decimal) -> u64 {
        if available <= Decimal::ZERO {
            return 0;
        }

        let mut units = match available.checked_div(required) {
            Some(ratio) => ratio.floor().to_u64().unwrap_or(u64::MAX),
            None => u64::MAX,
        };

        // 除法結果可能被捨入到下一個整數
        let fits = |units: u64| {
            required
                .checked_mul(Decimal::from(units))
                .is_some_and(|needed| needed <= available)
        };
        if units > 0 && !fits(units) {
            units -= 1;
        }

        units
    }
}
