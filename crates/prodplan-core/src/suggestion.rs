//! 生產建議模型（優化器輸出）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Product;

/// 生產建議
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturingSuggestion {
    /// 產品ID
    pub product_id: Uuid,

    /// 產品代碼
    pub product_code: String,

    /// 產品名稱
    pub product_name: String,

    /// 建議生產數量（>= 1）
    pub quantity: u64,

    /// 單位售價
    pub unit_price: Decimal,

    /// 總價值 = 數量 × 單價
    pub total_value: Decimal,
}

impl ManufacturingSuggestion {
    /// 為產品創建生產建議
    ///
    /// 數量為 0 或總價值溢位時返回 `None`。
    pub fn for_product(product: &Product, quantity: u64) -> Option<Self> {
        if quantity == 0 {
            return None;
        }

        let total_value = product.price.checked_mul(Decimal::from(quantity))?;

        Some(Self {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            total_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_suggestion() {
        let product = Product::new(
            "PRD001".to_string(),
            "French Bread".to_string(),
            Decimal::new(1250, 2),
        );

        let suggestion = ManufacturingSuggestion::for_product(&product, 5).unwrap();

        assert_eq!(suggestion.product_id, product.id);
        assert_eq!(suggestion.product_code, "PRD001");
        assert_eq!(suggestion.quantity, 5);
        assert_eq!(suggestion.unit_price, Decimal::new(1250, 2));
        assert_eq!(suggestion.total_value, Decimal::new(6250, 2));
    }

    #[test]
    fn test_zero_quantity_has_no_suggestion() {
        let product = Product::new("PRD003".to_string(), "Cookie".to_string(), Decimal::from(8));
        assert!(ManufacturingSuggestion::for_product(&product, 0).is_none());
    }

    #[test]
    fn test_value_overflow_has_no_suggestion() {
        let product = Product::new("PRD004".to_string(), "Gold Bar".to_string(), Decimal::MAX);
        assert!(ManufacturingSuggestion::for_product(&product, 2).is_none());
    }
}
