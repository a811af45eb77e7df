//! 資料快照來源
//!
//! 優化器只讀取快照；快照的一致性由實作方負責。

use crate::{Product, RawMaterial, Result};

/// 產品目錄來源（含 BOM）
pub trait ProductSource {
    /// 取得所有產品
    fn products(&self) -> Result<Vec<Product>>;
}

/// 原物料庫存來源
pub trait StockSource {
    /// 取得所有原物料及目前庫存
    fn raw_materials(&self) -> Result<Vec<RawMaterial>>;
}
