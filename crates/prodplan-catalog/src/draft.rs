//! 新增/修改請求與欄位驗證

use prodplan_core::BomLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// 原物料新增/修改請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterialDraft {
    pub code: String,
    pub name: String,
    pub stock_quantity: Decimal,
}

impl RawMaterialDraft {
    pub fn new(code: impl Into<String>, name: impl Into<String>, stock_quantity: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            stock_quantity,
        }
    }

    /// 驗證：代碼、名稱必填，庫存 >= 0
    pub fn validate(&self) -> CatalogResult<()> {
        require_text("code", &self.code)?;
        require_text("name", &self.name)?;

        if self.stock_quantity < Decimal::ZERO {
            return Err(CatalogError::validation(
                "stock_quantity",
                format!("庫存不可為負數: {}", self.stock_quantity),
            ));
        }

        Ok(())
    }
}

/// 產品新增/修改請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub bill_of_materials: Vec<BomLine>,
}

impl ProductDraft {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            bill_of_materials: Vec::new(),
        }
    }

    /// 建構器模式：添加 BOM 行
    pub fn with_line(mut self, line: BomLine) -> Self {
        self.bill_of_materials.push(line);
        self
    }

    /// 驗證：代碼、名稱必填，售價 > 0，BOM 用量 > 0
    ///
    /// 原物料是否存在由目錄檢查。
    pub fn validate(&self) -> CatalogResult<()> {
        require_text("code", &self.code)?;
        require_text("name", &self.name)?;

        if self.price <= Decimal::ZERO {
            return Err(CatalogError::validation(
                "price",
                format!("售價必須大於 0: {}", self.price),
            ));
        }

        for (index, line) in self.bill_of_materials.iter().enumerate() {
            if !line.is_constraining() {
                return Err(CatalogError::validation(
                    format!("bill_of_materials[{}].required_quantity", index),
                    format!("用量必須大於 0: {}", line.required_quantity),
                ));
            }
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(field, "必填欄位"));
    }
    Ok(())
}
