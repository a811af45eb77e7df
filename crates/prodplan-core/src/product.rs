//! 產品與物料清單（BOM）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 物料清單行：每生產一單位產品所需的原物料數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    /// 原物料ID
    pub raw_material_id: Uuid,

    /// 單位用量
    pub required_quantity: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 行
    pub fn new(raw_material_id: Uuid, required_quantity: Decimal) -> Self {
        Self {
            raw_material_id,
            required_quantity,
        }
    }

    /// 用量 <= 0 的行不構成任何限制
    pub fn is_constraining(&self) -> bool {
        self.required_quantity > Decimal::ZERO
    }
}

/// 產品（聚合根，擁有自己的 BOM 行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: Uuid,

    /// 產品代碼（唯一）
    pub code: String,

    /// 名稱
    pub name: String,

    /// 單位售價
    pub price: Decimal,

    /// 物料清單
    pub bill_of_materials: Vec<BomLine>,
}

impl Product {
    /// 創建新的產品（無 BOM）
    pub fn new(code: String, name: String, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            price,
            bill_of_materials: Vec::new(),
        }
    }

    /// 建構器模式：指定ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：添加 BOM 行
    pub fn with_line(mut self, raw_material_id: Uuid, required_quantity: Decimal) -> Self {
        self.bill_of_materials
            .push(BomLine::new(raw_material_id, required_quantity));
        self
    }

    /// 整份替換配方
    ///
    /// 舊的 BOM 行全部丟棄；持久層負責比對並刪除過期資料列。
    pub fn replace_bill_of_materials(&mut self, lines: Vec<BomLine>) {
        self.bill_of_materials = lines;
    }

    /// 是否有 BOM
    pub fn has_bill_of_materials(&self) -> bool {
        !self.bill_of_materials.is_empty()
    }

    /// 具限制作用的 BOM 行（用量 > 0）
    pub fn constraining_lines(&self) -> impl Iterator<Item = &BomLine> {
        self.bill_of_materials.iter().filter(|l| l.is_constraining())
    }

    /// 檢查 BOM 是否引用指定原物料
    pub fn uses_raw_material(&self, raw_material_id: Uuid) -> bool {
        self.bill_of_materials
            .iter()
            .any(|l| l.raw_material_id == raw_material_id)
    }
}
