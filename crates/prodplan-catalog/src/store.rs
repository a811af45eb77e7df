//! 記憶體內的原物料/產品目錄

use prodplan_core::{BomLine, Product, ProductSource, RawMaterial, StockSource};
use uuid::Uuid;

use crate::draft::{ProductDraft, RawMaterialDraft};
use crate::error::{CatalogError, CatalogResult};

const RAW_MATERIAL: &str = "RawMaterial";
const PRODUCT: &str = "Product";

/// 記憶體目錄
///
/// 依新增順序保存記錄；快照也依此順序輸出。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    raw_materials: Vec<RawMaterial>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 目錄是否為空（沒有原物料）
    pub fn is_empty(&self) -> bool {
        self.raw_materials.is_empty()
    }

    /// 原物料數量
    pub fn raw_material_count(&self) -> usize {
        self.raw_materials.len()
    }

    /// 產品數量
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // ===== 原物料 =====

    pub fn list_raw_materials(&self) -> &[RawMaterial] {
        &self.raw_materials
    }

    pub fn raw_material(&self, id: Uuid) -> CatalogResult<&RawMaterial> {
        self.raw_materials
            .iter()
            .find(|m| m.id == id)
            .ok_or(CatalogError::NotFound {
                entity: RAW_MATERIAL,
                id,
            })
    }

    pub fn create_raw_material(&mut self, draft: RawMaterialDraft) -> CatalogResult<RawMaterial> {
        draft.validate()?;
        self.ensure_unique_material_code(&draft.code, None)?;

        let material = RawMaterial::new(draft.code, draft.name, draft.stock_quantity);
        tracing::debug!("新增原物料 {} ({})", material.code, material.id);

        self.raw_materials.push(material.clone());
        Ok(material)
    }

    pub fn update_raw_material(
        &mut self,
        id: Uuid,
        draft: RawMaterialDraft,
    ) -> CatalogResult<RawMaterial> {
        draft.validate()?;
        self.raw_material(id)?;
        self.ensure_unique_material_code(&draft.code, Some(id))?;

        let material = self
            .raw_materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(CatalogError::NotFound {
                entity: RAW_MATERIAL,
                id,
            })?;

        material.code = draft.code;
        material.name = draft.name;
        material.stock_quantity = draft.stock_quantity;
        tracing::debug!("更新原物料 {} ({})", material.code, material.id);

        Ok(material.clone())
    }

    /// 刪除原物料；仍被任何產品 BOM 引用時拒絕
    pub fn delete_raw_material(&mut self, id: Uuid) -> CatalogResult<()> {
        let index = self
            .raw_materials
            .iter()
            .position(|m| m.id == id)
            .ok_or(CatalogError::NotFound {
                entity: RAW_MATERIAL,
                id,
            })?;

        if let Some(product) = self.products.iter().find(|p| p.uses_raw_material(id)) {
            return Err(CatalogError::MaterialInUse {
                raw_material_id: id,
                product_code: product.code.clone(),
            });
        }

        let removed = self.raw_materials.remove(index);
        tracing::debug!("刪除原物料 {} ({})", removed.code, removed.id);
        Ok(())
    }

    // ===== 產品 =====

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: Uuid) -> CatalogResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { entity: PRODUCT, id })
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> CatalogResult<Product> {
        draft.validate()?;
        self.ensure_unique_product_code(&draft.code, None)?;
        self.ensure_materials_exist(&draft.bill_of_materials)?;

        let mut product = Product::new(draft.code, draft.name, draft.price);
        product.replace_bill_of_materials(draft.bill_of_materials);
        tracing::debug!(
            "新增產品 {} ({})，BOM {} 行",
            product.code,
            product.id,
            product.bill_of_materials.len()
        );

        self.products.push(product.clone());
        Ok(product)
    }

    /// 更新產品；BOM 整份替換
    pub fn update_product(&mut self, id: Uuid, draft: ProductDraft) -> CatalogResult<Product> {
        draft.validate()?;
        self.product(id)?;
        self.ensure_unique_product_code(&draft.code, Some(id))?;
        self.ensure_materials_exist(&draft.bill_of_materials)?;

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { entity: PRODUCT, id })?;

        product.code = draft.code;
        product.name = draft.name;
        product.price = draft.price;
        product.replace_bill_of_materials(draft.bill_of_materials);
        tracing::debug!("更新產品 {} ({})", product.code, product.id);

        Ok(product.clone())
    }

    pub fn delete_product(&mut self, id: Uuid) -> CatalogResult<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound { entity: PRODUCT, id })?;

        let removed = self.products.remove(index);
        tracing::debug!("刪除產品 {} ({})", removed.code, removed.id);
        Ok(())
    }

    // ===== 檢查 =====

    fn ensure_unique_material_code(&self, code: &str, except: Option<Uuid>) -> CatalogResult<()> {
        let taken = self
            .raw_materials
            .iter()
            .any(|m| m.code == code && Some(m.id) != except);
        if taken {
            return Err(CatalogError::DuplicateCode {
                entity: RAW_MATERIAL,
                code: code.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_unique_product_code(&self, code: &str, except: Option<Uuid>) -> CatalogResult<()> {
        let taken = self
            .products
            .iter()
            .any(|p| p.code == code && Some(p.id) != except);
        if taken {
            return Err(CatalogError::DuplicateCode {
                entity: PRODUCT,
                code: code.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_materials_exist(&self, lines: &[BomLine]) -> CatalogResult<()> {
        for line in lines {
            self.raw_material(line.raw_material_id)?;
        }
        Ok(())
    }
}

impl ProductSource for InMemoryCatalog {
    fn products(&self) -> prodplan_core::Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

impl StockSource for InMemoryCatalog {
    fn raw_materials(&self) -> prodplan_core::Result<Vec<RawMaterial>> {
        Ok(self.raw_materials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn catalog_with_flour() -> (InMemoryCatalog, RawMaterial) {
        let mut catalog = InMemoryCatalog::new();
        let flour = catalog
            .create_raw_material(RawMaterialDraft::new("MP001", "Wheat Flour", Decimal::from(1000)))
            .unwrap();
        (catalog, flour)
    }

    #[test]
    fn test_raw_material_crud() {
        let (mut catalog, flour) = catalog_with_flour();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.raw_material(flour.id).unwrap().name, "Wheat Flour");

        let updated = catalog
            .update_raw_material(flour.id, RawMaterialDraft::new("MP001", "Flour", Decimal::from(750)))
            .unwrap();
        assert_eq!(updated.id, flour.id);
        assert_eq!(updated.stock_quantity, Decimal::from(750));

        catalog.delete_raw_material(flour.id).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.raw_material(flour.id).unwrap_err(),
            CatalogError::NotFound {
                entity: RAW_MATERIAL,
                id: flour.id
            }
        );
    }

    #[test]
    fn test_duplicate_material_code_rejected() {
        let (mut catalog, flour) = catalog_with_flour();

        let err = catalog
            .create_raw_material(RawMaterialDraft::new("MP001", "Other", Decimal::ONE))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode { .. }));

        // 保留自己的代碼不算重複
        assert!(catalog
            .update_raw_material(flour.id, RawMaterialDraft::new("MP001", "Flour", Decimal::ONE))
            .is_ok());
    }

    #[test]
    fn test_duplicate_product_code_rejected() {
        let (mut catalog, flour) = catalog_with_flour();
        let bread = catalog
            .create_product(
                ProductDraft::new("PRD001", "French Bread", Decimal::new(1250, 2))
                    .with_line(BomLine::new(flour.id, Decimal::from(200))),
            )
            .unwrap();

        let err = catalog
            .create_product(ProductDraft::new("PRD001", "Baguette", Decimal::from(9)))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateCode {
                entity: PRODUCT,
                code: "PRD001".to_string()
            }
        );
        assert_eq!(catalog.product_count(), 1);

        // 保留自己的代碼不算重複
        assert!(catalog
            .update_product(
                bread.id,
                ProductDraft::new("PRD001", "French Bread", Decimal::from(13))
                    .with_line(BomLine::new(flour.id, Decimal::from(180))),
            )
            .is_ok());
    }

    #[test]
    fn test_product_crud_replaces_recipe() {
        let (mut catalog, flour) = catalog_with_flour();
        let milk = catalog
            .create_raw_material(RawMaterialDraft::new("MP003", "Milk", Decimal::from(300)))
            .unwrap();

        let bread = catalog
            .create_product(
                ProductDraft::new("PRD001", "French Bread", Decimal::new(1250, 2))
                    .with_line(BomLine::new(flour.id, Decimal::from(200)))
                    .with_line(BomLine::new(milk.id, Decimal::from(50))),
            )
            .unwrap();
        assert_eq!(catalog.product(bread.id).unwrap().bill_of_materials.len(), 2);

        let updated = catalog
            .update_product(
                bread.id,
                ProductDraft::new("PRD001", "French Bread", Decimal::from(13))
                    .with_line(BomLine::new(flour.id, Decimal::from(180))),
            )
            .unwrap();
        assert_eq!(updated.bill_of_materials, vec![BomLine::new(flour.id, Decimal::from(180))]);
        assert!(!catalog.product(bread.id).unwrap().uses_raw_material(milk.id));

        catalog.delete_product(bread.id).unwrap();
        assert_eq!(catalog.product_count(), 0);
        assert!(matches!(
            catalog.delete_product(bread.id),
            Err(CatalogError::NotFound { entity: PRODUCT, .. })
        ));
    }

    #[test]
    fn test_product_with_unknown_material_rejected() {
        let (mut catalog, _) = catalog_with_flour();
        let ghost = Uuid::new_v4();

        let err = catalog
            .create_product(
                ProductDraft::new("PRD001", "Bread", Decimal::from(10))
                    .with_line(BomLine::new(ghost, Decimal::from(1))),
            )
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::NotFound {
                entity: RAW_MATERIAL,
                id: ghost
            }
        );
        assert_eq!(catalog.product_count(), 0);
    }

    #[test]
    fn test_material_in_use_cannot_be_deleted() {
        let (mut catalog, flour) = catalog_with_flour();
        catalog
            .create_product(
                ProductDraft::new("PRD001", "Bread", Decimal::from(10))
                    .with_line(BomLine::new(flour.id, Decimal::from(100))),
            )
            .unwrap();

        let err = catalog.delete_raw_material(flour.id).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MaterialInUse {
                raw_material_id: flour.id,
                product_code: "PRD001".to_string()
            }
        );
        assert_eq!(catalog.raw_material_count(), 1);
    }

    #[test]
    fn test_update_unknown_product() {
        let mut catalog = InMemoryCatalog::new();
        let id = Uuid::new_v4();

        let err = catalog
            .update_product(id, ProductDraft::new("PRD001", "Bread", Decimal::from(10)))
            .unwrap_err();
        assert_eq!(err, CatalogError::NotFound { entity: PRODUCT, id });
    }

    #[test]
    fn test_snapshots_follow_insertion_order() {
        let (mut catalog, flour) = catalog_with_flour();
        let sugar = catalog
            .create_raw_material(RawMaterialDraft::new("MP002", "Sugar", Decimal::from(500)))
            .unwrap();

        let materials = catalog.raw_materials().unwrap();
        assert_eq!(materials.iter().map(|m| m.id).collect::<Vec<_>>(), vec![flour.id, sugar.id]);
        assert!(catalog.products().unwrap().is_empty());
    }
}
