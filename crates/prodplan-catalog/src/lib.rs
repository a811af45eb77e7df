//! # Production Planning Catalog
//!
//! 原物料與產品目錄：新增/修改/刪除、欄位驗證、示範資料載入。
//! 同時作為優化器的快照來源。

pub mod draft;
pub mod error;
pub mod seed;
pub mod store;

// Re-export 主要類型
pub use draft::{ProductDraft, RawMaterialDraft};
pub use error::{CatalogError, CatalogResult};
pub use seed::{seed_demo_catalog, SeedOutcome};
pub use store::InMemoryCatalog;
