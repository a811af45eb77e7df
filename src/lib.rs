//! # prodplan
//!
//! 依原物料庫存計算最高銷售總值的生產建議。

pub mod logging;

pub use prodplan_catalog as catalog;
pub use prodplan_core as model;
pub use prodplan_optimizer as optimizer;

pub use prodplan_catalog::{seed_demo_catalog, InMemoryCatalog};
pub use prodplan_core::{
    BomLine, ManufacturingSuggestion, PlanError, PlannerConfig, Product, RawMaterial,
};
pub use prodplan_optimizer::{optimize, ProductionOptimizer, ProductionPlan};
