//! # Production Planning Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod material;
pub mod product;
pub mod source;
pub mod suggestion;

// Re-export 主要類型
pub use config::PlannerConfig;
pub use material::RawMaterial;
pub use product::{BomLine, Product};
pub use source::{ProductSource, StockSource};
pub use suggestion::ManufacturingSuggestion;

/// 生產計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("無法取得資料快照: {0}")]
    SourceUnavailable(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
