//! 目錄錯誤類型

use prodplan_core::PlanError;
use thiserror::Error;
use uuid::Uuid;

/// 目錄操作錯誤
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("記錄未找到: {entity} with id={id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("代碼重複: {entity} code={code}")]
    DuplicateCode { entity: &'static str, code: String },

    #[error("原物料 {raw_material_id} 仍被產品 {product_code} 使用")]
    MaterialInUse {
        raw_material_id: Uuid,
        product_code: String,
    },

    #[error("欄位驗證失敗 (field={field}): {message}")]
    Validation { field: String, message: String },
}

impl CatalogError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<CatalogError> for PlanError {
    fn from(err: CatalogError) -> Self {
        PlanError::SourceUnavailable(err.to_string())
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
