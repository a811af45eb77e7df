//! 生產計劃配置模型

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{PlanError, Result};

/// 規劃器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 目錄為空時是否載入示範資料
    pub seed_demo_data: bool,

    /// 是否在計劃結果中收集診斷警告
    /// - true: 記錄每個被略過產品的原因（預設）
    /// - false: 只輸出建議，警告列表保持為空
    pub collect_warnings: bool,
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            seed_demo_data: true,
            collect_warnings: true,
        }
    }

    /// 建構器模式：設置是否載入示範資料
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// 建構器模式：設置是否收集警告
    pub fn with_collect_warnings(mut self, collect: bool) -> Self {
        self.collect_warnings = collect;
        self
    }

    /// 從 JSON 字串載入配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use prodplan_core::PlannerConfig;
    /// let config = PlannerConfig::from_json_str(r#"{ "seed_demo_data": false }"#).unwrap();
    /// assert!(!config.seed_demo_data);
    /// assert!(config.collect_warnings);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlanError::Config(e.to_string()))
    }

    /// 從 JSON 檔案載入配置
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlanError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
