//! 准入参数

use serde::{Deserialize, Serialize};

/// 多路径分配与降档重试的参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    /// 单个 demand 最多拆分到的路径数
    pub max_paths: usize,
    /// 枚举的候选路径数为 `max_paths * candidate_factor`
    pub candidate_factor: usize,
    /// 允许的未分配比例：已分配 >= (1 - tolerance) * 请求量即视为成功
    pub shortfall_tolerance: f64,
    /// 第二轮按顺序尝试的带宽缩放系数
    pub retry_factors: Vec<f64>,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_paths: 3,
            candidate_factor: 4,
            shortfall_tolerance: 0.1,
            retry_factors: vec![0.8, 0.7, 0.6],
        }
    }
}

impl AdmissionConfig {
    pub fn candidate_limit(&self) -> usize {
        self.max_paths.saturating_mul(self.candidate_factor)
    }
}
