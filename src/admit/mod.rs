//! 准入控制模块
//!
//! 此模块包含 demand/结果类型、分配执行器以及三种准入策略：
//! FCFS 单路径、动态权重单路径、多路径加自适应重试。

// 子模块声明
mod config;
mod demand;
mod dynamic;
mod executor;
mod fcfs;
mod multipath;
mod strategy;

// 重新导出公共接口
pub use config::AdmissionConfig;
pub use demand::{
    AcceptanceSummary, Admission, Demand, PathAllocation, RejectReason, Rejection, RunResult,
};
pub use dynamic::{DynamicWeight, bandwidth_ascending, dynamic_weight};
pub use executor::{
    Feasibility, attempt_multi_path, attempt_single_path, plan_multi_path, smart_weight,
};
pub use fcfs::Fcfs;
pub use multipath::{MultiPathRetry, difficulty, strategic_order};
pub use strategy::{Admissions, Strategy, StrategyKind};
