//! GradCheck - 毕业要求检查工具
//!
//! 核心设计原则：
//! - 引擎只做计算，不做持久化
//! - 输入不合规时降级处理，结论体现在检查结果里而不是报错
//! - 课程目录与要求树加载后只读

pub mod core;
pub mod storage;

pub use crate::core::catalog::{Catalog, CatalogError};
pub use crate::core::checker::RequirementChecker;
pub use crate::core::models::{
    CheckResult, Course, CreditSummary, EnrollmentRecord, EnrollmentStatus, PlanValidation,
};
pub use crate::core::planner::PlanValidator;
