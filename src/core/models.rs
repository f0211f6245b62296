//! 核心数据模型定义
//!
//! 课程目录、修读记录与毕业要求树由外部提供，检查结果每次调用重新计算。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 修读状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// 已修完
    Completed,
    /// 计划修读
    Planned,
    /// 正在修读
    InProgress,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentStatus::Completed => write!(f, "COMPLETED"),
            EnrollmentStatus::Planned => write!(f, "PLANNED"),
            EnrollmentStatus::InProgress => write!(f, "IN_PROGRESS"),
        }
    }
}

impl FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "COMPLETED" => Ok(EnrollmentStatus::Completed),
            "PLANNED" => Ok(EnrollmentStatus::Planned),
            "IN_PROGRESS" => Ok(EnrollmentStatus::InProgress),
            other => Err(format!("未知的修读状态: {}", other)),
        }
    }
}

/// 外语方向标记
///
/// 母语者修读A方向，非母语者修读B方向，两者互斥。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackTag {
    /// 不属于任何外语方向
    #[default]
    None,
    /// 外语A方向（母语者）
    TrackA,
    /// 外语B方向（非母语者）
    TrackB,
}

impl TrackTag {
    /// 在给定的母语配置下，此方向的课程是否应被完全忽略
    pub fn is_excluded(&self, native_speaker: bool) -> bool {
        match self {
            TrackTag::None => false,
            TrackTag::TrackA => !native_speaker,
            TrackTag::TrackB => native_speaker,
        }
    }

    /// 给定母语配置下适用的方向
    pub fn applicable(native_speaker: bool) -> Self {
        if native_speaker {
            TrackTag::TrackA
        } else {
            TrackTag::TrackB
        }
    }
}

/// 基础类别
/// 每个基础类别至少需要一门已修或计划修读的课程
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicCategory {
    Humanities,
    SocialScience,
    NaturalScience,
    Language,
    HealthSports,
    CareerDesign,
    InformationMedia,
}

impl BasicCategory {
    /// 固定检查顺序
    pub const ALL: [BasicCategory; 7] = [
        BasicCategory::Humanities,
        BasicCategory::SocialScience,
        BasicCategory::NaturalScience,
        BasicCategory::Language,
        BasicCategory::HealthSports,
        BasicCategory::CareerDesign,
        BasicCategory::InformationMedia,
    ];

    /// 要求树中没有对应类别时使用的显示名称
    pub fn default_label(&self) -> &'static str {
        match self {
            BasicCategory::Humanities => "人文科学",
            BasicCategory::SocialScience => "社会科学",
            BasicCategory::NaturalScience => "自然科学",
            BasicCategory::Language => "外国语",
            BasicCategory::HealthSports => "健康体育",
            BasicCategory::CareerDesign => "职业设计",
            BasicCategory::InformationMedia => "信息媒体",
        }
    }
}

/// 课程
/// 由课程目录提供，加载后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// 课程编号（唯一）
    pub id: String,
    /// 课程名称
    #[serde(default)]
    pub name: String,
    /// 学分
    pub credits: u32,
    /// 类别标签，可以是 "类别/子类别" 形式
    pub category: String,
    /// 是否必修
    #[serde(default)]
    pub required: bool,
}

/// 修读记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// 课程编号，目录中不存在时静默忽略
    pub course_id: String,
    /// 修读状态
    pub status: EnrollmentStatus,
    /// 计划修读学年
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl EnrollmentRecord {
    pub fn new(course_id: impl Into<String>, status: EnrollmentStatus) -> Self {
        Self {
            course_id: course_id.into(),
            status,
            year: None,
        }
    }

    /// 设置学年
    pub fn in_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// 已修或计划修读都算作"有修读"
    pub fn is_counted(&self) -> bool {
        matches!(
            self.status,
            EnrollmentStatus::Completed | EnrollmentStatus::Planned
        )
    }
}

/// 子类别要求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// 名称，在整个要求树中唯一
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_credits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_credits: Option<u32>,
    /// 外语方向，未标记时继承所属类别
    #[serde(default)]
    pub track: TrackTag,
}

/// 类别要求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// 最低学分
    #[serde(default)]
    pub min_credits: u32,
    /// 目标学分
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_credits: Option<u32>,
    /// 对应的基础类别（如果是）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<BasicCategory>,
    #[serde(default)]
    pub track: TrackTag,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// 毕业要求树
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementTree {
    /// 毕业所需总学分
    pub total_credits: u32,
    /// 按顺序排列的类别
    pub categories: Vec<Category>,
}

impl RequirementTree {
    /// 按名称查找类别
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// 按基础类别查找
    pub fn basic_category(&self, kind: BasicCategory) -> Option<&Category> {
        self.categories.iter().find(|c| c.kind == Some(kind))
    }

    /// 按子类别名称查找所属类别和子类别
    pub fn subcategory(&self, name: &str) -> Option<(&Category, &Subcategory)> {
        self.categories.iter().find_map(|c| {
            c.subcategories
                .iter()
                .find(|s| s.name == name)
                .map(|s| (c, s))
        })
    }
}

/// 总学分汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCredits {
    pub completed: u32,
    pub planned: u32,
    /// completed + planned
    pub all: u32,
}

/// 子类别学分汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryCredits {
    pub completed: u32,
    pub planned: u32,
    pub required: Option<u32>,
    pub min: Option<u32>,
}

/// 学分汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSummary {
    pub total: TotalCredits,
    /// 子类别名称 -> 学分
    pub categories: BTreeMap<String, SubcategoryCredits>,
}

/// 总学分检查
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCheck {
    pub current: u32,
    pub required: u32,
    pub is_completed: bool,
}

/// 单个类别的检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCheck {
    pub category: String,
    pub current_credits: u32,
    pub required_credits: Option<u32>,
    pub min_credits: u32,
    pub is_completed: bool,
    /// max(0, min - current)
    pub missing_credits: u32,
}

/// 毕业检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub can_graduate: bool,
    pub total_credits: TotalCheck,
    pub category_checks: Vec<CategoryCheck>,
    pub missing_required: Vec<Course>,
    pub warnings: Vec<String>,
}

/// 单个学年的计划负荷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLoad {
    pub year: u32,
    pub planned_credits: u32,
    /// 超出上限的学分，未超出为0
    pub overage: u32,
}

impl YearLoad {
    pub fn is_overloaded(&self) -> bool {
        self.overage > 0
    }
}

/// 修读计划验证结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanValidation {
    /// 仅由学年负荷决定，与能否毕业无关
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}
