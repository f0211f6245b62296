//! 修读计划验证模块
//!
//! 检查每学年的计划学分是否超过上限，并结合毕业检查给出建议。

use crate::core::checker::RequirementChecker;
use crate::core::models::{
    Course, EnrollmentRecord, EnrollmentStatus, PlanValidation, YearLoad,
};
use std::collections::{BTreeMap, HashSet};

/// 每学年计划学分上限
pub const MAX_CREDITS_PER_YEAR: u32 = 44;

/// 每个未达标类别最多推荐的课程数
pub const RECOMMENDATIONS_PER_CATEGORY: usize = 3;

/// 修读计划验证器
pub struct PlanValidator<'a> {
    checker: &'a RequirementChecker,
    max_credits_per_year: u32,
}

impl<'a> PlanValidator<'a> {
    pub fn new(checker: &'a RequirementChecker) -> Self {
        Self {
            checker,
            max_credits_per_year: MAX_CREDITS_PER_YEAR,
        }
    }

    /// 设置学年学分上限
    pub fn with_max_credits_per_year(mut self, max: u32) -> Self {
        self.max_credits_per_year = max;
        self
    }

    /// 按学年统计计划学分（学年升序）
    ///
    /// 只统计带有学年的计划记录；未知课程忽略。
    pub fn yearly_loads(&self, enrollments: &[EnrollmentRecord]) -> Vec<YearLoad> {
        let catalog = self.checker.catalog();
        let mut per_year: BTreeMap<u32, u32> = BTreeMap::new();

        for record in enrollments {
            if record.status != EnrollmentStatus::Planned {
                continue;
            }
            let Some(year) = record.year.filter(|&y| y > 0) else {
                continue;
            };
            let Some(entry) = catalog.get(&record.course_id) else {
                continue;
            };
            let load = per_year.entry(year).or_default();
            *load = load.saturating_add(entry.course.credits);
        }

        per_year
            .into_iter()
            .map(|(year, planned_credits)| YearLoad {
                year,
                planned_credits,
                overage: planned_credits.saturating_sub(self.max_credits_per_year),
            })
            .collect()
    }

    /// 验证修读计划
    ///
    /// is_valid 只反映学年负荷，不要求当前即可毕业。
    pub fn validate_plan(&self, enrollments: &[EnrollmentRecord]) -> PlanValidation {
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        for load in self.yearly_loads(enrollments) {
            if load.is_overloaded() {
                issues.push(format!(
                    "第{}学年计划学分 {} 超过上限 {}（超出 {} 学分）",
                    load.year, load.planned_credits, self.max_credits_per_year, load.overage
                ));
            }
        }

        let result = self.checker.check(enrollments);
        if !result.can_graduate {
            recommendations.push("请修读更多课程以满足毕业要求".to_string());
        }
        if !result.missing_required.is_empty() {
            recommendations.push("请优先修读必修课程".to_string());
        }

        if !issues.is_empty() {
            tracing::warn!("修读计划存在 {} 个问题", issues.len());
        }

        PlanValidation {
            is_valid: issues.is_empty(),
            issues,
            recommendations,
        }
    }

    /// 推荐课程
    ///
    /// 每个未达标类别取最多3门尚未选择的课程（目录顺序），不设总数上限。
    pub fn recommend(&self, enrollments: &[EnrollmentRecord]) -> Vec<Course> {
        let catalog = self.checker.catalog();
        let native_speaker = self.checker.native_speaker();
        let enrolled: HashSet<&str> = enrollments.iter().map(|r| r.course_id.as_str()).collect();

        let result = self.checker.check(enrollments);
        let mut recommended = Vec::new();

        for check in result.category_checks.iter().filter(|c| !c.is_completed) {
            recommended.extend(
                catalog
                    .courses_in_category(&check.category)
                    .filter(|e| !e.placement.track.is_excluded(native_speaker))
                    .filter(|e| !enrolled.contains(e.course.id.as_str()))
                    .take(RECOMMENDATIONS_PER_CATEGORY)
                    .map(|e| e.course.clone()),
            );
        }

        tracing::debug!("推荐课程 {} 门", recommended.len());
        recommended
    }
}
