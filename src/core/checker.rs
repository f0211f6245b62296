//! 毕业要求检查模块
//!
//! 依次执行：学分汇总、总学分检查、类别学分检查、必修课程检查、
//! 基础类别修读检查。所有检查都会执行，警告按步骤顺序收集，不提前返回。

use crate::core::aggregator::CreditAggregator;
use crate::core::catalog::Catalog;
use crate::core::evaluator::CategoryEvaluator;
use crate::core::models::{
    BasicCategory, CategoryCheck, CheckResult, Course, CreditSummary, EnrollmentRecord, TotalCheck,
    TrackTag,
};
use std::collections::HashSet;

/// 毕业要求检查器
///
/// 持有只读的课程目录和母语配置，每次调用都重新计算结果。
pub struct RequirementChecker {
    catalog: Catalog,
    native_speaker: bool,
}

impl RequirementChecker {
    /// 创建检查器
    pub fn new(catalog: Catalog, native_speaker: bool) -> Self {
        Self {
            catalog,
            native_speaker,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn native_speaker(&self) -> bool {
        self.native_speaker
    }

    /// 汇总学分
    pub fn summarize(&self, enrollments: &[EnrollmentRecord]) -> CreditSummary {
        CreditAggregator::new(&self.catalog, self.native_speaker).aggregate(enrollments)
    }

    /// 计算单个类别的有效学分
    pub fn category_credits(&self, category_name: &str, summary: &CreditSummary) -> u32 {
        CategoryEvaluator::new(self.catalog.requirements(), self.native_speaker)
            .category_credits(category_name, summary)
    }

    /// 执行毕业检查
    pub fn check(&self, enrollments: &[EnrollmentRecord]) -> CheckResult {
        let mut warnings = Vec::new();
        let mut can_graduate = true;
        let requirements = self.catalog.requirements();

        // 1. 汇总
        let summary = self.summarize(enrollments);

        // 2. 总学分
        let total_credits = TotalCheck {
            current: summary.total.completed,
            required: requirements.total_credits,
            is_completed: summary.total.completed >= requirements.total_credits,
        };
        if !total_credits.is_completed {
            can_graduate = false;
            warnings.push(format!(
                "总学分不足: 还需 {} 学分",
                total_credits.required - total_credits.current
            ));
        }

        // 3. 各类别学分
        let evaluator = CategoryEvaluator::new(requirements, self.native_speaker);
        let mut category_checks = Vec::with_capacity(requirements.categories.len());
        for category in &requirements.categories {
            if category.track.is_excluded(self.native_speaker) {
                continue;
            }

            let current = evaluator.category_credits(&category.name, &summary);
            let missing = category.min_credits.saturating_sub(current);
            let check = CategoryCheck {
                category: category.name.clone(),
                current_credits: current,
                required_credits: category.required_credits,
                min_credits: category.min_credits,
                is_completed: missing == 0,
                missing_credits: missing,
            };
            if !check.is_completed {
                can_graduate = false;
                warnings.push(format!("{}学分不足: 还需 {} 学分", category.name, missing));
            }
            category_checks.push(check);
        }

        // 4. 必修课程
        let missing_required = self.missing_required(enrollments);
        if !missing_required.is_empty() {
            can_graduate = false;
            warnings.push(format!("有 {} 门必修课程未修读", missing_required.len()));
        }

        // 5. 基础类别至少修读一门
        for kind in BasicCategory::ALL {
            if self.basic_enrollment_count(kind, enrollments) == 0 {
                can_graduate = false;
                warnings.push(format!("{}尚未修读任何课程", self.basic_label(kind)));
            }
        }

        tracing::info!(
            "毕业检查完成: 可毕业={}, 已修 {} / {} 学分, 警告 {} 条",
            can_graduate,
            total_credits.current,
            total_credits.required,
            warnings.len()
        );

        CheckResult {
            can_graduate,
            total_credits,
            category_checks,
            missing_required,
            warnings,
        }
    }

    /// 未修读也未计划的必修课程（按目录顺序）
    ///
    /// 正在修读不算满足必修要求。
    pub fn missing_required(&self, enrollments: &[EnrollmentRecord]) -> Vec<Course> {
        let satisfied: HashSet<&str> = enrollments
            .iter()
            .filter(|r| r.is_counted())
            .map(|r| r.course_id.as_str())
            .collect();

        self.catalog
            .entries()
            .iter()
            .filter(|e| e.course.required)
            .filter(|e| !e.placement.track.is_excluded(self.native_speaker))
            .filter(|e| !satisfied.contains(e.course.id.as_str()))
            .map(|e| e.course.clone())
            .collect()
    }

    /// 某基础类别下已修或计划修读的记录数
    ///
    /// 外语类声明了适用方向的子类别时，只统计该方向的课程。
    fn basic_enrollment_count(&self, kind: BasicCategory, enrollments: &[EnrollmentRecord]) -> usize {
        let Some(category) = self.catalog.requirements().basic_category(kind) else {
            return 0;
        };

        let applicable = TrackTag::applicable(self.native_speaker);
        let track_only = kind == BasicCategory::Language
            && category.subcategories.iter().any(|s| s.track == applicable);

        enrollments
            .iter()
            .filter(|r| r.is_counted())
            .filter_map(|r| self.catalog.get(&r.course_id))
            .filter(|e| !e.placement.track.is_excluded(self.native_speaker))
            .filter(|e| e.placement.category.as_deref() == Some(category.name.as_str()))
            .filter(|e| !track_only || e.placement.track == applicable)
            .count()
    }

    /// 基础类别的显示名称，外语类附带适用方向
    fn basic_label(&self, kind: BasicCategory) -> String {
        let Some(category) = self.catalog.requirements().basic_category(kind) else {
            return kind.default_label().to_string();
        };

        if kind == BasicCategory::Language {
            let applicable = TrackTag::applicable(self.native_speaker);
            if let Some(sub) = category.subcategories.iter().find(|s| s.track == applicable) {
                return format!("{}（{}）", category.name, sub.name);
            }
        }
        category.name.clone()
    }
}
