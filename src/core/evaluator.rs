//! 类别学分计算
//!
//! 基于已汇总的学分计算某个类别的有效已修学分，外语方向按配置过滤。

use crate::core::models::{CreditSummary, RequirementTree};

/// 类别学分计算器
pub struct CategoryEvaluator<'a> {
    requirements: &'a RequirementTree,
    native_speaker: bool,
}

impl<'a> CategoryEvaluator<'a> {
    pub fn new(requirements: &'a RequirementTree, native_speaker: bool) -> Self {
        Self {
            requirements,
            native_speaker,
        }
    }

    /// 计算类别的有效已修学分，未知类别返回0
    pub fn category_credits(&self, category_name: &str, summary: &CreditSummary) -> u32 {
        let Some(category) = self.requirements.category(category_name) else {
            return 0;
        };

        category
            .subcategories
            .iter()
            .filter(|sub| !sub.track.is_excluded(self.native_speaker))
            .filter_map(|sub| summary.categories.get(&sub.name))
            .fold(0u32, |acc, credits| acc.saturating_add(credits.completed))
    }
}
