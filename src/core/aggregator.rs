//! 学分汇总模块
//!
//! 把修读记录与课程目录对照，按子类别和总量累计已修/计划学分。

use crate::core::catalog::Catalog;
use crate::core::models::{CreditSummary, EnrollmentRecord, EnrollmentStatus, SubcategoryCredits};

/// 学分汇总器
pub struct CreditAggregator<'a> {
    catalog: &'a Catalog,
    native_speaker: bool,
}

impl<'a> CreditAggregator<'a> {
    pub fn new(catalog: &'a Catalog, native_speaker: bool) -> Self {
        Self {
            catalog,
            native_speaker,
        }
    }

    /// 汇总学分
    ///
    /// 同一课程出现多次时每条记录都计入；正在修读的课程不计入任何合计。
    /// 学分合计在 u32::MAX 处饱和。
    pub fn aggregate(&self, enrollments: &[EnrollmentRecord]) -> CreditSummary {
        let mut summary = CreditSummary::default();

        // 所有声明的子类别都有一个初始为0的条目
        for category in &self.catalog.requirements().categories {
            for sub in &category.subcategories {
                summary.categories.insert(
                    sub.name.clone(),
                    SubcategoryCredits {
                        completed: 0,
                        planned: 0,
                        required: sub.required_credits,
                        min: sub.min_credits,
                    },
                );
            }
        }

        for record in enrollments {
            let Some(entry) = self.catalog.get(&record.course_id) else {
                tracing::debug!("忽略未知课程: {}", record.course_id);
                continue;
            };

            if entry.placement.track.is_excluded(self.native_speaker) {
                tracing::debug!("忽略不适用方向的课程: {}", record.course_id);
                continue;
            }

            let credits = entry.course.credits;
            let bucket = entry
                .placement
                .subcategory
                .as_ref()
                .and_then(|name| summary.categories.get_mut(name));

            match record.status {
                EnrollmentStatus::Completed => {
                    summary.total.completed = summary.total.completed.saturating_add(credits);
                    if let Some(bucket) = bucket {
                        bucket.completed = bucket.completed.saturating_add(credits);
                    }
                }
                EnrollmentStatus::Planned => {
                    summary.total.planned = summary.total.planned.saturating_add(credits);
                    if let Some(bucket) = bucket {
                        bucket.planned = bucket.planned.saturating_add(credits);
                    }
                }
                EnrollmentStatus::InProgress => {}
            }
        }

        summary.total.all = summary.total.completed.saturating_add(summary.total.planned);
        summary
    }
}
