//! 课程目录模块
//!
//! 负责加载课程与毕业要求树，并在加载时一次性解析每门课程所属的类别、
//! 子类别与外语方向。加载完成后目录只读。

use crate::core::models::{Category, Course, RequirementTree, TrackTag};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// 内置课程目录
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// 目录加载错误
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("子类别名称重复: {0}")]
    DuplicateSubcategory(String),

    #[error("课程编号重复: {0}")]
    DuplicateCourse(String),

    #[error("课程 {0} 的学分必须为正数")]
    InvalidCredits(String),

    #[error("目录格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("无法读取目录文件 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 目录文件格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub requirements: RequirementTree,
    pub courses: Vec<Course>,
}

/// 课程在要求树中的位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// 所属类别
    pub category: Option<String>,
    /// 所属子类别（学分汇总以此为键）
    pub subcategory: Option<String>,
    /// 外语方向
    pub track: TrackTag,
}

/// 目录条目
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub course: Course,
    pub placement: Placement,
}

/// 课程目录
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
    requirements: RequirementTree,
}

impl Catalog {
    /// 创建目录，校验要求树并解析课程位置
    pub fn new(courses: Vec<Course>, mut requirements: RequirementTree) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &requirements.categories {
            for sub in &category.subcategories {
                if !seen.insert(sub.name.clone()) {
                    return Err(CatalogError::DuplicateSubcategory(sub.name.clone()));
                }
            }
        }

        // 子类别未标记方向时继承类别
        for category in requirements.categories.iter_mut() {
            let inherited = category.track;
            for sub in category.subcategories.iter_mut() {
                if sub.track == TrackTag::None {
                    sub.track = inherited;
                }
            }
        }

        let mut entries = Vec::with_capacity(courses.len());
        let mut index = HashMap::with_capacity(courses.len());
        for course in courses {
            if course.credits == 0 {
                return Err(CatalogError::InvalidCredits(course.id));
            }
            if index.contains_key(&course.id) {
                return Err(CatalogError::DuplicateCourse(course.id));
            }
            let placement = resolve_placement(&course.category, &requirements);
            if placement.category.is_none() {
                tracing::warn!("课程 {} 的类别 {} 不在毕业要求中", course.id, course.category);
            }
            index.insert(course.id.clone(), entries.len());
            entries.push(CatalogEntry { course, placement });
        }

        tracing::info!(
            "已加载课程目录: {} 门课程, {} 个类别",
            entries.len(),
            requirements.categories.len()
        );

        Ok(Self {
            entries,
            index,
            requirements,
        })
    }

    /// 从JSON加载
    pub fn from_json(json_str: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json_str)?;
        Self::new(doc.courses, doc.requirements)
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// 内置目录
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// 按编号查找
    pub fn get(&self, course_id: &str) -> Option<&CatalogEntry> {
        self.index.get(course_id).map(|&i| &self.entries[i])
    }

    /// 所有课程（保持目录顺序）
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.entries.iter().map(|e| &e.course)
    }

    pub fn requirements(&self) -> &RequirementTree {
        &self.requirements
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.requirements.category(name)
    }

    /// 某类别下的所有课程
    pub fn courses_in_category<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.placement.category.as_deref() == Some(name))
    }
}

/// 解析类别标签
///
/// "系统/子类别" 先按子类别查找，再按类别查找；
/// 不含 '/' 的标签先匹配子类别名称，再匹配类别名称。
fn resolve_placement(label: &str, tree: &RequirementTree) -> Placement {
    let (system, leaf) = match label.split_once('/') {
        Some((system, leaf)) => (Some(system.trim()), leaf.trim()),
        None => (None, label.trim()),
    };

    if let Some((category, sub)) = tree.subcategory(leaf) {
        return Placement {
            category: Some(category.name.clone()),
            subcategory: Some(sub.name.clone()),
            track: sub.track,
        };
    }

    let category_name = system.unwrap_or(leaf);
    if let Some(category) = tree.category(category_name) {
        return Placement {
            category: Some(category.name.clone()),
            subcategory: None,
            track: category.track,
        };
    }

    Placement::default()
}
