//! 配置文件管理模块

use crate::core::planner::MAX_CREDITS_PER_YEAR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 是否为母语者（决定外语方向）
    pub native_speaker: bool,
    /// 课程目录文件，未设置时使用内置目录
    pub catalog_path: Option<PathBuf>,
    /// 修读记录数据库路径
    pub database_path: Option<PathBuf>,
    /// 每学年计划学分上限
    pub max_credits_per_year: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            native_speaker: true,
            catalog_path: None,
            database_path: None,
            max_credits_per_year: MAX_CREDITS_PER_YEAR,
        }
    }
}

impl AppConfig {
    /// 数据库路径，未配置时放在数据目录
    pub fn database_path(&self) -> PathBuf {
        self.database_path.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("com", "gradcheck", "GradCheck")
                .map(|d| d.data_dir().join("enrollments.db"))
                .unwrap_or_else(|| PathBuf::from("enrollments.db"))
        })
    }
}

/// 配置管理器
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// 创建配置管理器
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// 获取默认配置路径
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gradcheck", "GradCheck")
            .map(|d| d.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    /// 加载配置
    pub fn load(&self) -> Result<AppConfig> {
        if self.config_path.exists() {
            let content = std::fs::read_to_string(&self.config_path)
                .with_context(|| format!("读取配置失败: {}", self.config_path.display()))?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(AppConfig::default())
        }
    }

    /// 保存配置
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// 重置为默认配置
    pub fn reset(&self) -> Result<()> {
        self.save(&AppConfig::default())
    }
}
