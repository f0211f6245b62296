//! 数据库存储模块
//!
//! 使用SQLite存储修读记录。检查引擎本身不做持久化，此模块只负责
//! 向引擎提供 EnrollmentRecord 列表。

use crate::core::models::{EnrollmentRecord, EnrollmentStatus};
use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

/// 带存储信息的修读记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEnrollment {
    /// 行ID
    pub id: i64,
    pub record: EnrollmentRecord,
    pub created_at: DateTime<Utc>,
}

/// 修读记录存储
pub struct EnrollmentStore {
    conn: Connection,
}

impl EnrollmentStore {
    /// 打开或创建数据库
    pub fn open(path: &Path) -> Result<Self> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_tables()?;
        Ok(store)
    }

    /// 初始化表结构
    fn init_tables(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            -- 修读记录表（同一课程允许多行）
            CREATE TABLE IF NOT EXISTS enrollments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                course_id TEXT NOT NULL,
                status TEXT NOT NULL,
                year INTEGER,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_enrollments_course ON enrollments(course_id);
            "#,
        )?;
        Ok(())
    }

    /// 添加修读记录，返回行ID
    pub fn add_enrollment(&self, record: &EnrollmentRecord) -> Result<i64> {
        if record.year == Some(0) {
            bail!("学年必须为正整数: {}", record.course_id);
        }

        self.conn.execute(
            r#"
            INSERT INTO enrollments (course_id, status, year, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                record.course_id,
                record.status.to_string(),
                record.year,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// 更新某课程所有记录的状态，返回受影响行数
    pub fn update_status(&self, course_id: &str, status: EnrollmentStatus) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE enrollments SET status = ?1 WHERE course_id = ?2",
            params![status.to_string(), course_id],
        )?;
        Ok(affected)
    }

    /// 删除某课程的所有记录
    pub fn remove_course(&self, course_id: &str) -> Result<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM enrollments WHERE course_id = ?1", params![course_id])?;
        Ok(affected)
    }

    /// 按添加顺序列出所有记录
    pub fn list_entries(&self) -> Result<Vec<StoredEnrollment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, course_id, status, year, created_at
            FROM enrollments
            ORDER BY id ASC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<u32>>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, course_id, status_str, year, created_at_str) = row?;
            let status = status_str.parse::<EnrollmentStatus>().map_err(|e| anyhow!(e))?;
            entries.push(StoredEnrollment {
                id,
                record: EnrollmentRecord {
                    course_id,
                    status,
                    year,
                },
                created_at: DateTime::parse_from_rfc3339(&created_at_str)
                    .map(|d| d.with_timezone(&Utc))
                    .unwrap_or_else(|_| Utc::now()),
            });
        }
        Ok(entries)
    }

    /// 列出供检查引擎使用的记录
    pub fn list_enrollments(&self) -> Result<Vec<EnrollmentRecord>> {
        Ok(self.list_entries()?.into_iter().map(|e| e.record).collect())
    }

    /// 清空所有记录
    pub fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM enrollments", [])?)
    }
}
