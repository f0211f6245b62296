//! Storage模块 - 配置文件与修读记录持久化

pub mod config;
pub mod database;
