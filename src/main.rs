//! GradCheck 命令行入口

mod cli;
mod commands;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // 初始化日志（输出到stderr，保持stdout的JSON干净）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    tracing::debug!("执行命令: {:?}", cli.command);

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("执行失败: {:#}", e);
            eprintln!("错误: {:#}", e);
            ExitCode::from(2)
        }
    }
}
