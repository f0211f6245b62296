use clap::{Parser, Subcommand, ValueEnum};
use gradcheck::EnrollmentStatus;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradcheck", version, about = "毕业要求检查工具")]
pub struct Cli {
    #[arg(long, global = true, help = "输出JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "课程目录文件（默认使用内置目录）")]
    pub catalog: Option<PathBuf>,
    #[arg(long, global = true, help = "修读记录JSON文件（不读取本地数据库）")]
    pub enrollments: Option<PathBuf>,
    #[arg(long, global = true, help = "配置文件路径")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, conflicts_with = "non_native", help = "按母语者检查")]
    pub native: bool,
    #[arg(long, global = true, help = "按非母语者检查")]
    pub non_native: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 检查能否毕业
    Check,
    /// 学分汇总
    Summary,
    /// 验证修读计划
    Plan,
    /// 推荐课程
    Recommend,
    /// 列出课程目录
    Courses,
    /// 列出修读记录
    List,
    /// 添加修读记录
    Enroll {
        course: String,
        #[arg(long, value_enum, default_value_t = StatusArg::Planned)]
        status: StatusArg,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        year: Option<u32>,
    },
    /// 修改课程的修读状态
    SetStatus {
        course: String,
        #[arg(value_enum)]
        status: StatusArg,
    },
    /// 删除课程的修读记录
    Drop {
        course: String,
    },
    /// 查看或修改配置
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// 显示当前配置
    Show,
    /// 设置是否为母语者（true/false）
    SetNative {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// 恢复默认配置
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Completed,
    Planned,
    InProgress,
}

impl From<StatusArg> for EnrollmentStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Completed => EnrollmentStatus::Completed,
            StatusArg::Planned => EnrollmentStatus::Planned,
            StatusArg::InProgress => EnrollmentStatus::InProgress,
        }
    }
}
