use crate::cli::{Cli, Commands, ConfigCommands};
use anyhow::{bail, Context, Result};
use gradcheck::core::models::{CheckResult, CreditSummary, PlanValidation};
use gradcheck::storage::config::{AppConfig, ConfigManager};
use gradcheck::storage::database::EnrollmentStore;
use gradcheck::{Catalog, Course, EnrollmentRecord, PlanValidator, RequirementChecker};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

pub fn run(cli: Cli) -> Result<ExitCode> {
    let manager = ConfigManager::new(cli.config.clone().unwrap_or_else(ConfigManager::default_path));

    if let Commands::Config { command } = &cli.command {
        return run_config(&manager, command, cli.json);
    }

    let config = manager.load()?;
    let catalog = load_catalog(cli.catalog.as_deref().or(config.catalog_path.as_deref()))?;

    match &cli.command {
        Commands::Courses => {
            let courses: Vec<&Course> = catalog.courses().collect();
            if cli.json {
                print_json(&courses)?;
            } else {
                for course in courses {
                    println!("{}", format_course(course));
                }
            }
        }
        Commands::Enroll { course, status, year } => {
            if catalog.get(course).is_none() {
                bail!("未知课程: {}", course);
            }
            let store = EnrollmentStore::open(&config.database_path())?;
            let mut record = EnrollmentRecord::new(course.clone(), (*status).into());
            record.year = *year;
            store.add_enrollment(&record)?;
            println!("已添加: {} {}", record.course_id, record.status);
        }
        Commands::SetStatus { course, status } => {
            let store = EnrollmentStore::open(&config.database_path())?;
            let affected = store.update_status(course, (*status).into())?;
            if affected == 0 {
                bail!("没有 {} 的修读记录", course);
            }
            println!("已更新 {} 条记录", affected);
        }
        Commands::Drop { course } => {
            let store = EnrollmentStore::open(&config.database_path())?;
            let affected = store.remove_course(course)?;
            println!("已删除 {} 条记录", affected);
        }
        _ => return run_analysis(&cli, catalog, &config),
    }

    Ok(ExitCode::SUCCESS)
}

/// 需要检查引擎的命令
fn run_analysis(cli: &Cli, catalog: Catalog, config: &AppConfig) -> Result<ExitCode> {
    let native_speaker = if cli.native {
        true
    } else if cli.non_native {
        false
    } else {
        config.native_speaker
    };
    let enrollments = load_enrollments(cli.enrollments.as_deref(), config)?;
    let checker = RequirementChecker::new(catalog, native_speaker);
    let validator =
        PlanValidator::new(&checker).with_max_credits_per_year(config.max_credits_per_year);

    match &cli.command {
        Commands::Check => {
            let result = checker.check(&enrollments);
            if cli.json {
                print_json(&result)?;
            } else {
                print_check(&result);
            }
            if !result.can_graduate {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Summary => {
            let summary = checker.summarize(&enrollments);
            if cli.json {
                print_json(&summary)?;
            } else {
                print_summary(&summary);
            }
        }
        Commands::Plan => {
            let plan = validator.validate_plan(&enrollments);
            if cli.json {
                print_json(&plan)?;
            } else {
                print_plan(&plan);
            }
        }
        Commands::Recommend => {
            let courses = validator.recommend(&enrollments);
            if cli.json {
                print_json(&courses)?;
            } else if courses.is_empty() {
                println!("没有需要推荐的课程");
            } else {
                for course in &courses {
                    println!("{}", format_course(course));
                }
            }
        }
        Commands::List => {
            if cli.json {
                print_json(&enrollments)?;
            } else {
                for record in &enrollments {
                    match record.year {
                        Some(year) => println!("{}\t{}\t第{}学年", record.course_id, record.status, year),
                        None => println!("{}\t{}", record.course_id, record.status),
                    }
                }
            }
        }
        _ => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn run_config(manager: &ConfigManager, command: &ConfigCommands, json: bool) -> Result<ExitCode> {
    match command {
        ConfigCommands::Show => {
            let config = manager.load()?;
            if json {
                print_json(&config)?;
            } else {
                println!("配置文件: {}", manager.path().display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
        ConfigCommands::SetNative { value } => {
            let mut config = manager.load()?;
            config.native_speaker = *value;
            manager.save(&config)?;
            tracing::info!("已保存配置: native_speaker={}", value);
            println!("已设置 native_speaker = {}", value);
        }
        ConfigCommands::Reset => {
            manager.reset()?;
            println!("已恢复默认配置");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

fn load_enrollments(path: Option<&Path>, config: &AppConfig) -> Result<Vec<EnrollmentRecord>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("读取修读记录失败: {}", path.display()))?;
            Ok(serde_json::from_str(&content)?)
        }
        None => EnrollmentStore::open(&config.database_path())?.list_enrollments(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_course(course: &Course) -> String {
    let required = if course.required { " [必修]" } else { "" };
    format!(
        "{}\t{}\t{} 学分\t{}{}",
        course.id, course.name, course.credits, course.category, required
    )
}

fn print_check(result: &CheckResult) {
    if result.can_graduate {
        println!("可以毕业");
    } else {
        println!("暂不能毕业");
    }
    println!(
        "总学分: {} / {}",
        result.total_credits.current, result.total_credits.required
    );
    for check in &result.category_checks {
        let mark = if check.is_completed { "✓" } else { "✗" };
        println!(
            "  [{}] {} {} / {}",
            mark, check.category, check.current_credits, check.min_credits
        );
    }
    if !result.missing_required.is_empty() {
        println!("缺少必修课程:");
        for course in &result.missing_required {
            println!("  - {} {} ({} 学分)", course.id, course.name, course.credits);
        }
    }
    if !result.warnings.is_empty() {
        println!("警告:");
        for warning in &result.warnings {
            println!("  - {}", warning);
        }
    }
}

fn print_summary(summary: &CreditSummary) {
    println!(
        "已修 {} 学分, 计划 {} 学分, 合计 {} 学分",
        summary.total.completed, summary.total.planned, summary.total.all
    );
    for (name, credits) in &summary.categories {
        println!(
            "  {}: 已修 {} / 计划 {}",
            name, credits.completed, credits.planned
        );
    }
}

fn print_plan(plan: &PlanValidation) {
    println!("{}", if plan.is_valid { "计划有效" } else { "计划存在问题" });
    for issue in &plan.issues {
        println!("  ! {}", issue);
    }
    for recommendation in &plan.recommendations {
        println!("  > {}", recommendation);
    }
}
