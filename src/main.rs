// ==========================================
// CyberShield 种子数据生成器 - 命令行入口
// ==========================================
// 用法:
//   cybershield-seed --session-dir session-1 --output app/sql/seed_data.sql
//   cybershield-seed --config seed.json --report report.json
// 命令行参数覆盖配置文件中的同名项
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use cybershield_seed::{logging, SeedConfig, SeedImporter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cybershield-seed", version, about = "Excel 导出表 → CyberShield 种子 SQL 脚本")]
struct Cli {
    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 导出工作簿所在目录
    #[arg(short, long)]
    session_dir: Option<PathBuf>,

    /// 输出 SQL 脚本路径
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 外部活动种子表（分号分隔）
    #[arg(long)]
    events: Option<PathBuf>,

    /// 导入报告 (JSON) 输出路径
    #[arg(long)]
    report: Option<PathBuf>,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self) -> Result<SeedConfig> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::load_from_file(path)
                .with_context(|| format!("无法加载配置: {}", path.display()))?,
            None => SeedConfig::default(),
        };

        if let Some(dir) = self.session_dir {
            config.session_dir = dir;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(events) = self.events {
            config.events_path = Some(events);
        }
        if let Some(report) = self.report {
            config.report_path = Some(report);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.json_logs);

    tracing::info!("{} v{}", cybershield_seed::APP_NAME, cybershield_seed::VERSION);

    let config = cli.into_config()?;
    let report = SeedImporter::with_xlsx()
        .run(&config)
        .with_context(|| format!("种子脚本生成失败: {}", config.output_path.display()))?;

    println!(
        "{}: {} users, {} events, {} activities, {} teams ({} unresolved references)",
        config.output_path.display(),
        report.counts.organizers
            + report.counts.jury
            + report.counts.moderators
            + report.counts.participants,
        report.counts.events,
        report.counts.activities,
        report.counts.teams,
        report.unresolved.len()
    );
    Ok(())
}
