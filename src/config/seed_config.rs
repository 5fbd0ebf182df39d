// ==========================================
// CyberShield 种子数据生成器 - 运行配置
// ==========================================
// 所有字段都有默认值, JSON 中缺省的字段取默认
// 源文件路径相对于 session_dir 解析（绝对路径原样使用）
// ==========================================

use crate::domain::PersonRole;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::event_loader::EventSource;
use crate::importer::people_loader::PeopleSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 各数据源工作簿（相对 session_dir）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub cities: PathBuf,
    pub organizers: PathBuf,
    pub jury: PathBuf,
    pub moderators: PathBuf,
    pub participants: PathBuf,
    pub activities: PathBuf,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            cities: PathBuf::from("Город_import.xlsx"),
            organizers: PathBuf::from("organizers_import/организаторы.xlsx"),
            jury: PathBuf::from("jury_import/жюри-4.xlsx"),
            moderators: PathBuf::from("moderators_import/Модераторы.xlsx"),
            participants: PathBuf::from("participants_import/участники-4.xlsx"),
            activities: PathBuf::from("Активности_import.xlsx"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// 存放导出工作簿的目录
    pub session_dir: PathBuf,
    /// 生成的 SQL 脚本
    pub output_path: PathBuf,
    pub sources: SourceFiles,
    /// 外部活动种子表; 缺省使用内嵌表
    pub events_path: Option<PathBuf>,
    /// 导入报告 (JSON); 缺省不写
    pub report_path: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from("session-1"),
            output_path: PathBuf::from("app/sql/seed_data.sql"),
            sources: SourceFiles::default(),
            events_path: None,
            report_path: None,
        }
    }
}

impl SeedConfig {
    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(SeedConfig): 未出现的字段取默认值
    /// - Err(ConfigReadError): 文件不可读或 JSON 非法
    pub fn load_from_file(path: &Path) -> ImportResult<Self> {
        let config_error = |message: String| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))
    }

    /// 在 session_dir 下解析源文件路径
    pub fn source_path(&self, relative: &Path) -> PathBuf {
        self.session_dir.join(relative)
    }

    pub fn cities_path(&self) -> PathBuf {
        self.source_path(&self.sources.cities)
    }

    pub fn activities_path(&self) -> PathBuf {
        self.source_path(&self.sources.activities)
    }

    /// 人员来源, 按导入优先级排列
    pub fn people_sources(&self) -> Vec<PeopleSource> {
        PersonRole::IMPORT_ORDER
            .iter()
            .map(|role| {
                let relative = match role {
                    PersonRole::Organizer => &self.sources.organizers,
                    PersonRole::Jury => &self.sources.jury,
                    PersonRole::Moderator => &self.sources.moderators,
                    PersonRole::Participant => &self.sources.participants,
                };
                PeopleSource::new(*role, self.source_path(relative))
            })
            .collect()
    }

    pub fn event_source(&self) -> EventSource {
        match &self.events_path {
            Some(path) => EventSource::File(path.clone()),
            None => EventSource::Embedded,
        }
    }
}
