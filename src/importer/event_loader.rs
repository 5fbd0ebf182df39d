// ==========================================
// CyberShield 种子数据生成器 - 活动种子表加载器
// ==========================================
// 来源: 人工维护的分号分隔表 (id;title;start_date;days;city_id)
// 默认内嵌 seed/events.csv, 可由配置替换为外部文件
// 派生: end_date = start_date + (days - 1), 场地 = 城市占位名, 图片 = events/{id}.jpg
// ==========================================

use crate::domain::city::placeholder_name;
use crate::domain::Event;
use crate::importer::date_parser::{add_days, parse_russian_date};
use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// 内嵌的默认活动表
pub const EMBEDDED_EVENTS: &str = include_str!("../../seed/events.csv");

/// 活动表来源
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventSource {
    #[default]
    Embedded,
    File(PathBuf),
}

#[derive(Debug, Deserialize)]
struct EventSeedRow {
    id: i64,
    title: String,
    start_date: String,
    days: i64,
    city_id: i64,
}

pub struct EventLoader;

impl EventLoader {
    pub fn load(&self, source: &EventSource) -> ImportResult<Vec<Event>> {
        let events = match source {
            EventSource::Embedded => parse_events(EMBEDDED_EVENTS.as_bytes())?,
            EventSource::File(path) => self.load_file(path)?,
        };
        info!(events = events.len(), "活动种子表加载完成");
        Ok(events)
    }

    fn load_file(&self, path: &Path) -> ImportResult<Vec<Event>> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        parse_events(file)
    }
}

/// 解析分号分隔的活动表（首行为表头）
pub fn parse_events<R: Read>(input: R) -> ImportResult<Vec<Event>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(input);

    let mut events = Vec::new();
    for result in reader.deserialize::<EventSeedRow>() {
        events.push(to_event(result?)?);
    }
    Ok(events)
}

fn to_event(row: EventSeedRow) -> ImportResult<Event> {
    let start_date = parse_russian_date(&row.start_date)?.ok_or_else(|| {
        ImportError::SeedParseError(format!("活动 {} 缺少开始日期", row.id))
    })?;

    let end_date = add_days(
        start_date,
        row.days.saturating_sub(1),
        &format!("{} + {} дн.", row.start_date, row.days),
    )?;

    Ok(Event {
        id: row.id,
        title: row.title,
        start_date,
        end_date,
        city_id: row.city_id,
        venue: placeholder_name(row.city_id),
        image_path: format!("events/{}.jpg", row.id),
    })
}
