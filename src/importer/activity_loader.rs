// ==========================================
// CyberShield 种子数据生成器 - 议程加载器
// ==========================================
// 议程表是稀疏分组结构:
//   "Наименование мероприятия" 非空的行 = 分组头, 切换当前活动, 本身不是议程
//   其后该列为空、"Активность" 非空的行 = 属于当前活动的议程
//   出现任何分组头之前（或分组头未匹配到活动时）的议程行被跳过
// 时间: 活动开始日 + (День - 1) 天 + Время начала (一天的小数部分), 时长固定 2 小时
// ==========================================

use crate::domain::{Activity, ActivityJuryLink, Event};
use crate::importer::date_parser::{add_days, add_duration, parse_time_fraction};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{cell, parse_integer_text, require_column};
use crate::importer::report::{ImportReport, ReferenceKind};
use crate::importer::resolver::CrossReferenceIndex;
use crate::importer::sheet_reader_trait::{SheetReader, SheetRow};
use chrono::{NaiveDateTime, NaiveTime};
use std::path::Path;
use tracing::{debug, info};

const COL_EVENT_NAME: &str = "Наименование мероприятия";
const COL_ACTIVITY: &str = "Активность";
const COL_DAY: &str = "День";
const COL_START_TIME: &str = "Время начала";
const COL_MODERATOR: &str = "Модератор";
const COL_JURY: [&str; 5] = ["Жюри 1", "Жюри 2", "Жюри 3", "Жюри 4", "Жюри 5"];
const COL_WINNER: &str = "Победитель";

/// 议程加载结果
#[derive(Debug, Clone, Default)]
pub struct LoadedActivities {
    pub activities: Vec<Activity>,
    pub jury_links: Vec<ActivityJuryLink>,
}

/// 议程表列号
#[derive(Debug, Clone)]
struct ActivityColumns {
    event_name: usize,
    activity: usize,
    day: usize,
    start_time: usize,
    moderator: usize,
    jury: [usize; 5],
    winner: usize,
}

impl ActivityColumns {
    fn locate(header: &[String], file: &str) -> ImportResult<Self> {
        let mut jury = [0; 5];
        for (slot, name) in jury.iter_mut().zip(COL_JURY) {
            *slot = require_column(header, name, file)?;
        }

        Ok(Self {
            event_name: require_column(header, COL_EVENT_NAME, file)?,
            activity: require_column(header, COL_ACTIVITY, file)?,
            day: require_column(header, COL_DAY, file)?,
            start_time: require_column(header, COL_START_TIME, file)?,
            moderator: require_column(header, COL_MODERATOR, file)?,
            jury,
            winner: require_column(header, COL_WINNER, file)?,
        })
    }
}

pub struct ActivityLoader<'a> {
    reader: &'a dyn SheetReader,
    index: &'a CrossReferenceIndex<'a>,
}

impl<'a> ActivityLoader<'a> {
    pub fn new(reader: &'a dyn SheetReader, index: &'a CrossReferenceIndex<'a>) -> Self {
        Self { reader, index }
    }

    /// 扫描议程表
    ///
    /// # 返回
    /// - 议程 (id 从 1 顺序分配) 与议程-评委关联
    /// - 未命中的活动/主持人/评委引用记入 report
    pub fn load(&self, path: &Path, report: &mut ImportReport) -> ImportResult<LoadedActivities> {
        let rows = self.reader.read_rows(path)?;
        let Some((header, data_rows)) = rows.split_first() else {
            debug!(file = %path.display(), "议程表为空");
            return Ok(LoadedActivities::default());
        };
        let columns = ActivityColumns::locate(header, &path.display().to_string())?;

        let mut loaded = LoadedActivities::default();
        // 唯一状态: 当前所属活动
        let mut current_event: Option<&Event> = None;

        for (idx, row) in data_rows.iter().enumerate() {
            let row_number = idx + 2;

            let event_name = cell(row, columns.event_name).trim();
            if !event_name.is_empty() {
                current_event = self.index.event_by_title(event_name);
                if current_event.is_none() {
                    debug!(row_number, title = %event_name, "活动标题未匹配");
                    report.record_unresolved(ReferenceKind::Event, event_name, row_number);
                }
                continue;
            }

            let Some(event) = current_event else {
                continue;
            };
            let activity_name = cell(row, columns.activity).trim();
            if activity_name.is_empty() {
                continue;
            }

            let activity_id = loaded.activities.len() as i64 + 1;
            let start = activity_start(event, row, &columns)?;
            let end = Activity::end_for(start).ok_or_else(|| ImportError::DateFormatError {
                value: start.to_string(),
            })?;
            let moderator_id = self.resolve_person(
                cell(row, columns.moderator),
                ReferenceKind::Moderator,
                row_number,
                report,
            );

            for jury_idx in columns.jury {
                if let Some(person_id) = self.resolve_person(
                    cell(row, jury_idx),
                    ReferenceKind::Jury,
                    row_number,
                    report,
                ) {
                    loaded.jury_links.push(ActivityJuryLink {
                        activity_id,
                        person_id,
                    });
                }
            }

            let winner = cell(row, columns.winner).trim();
            loaded.activities.push(Activity {
                id: activity_id,
                event_id: event.id,
                name: activity_name.to_string(),
                start,
                end,
                moderator_id,
                winner: (!winner.is_empty()).then(|| winner.to_string()),
            });
        }

        info!(
            activities = loaded.activities.len(),
            jury_links = loaded.jury_links.len(),
            "议程表加载完成"
        );
        Ok(loaded)
    }

    /// 按 ФИО 解析人员; 空白返回 None, 未命中记入报告后返回 None
    fn resolve_person(
        &self,
        raw_name: &str,
        kind: ReferenceKind,
        row_number: usize,
        report: &mut ImportReport,
    ) -> Option<i64> {
        let name = raw_name.trim();
        if name.is_empty() {
            return None;
        }
        match self.index.person_by_name(name) {
            Some(person) => Some(person.id),
            None => {
                debug!(row_number, name = %name, kind = ?kind, "人员未匹配");
                report.record_unresolved(kind, name, row_number);
                None
            }
        }
    }
}

/// 议程开始时间
fn activity_start(
    event: &Event,
    row: &SheetRow,
    columns: &ActivityColumns,
) -> ImportResult<NaiveDateTime> {
    let day_text = cell(row, columns.day);
    let day = if day_text.is_empty() {
        1
    } else {
        parse_integer_text(day_text, COL_DAY)?
    };
    let time_of_day = parse_time_fraction(cell(row, columns.start_time))?;

    let date = add_days(event.start_date, day.saturating_sub(1), day_text)?;
    add_duration(
        NaiveDateTime::new(date, NaiveTime::MIN),
        time_of_day,
        cell(row, columns.start_time),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Person, PersonRole};
    use crate::importer::sheet_reader_trait::MemorySheetReader;
    use chrono::{Duration, NaiveDate};

    const HEADER: [&str; 11] = [
        "Наименование мероприятия",
        "Активность",
        "День",
        "Время начала",
        "Модератор",
        "Жюри 1",
        "Жюри 2",
        "Жюри 3",
        "Жюри 4",
        "Жюри 5",
        "Победитель",
    ];

    fn row(values: &[&str]) -> SheetRow {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn events() -> Vec<Event> {
        let start = NaiveDate::from_ymd_opt(2023, 11, 9).unwrap();
        vec![Event {
            id: 3,
            title: "Встреча клуба «Leader stories»".to_string(),
            start_date: start,
            end_date: start + Duration::days(1),
            city_id: 2,
            venue: "Город 2".to_string(),
            image_path: "events/3.jpg".to_string(),
        }]
    }

    fn people() -> Vec<Person> {
        ["Андреев Антон", "Белова Вера"]
            .iter()
            .zip(1_i64..)
            .map(|(name, id)| Person {
                id,
                role: PersonRole::Jury,
                full_name: name.to_string(),
                email: format!("p{}@example.com", id),
                birth_date: None,
                city_id: None,
                organization: String::new(),
                phone: String::new(),
                photo: None,
            })
            .collect()
    }

    fn sheet() -> Vec<SheetRow> {
        vec![
            row(&HEADER),
            // 分组头之前的议程行: 跳过
            row(&["", "Сирота", "1", "0.5", "", "", "", "", "", "", ""]),
            row(&["Встреча клуба «Leader stories»", "", "", "", "", "", "", "", "", "", ""]),
            row(&["", "Открытие", "1", "0.4166666666666667", "Андреев Антон", "Белова Вера", "Неизвестный", "", "", "", "Команда A"]),
            row(&["", "Финал", "2", "0.75", "Никто", "", "", "", "", "", ""]),
            row(&["", "", "2", "0.8", "", "", "", "", "", "", ""]),
            row(&["Несуществующее мероприятие", "", "", "", "", "", "", "", "", "", ""]),
            row(&["", "Потерянная", "1", "0.5", "", "", "", "", "", "", ""]),
        ]
    }

    fn load(rows: Vec<SheetRow>) -> (ImportResult<LoadedActivities>, ImportReport) {
        let events = events();
        let people = people();
        let index = CrossReferenceIndex::build(&events, &people);
        let reader = MemorySheetReader::new().with_sheet("activities.xlsx", rows);
        let mut report = ImportReport::default();
        let result = ActivityLoader::new(&reader, &index)
            .load(Path::new("activities.xlsx"), &mut report);
        (result, report)
    }

    #[test]
    fn test_activities_grouped_under_current_event() {
        let (result, _) = load(sheet());
        let loaded = result.unwrap();

        let names: Vec<&str> = loaded.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Открытие", "Финал"]);
        assert!(loaded.activities.iter().all(|a| a.event_id == 3));
        assert_eq!(loaded.activities[0].id, 1);
        assert_eq!(loaded.activities[1].id, 2);
    }

    #[test]
    fn test_activity_timestamps() {
        let (result, _) = load(sheet());
        let loaded = result.unwrap();

        let opening = &loaded.activities[0];
        assert_eq!(
            opening.start,
            NaiveDate::from_ymd_opt(2023, 11, 9)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        let finale = &loaded.activities[1];
        assert_eq!(
            finale.start,
            NaiveDate::from_ymd_opt(2023, 11, 10)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap()
        );
        for activity in &loaded.activities {
            assert!(activity.start < activity.end);
            assert_eq!(activity.end - activity.start, Duration::hours(2));
        }
    }

    #[test]
    fn test_moderator_and_jury_resolution() {
        let (result, report) = load(sheet());
        let loaded = result.unwrap();

        assert_eq!(loaded.activities[0].moderator_id, Some(1));
        assert_eq!(loaded.activities[0].winner, Some("Команда A".to_string()));
        assert_eq!(loaded.activities[1].moderator_id, None);
        assert_eq!(loaded.activities[1].winner, None);

        // 未命中的评委不产生关联, 也不报错
        assert_eq!(
            loaded.jury_links,
            vec![ActivityJuryLink {
                activity_id: 1,
                person_id: 2
            }]
        );
        assert_eq!(report.unresolved_count(ReferenceKind::Jury), 1);
        assert_eq!(report.unresolved_count(ReferenceKind::Moderator), 1);
        assert_eq!(report.unresolved_count(ReferenceKind::Event), 1);
    }

    #[test]
    fn test_blank_day_and_time_default() {
        let rows = vec![
            row(&HEADER),
            row(&["Встреча клуба «Leader stories»", "", "", "", "", "", "", "", "", "", ""]),
            row(&["", "Без времени", "", "", "", "", "", "", "", "", ""]),
        ];
        let (result, _) = load(rows);
        let loaded = result.unwrap();

        assert_eq!(
            loaded.activities[0].start,
            NaiveDate::from_ymd_opt(2023, 11, 9)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let rows = vec![row(&["Наименование мероприятия", "Активность"])];
        let (result, _) = load(rows);
        assert!(matches!(result, Err(ImportError::ColumnMissing { .. })));
    }

    #[test]
    fn test_day_out_of_range_is_fatal() {
        let rows = vec![
            row(&HEADER),
            row(&["Встреча клуба «Leader stories»", "", "", "", "", "", "", "", "", "", ""]),
            row(&["", "Открытие", "100000000000", "0.5", "", "", "", "", "", "", ""]),
        ];
        let (result, _) = load(rows);
        assert!(matches!(result, Err(ImportError::DateFormatError { .. })));
    }

    #[test]
    fn test_time_fraction_out_of_range_is_fatal() {
        let rows = vec![
            row(&HEADER),
            row(&["Встреча клуба «Leader stories»", "", "", "", "", "", "", "", "", "", ""]),
            row(&["", "Открытие", "1", "1e30", "", "", "", "", "", "", ""]),
        ];
        let (result, _) = load(rows);
        assert!(matches!(result, Err(ImportError::DateFormatError { .. })));
    }

    #[test]
    fn test_invalid_time_is_fatal() {
        let rows = vec![
            row(&HEADER),
            row(&["Встреча клуба «Leader stories»", "", "", "", "", "", "", "", "", "", ""]),
            row(&["", "Открытие", "1", "утром", "", "", "", "", "", "", ""]),
        ];
        let (result, _) = load(rows);
        assert!(result.is_err());
    }
}
