// ==========================================
// CyberShield 种子数据生成器 - 日期规范化
// ==========================================
// 支持:
// 1. Excel 序列号日期 (基准 1899-12-30, 可带小数时刻)
// 2. 文本日期 MM.DD.YYYY / DD.MM.YYYY
// 3. 俄文长日期 "26 октября 2022 г."
// 空白输入一律返回 None, 无法识别的格式为致命错误
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// 月份名 (属格) → 月份序号
const MONTHS: [(&str, u32); 12] = [
    ("января", 1),
    ("февраля", 2),
    ("марта", 3),
    ("апреля", 4),
    ("мая", 5),
    ("июня", 6),
    ("июля", 7),
    ("августа", 8),
    ("сентября", 9),
    ("октября", 10),
    ("ноября", 11),
    ("декабря", 12),
];

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Excel 日期基准
pub fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// 解析 Excel 单元格日期
///
/// # 规则
/// - 数值: 基准日 + 整数天 (小数部分是时刻, 对日期无影响)
/// - 否则依次尝试 `%m.%d.%Y`、`%d.%m.%Y`
pub fn parse_excel_date(value: &str) -> ImportResult<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if let Ok(serial) = value.parse::<f64>() {
        let days = serial.floor();
        if !days.is_finite() {
            return Err(date_error(value));
        }
        return add_days(excel_epoch(), days as i64, value).map(Some);
    }

    NaiveDate::parse_from_str(value, "%m.%d.%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d.%m.%Y"))
        .map(Some)
        .map_err(|_| date_error(value))
}

/// 解析俄文长日期, 例如 "9 ноября 2023 г."
pub fn parse_russian_date(value: &str) -> ImportResult<Option<NaiveDate>> {
    let cleaned = strip_year_suffix(value);
    if cleaned.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(ImportError::DateFormatError {
            value: cleaned.to_string(),
        });
    }

    let day = parse_component(parts[0], "day")?;
    let month_name = parts[1].to_lowercase();
    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, number)| *number)
        .ok_or_else(|| ImportError::UnknownMonth {
            month: parts[1].to_string(),
            value: cleaned.to_string(),
        })?;
    let year = parse_component(parts[2], "year")?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .map(Some)
        .ok_or_else(|| date_error(cleaned))
}

/// 解析当日时刻 (一天的小数部分) 为时长, 精确到微秒
pub fn parse_time_fraction(value: &str) -> ImportResult<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Duration::zero());
    }

    let fraction = value
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversionError {
            field: "time_fraction".to_string(),
            message: format!("无法解析为小数: {}", value),
        })?;
    if !fraction.is_finite() {
        return Err(date_error(value));
    }

    Ok(Duration::microseconds((fraction * MICROS_PER_DAY).round() as i64))
}

/// 日期加天数, 超出可表示范围时返回 DateFormatError
///
/// # 参数
/// - value: 出错时报告的原始文本
pub fn add_days(date: NaiveDate, days: i64, value: &str) -> ImportResult<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| date_error(value))
}

/// 时刻加时长, 超出可表示范围时返回 DateFormatError
pub fn add_duration(
    datetime: NaiveDateTime,
    delta: Duration,
    value: &str,
) -> ImportResult<NaiveDateTime> {
    datetime
        .checked_add_signed(delta)
        .ok_or_else(|| date_error(value))
}

/// 去掉末尾的 "г." 纪年后缀
fn strip_year_suffix(value: &str) -> &str {
    let trimmed = value.trim();
    let without_suffix = trimmed
        .strip_suffix("г.")
        .unwrap_or(trimmed)
        .trim_end_matches(|c: char| c == ' ' || c == 'г');
    without_suffix.trim()
}

fn parse_component(token: &str, field: &str) -> ImportResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| ImportError::TypeConversionError {
            field: field.to_string(),
            message: format!("无法解析为整数: {}", token),
        })
}

fn date_error(value: &str) -> ImportError {
    ImportError::DateFormatError {
        value: value.to_string(),
    }
}
