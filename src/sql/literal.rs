// ==========================================
// CyberShield 种子数据生成器 - SQL 字面量工具
// ==========================================
// 职责: 提供 SQL 字面量与批量 INSERT 构建的公共函数
// 字符串: 单引号包裹, 内部单引号成对转义
// 缺省值: NULL
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

/// NULL 字面量
pub const NULL: &str = "NULL";

/// 字符串字面量
///
/// # 示例
/// ```
/// use cybershield_seed::sql::literal::quote;
///
/// assert_eq!(quote("O'Brien"), "'O''Brien'");
/// ```
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// 可空字符串字面量
pub fn quote_opt(value: Option<&str>) -> String {
    value.map(quote).unwrap_or_else(|| NULL.to_string())
}

/// 可空整数字面量
pub fn int_or_null(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NULL.to_string())
}

/// 日期字面量 'YYYY-MM-DD'
pub fn date_literal(value: NaiveDate) -> String {
    quote(&value.format("%Y-%m-%d").to_string())
}

/// 可空日期字面量
pub fn date_or_null(value: Option<NaiveDate>) -> String {
    value.map(date_literal).unwrap_or_else(|| NULL.to_string())
}

/// 时间戳字面量 'YYYY-MM-DD HH:MM:SS'
pub fn timestamp_literal(value: NaiveDateTime) -> String {
    quote(&value.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// 构建多行 INSERT 语句
///
/// # 参数
/// - `table`: 表名
/// - `columns`: 显式列清单
/// - `rows`: 每行已渲染好的值列表（不含括号）
///
/// # 返回
/// - 行为空时返回 None（整条语句省略）
///
/// # 示例
/// ```
/// use cybershield_seed::sql::literal::build_insert;
///
/// let rows = vec!["1, 2".to_string(), "1, 3".to_string()];
/// let sql = build_insert("activity_jury", &["activity_id", "user_id"], &rows).unwrap();
/// assert_eq!(
///     sql,
///     "INSERT INTO activity_jury (activity_id, user_id) VALUES\n    (1, 2),\n    (1, 3);\n"
/// );
/// assert!(build_insert("teams", &["id"], &[]).is_none());
/// ```
pub fn build_insert(table: &str, columns: &[&str], rows: &[String]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let values = rows
        .iter()
        .map(|row| format!("    ({})", row))
        .collect::<Vec<_>>()
        .join(",\n");

    Some(format!(
        "INSERT INTO {} ({}) VALUES\n{};\n",
        table,
        columns.join(", "),
        values
    ))
}
