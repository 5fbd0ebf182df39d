// ==========================================
// CyberShield 种子数据生成器 - 字段映射器
// ==========================================
// 职责: 表头 → 列号映射 + 别名取值
// 人员表: 表头 TRIM + 小写后按列名取值
// 议程表: 表头按原文精确匹配
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

/// 按列号取单元格, 越界视为空
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

// ==========================================
// HeaderMap - 小写表头映射
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// 从表头行构建（同名列以靠后的为准）
    pub fn from_header(header: &[String]) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().to_lowercase(), idx))
            .collect();
        Self { columns }
    }

    /// 取原始值（不做 TRIM）, 列不存在时为空
    pub fn raw<'a>(&self, row: &'a [String], key: &str) -> &'a str {
        self.columns
            .get(key)
            .map(|idx| cell(row, *idx))
            .unwrap_or("")
    }

    /// 提取字符串字段，支持多个可能的列名（别名）
    ///
    /// 取第一个非空原始值再 TRIM; 全部为空时返回空字符串
    pub fn get_string(&self, row: &[String], aliases: &[&str]) -> String {
        aliases
            .iter()
            .map(|alias| self.raw(row, alias))
            .find(|value| !value.is_empty())
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// 同 get_string, 空值映射为 None
    pub fn get_optional(&self, row: &[String], aliases: &[&str]) -> Option<String> {
        let value = self.get_string(row, aliases);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// 解析整数字段（接受 "34" 与 "34.0"）
    pub fn parse_i64(&self, row: &[String], key: &str) -> ImportResult<Option<i64>> {
        let value = self.raw(row, key);
        if value.is_empty() {
            return Ok(None);
        }
        parse_integer_text(value, key).map(Some)
    }
}

/// 数值文本取整数部分
pub fn parse_integer_text(value: &str, field: &str) -> ImportResult<i64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(|number| number.trunc() as i64)
        .ok_or_else(|| ImportError::TypeConversionError {
            field: field.to_string(),
            message: format!("无法解析为整数: {}", value),
        })
}

/// 在原文表头中定位必需列
pub fn require_column(header: &[String], name: &str, file: &str) -> ImportResult<usize> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ImportError::ColumnMissing {
            file: file.to_string(),
            column: name.to_string(),
        })
}
