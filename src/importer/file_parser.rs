// ==========================================
// CyberShield 种子数据生成器 - Excel 读取器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 只读取第一个工作表; 共享字符串表由 calamine 解析（缺失时视为空表）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sheet_reader_trait::{SheetReader, SheetRow};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

// ==========================================
// XlsxSheetReader 实现
// ==========================================
pub struct XlsxSheetReader;

impl SheetReader for XlsxSheetReader {
    fn read_rows(&self, path: &Path) -> ImportResult<Vec<SheetRow>> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::SheetMissing(path.display().to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 区间不一定从 A 列开始, 补齐左侧空列以保持列号
        let leading_cols = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let mut rows = Vec::new();
        for data_row in range.rows() {
            let mut row: SheetRow = vec![String::new(); leading_cols];
            row.extend(data_row.iter().map(cell_to_string));

            // calamine 按整表宽度补齐, 去掉行尾空单元格, 行长度即实际填写的列数
            while row.last().is_some_and(|v| v.is_empty()) {
                row.pop();
            }

            // 跳过完全空白的行
            if row.is_empty() {
                continue;
            }
            rows.push(row);
        }

        debug!(
            file = %path.display(),
            sheet = %sheet_name,
            rows = rows.len(),
            "工作表读取完成"
        );
        Ok(rows)
    }
}

/// 单元格 → 原始文本
///
/// 数值与日期单元格均还原为序列号文本, 由下游解析器解释
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Data::DateTime(dt) => format_number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// 数值文本: 整数不带小数点 (45000 而非 45000.0)
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
