// ==========================================
// CyberShield 种子数据生成器 - 表格读取 Trait
// ==========================================
// 职责: 定义加载器所需的行读取接口（不包含实现）
// 实现者: XlsxSheetReader（calamine），测试中的内存读取器
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 一行原始单元格文本（空单元格为空字符串）
pub type SheetRow = Vec<String>;

// ==========================================
// SheetReader Trait
// ==========================================
pub trait SheetReader {
    /// 读取工作簿第一个工作表的全部非空行
    ///
    /// # 参数
    /// - path: 工作簿路径
    ///
    /// # 返回
    /// - Ok(Vec<SheetRow>): 按表内顺序排列的行，全空行已丢弃
    /// - Err: 文件缺失、容器损坏、无工作表
    fn read_rows(&self, path: &Path) -> ImportResult<Vec<SheetRow>>;
}

// ==========================================
// MemorySheetReader - 内存读取器
// ==========================================
// 用途: 不落盘的测试数据源, 按路径返回预置行
#[derive(Debug, Clone, Default)]
pub struct MemorySheetReader {
    sheets: HashMap<PathBuf, Vec<SheetRow>>,
}

impl MemorySheetReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个工作表（全空行在读取时丢弃）
    pub fn with_sheet<P: Into<PathBuf>>(mut self, path: P, rows: Vec<SheetRow>) -> Self {
        self.sheets.insert(path.into(), rows);
        self
    }
}

impl SheetReader for MemorySheetReader {
    fn read_rows(&self, path: &Path) -> ImportResult<Vec<SheetRow>> {
        let rows = self
            .sheets
            .get(path)
            .ok_or_else(|| ImportError::FileNotFound(path.display().to_string()))?;
        Ok(rows
            .iter()
            .filter(|row| row.iter().any(|v| !v.is_empty()))
            .cloned()
            .collect())
    }
}
