// ==========================================
// CyberShield 种子数据生成器 - 城市加载器
// ==========================================
// 行格式: 第 1 列 id, 第 3 列城市名
// 不足 3 列 / id 为空 / id 非整数的行直接跳过
// ==========================================

use crate::domain::City;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::cell;
use crate::importer::sheet_reader_trait::SheetReader;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// 城市目录: id → 城市名
pub type CityCatalog = BTreeMap<i64, String>;

pub struct CityLoader<'a> {
    reader: &'a dyn SheetReader,
}

impl<'a> CityLoader<'a> {
    pub fn new(reader: &'a dyn SheetReader) -> Self {
        Self { reader }
    }

    pub fn load(&self, path: &Path) -> ImportResult<CityCatalog> {
        let rows = self.reader.read_rows(path)?;
        let mut catalog = CityCatalog::new();

        for (idx, row) in rows.iter().enumerate() {
            if row.len() < 3 {
                continue;
            }
            let id_text = cell(row, 0).trim();
            if id_text.is_empty() {
                continue;
            }
            let id = match id_text.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    debug!(row_number = idx + 1, value = %id_text, "城市 id 非整数, 跳过");
                    continue;
                }
            };
            catalog.insert(id, cell(row, 2).trim().to_string());
        }

        info!(cities = catalog.len(), "城市表加载完成");
        Ok(catalog)
    }
}

/// 只保留被引用的城市, 缺失的以占位名补齐
pub fn resolve_referenced_cities(
    catalog: &CityCatalog,
    referenced: impl IntoIterator<Item = i64>,
) -> Vec<City> {
    let mut ids: Vec<i64> = referenced.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();

    ids.into_iter()
        .map(|id| match catalog.get(&id) {
            Some(name) => City::new(id, name.clone()),
            None => {
                debug!(city_id = id, "城市表中缺失, 使用占位名称");
                City::placeholder(id)
            }
        })
        .collect()
}
