// ==========================================
// CyberShield 种子数据生成器 - 城市实体
// ==========================================

/// 国家固定为俄罗斯联邦 (countries 表唯一一行)
pub const DEFAULT_COUNTRY_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
}

impl City {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country_id: DEFAULT_COUNTRY_ID,
        }
    }

    /// 被引用但城市表中缺失时的占位城市
    pub fn placeholder(id: i64) -> Self {
        Self::new(id, placeholder_name(id))
    }
}

/// 占位名称, 同时用作活动场地名
pub fn placeholder_name(id: i64) -> String {
    format!("Город {}", id)
}
