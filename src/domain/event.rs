// ==========================================
// CyberShield 种子数据生成器 - 活动 (Event) 实体
// ==========================================

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    /// 标题, 议程表通过精确标题匹配引用活动
    pub title: String,
    pub start_date: NaiveDate,
    /// start_date + (天数 - 1)
    pub end_date: NaiveDate,
    pub city_id: i64,
    pub venue: String,
    pub image_path: String,
}

impl Event {
    /// 持续天数 (含首尾)
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
