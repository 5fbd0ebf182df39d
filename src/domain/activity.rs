// ==========================================
// CyberShield 种子数据生成器 - 议程 (Activity) 实体
// ==========================================

use chrono::{Duration, NaiveDateTime};

/// 每个议程固定时长 (小时)
pub const ACTIVITY_DURATION_HOURS: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub moderator_id: Option<i64>,
    /// 获胜者 (自由文本)
    pub winner: Option<String>,
}

impl Activity {
    /// 由开始时间推导结束时间（超出可表示范围时为 None）
    pub fn end_for(start: NaiveDateTime) -> Option<NaiveDateTime> {
        start.checked_add_signed(Duration::hours(ACTIVITY_DURATION_HOURS))
    }
}

/// 议程-评委关联 (多对多)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityJuryLink {
    pub activity_id: i64,
    pub person_id: i64,
}
