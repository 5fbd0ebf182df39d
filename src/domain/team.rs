// ==========================================
// CyberShield 种子数据生成器 - 团队实体
// ==========================================
// 团队不是输入实体: 由参赛者的方向 (направление) 合成
// ==========================================

/// 方向为空时的默认赛道
pub const DEFAULT_TRACK: &str = "Общий поток";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub track: String,
}

impl Team {
    pub fn for_track(id: i64, track: &str) -> Self {
        Self {
            id,
            name: format!("Команда {}", track),
            track: track.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMemberLink {
    pub team_id: i64,
    pub person_id: i64,
}
