// ==========================================
// CyberShield 种子数据生成器 - 导入报告
// ==========================================
// 职责: 统计各实体数量, 收集未解析的文本引用
// 红线: 纯诊断信息, 不影响生成的 SQL
// ==========================================

use crate::domain::{PersonRole, SeedDataset};
use crate::importer::error::ImportResult;
use serde::Serialize;

/// 未命中的引用类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceKind {
    /// 议程表中的活动标题
    Event,
    /// 议程的主持人
    Moderator,
    /// 议程的评委
    Jury,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    pub kind: ReferenceKind,
    /// 未命中的原文
    pub name: String,
    /// 议程表行号（1 起, 含表头）
    pub row_number: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub cities: usize,
    pub organizers: usize,
    pub jury: usize,
    pub moderators: usize,
    pub participants: usize,
    pub events: usize,
    pub activities: usize,
    pub activity_jury: usize,
    pub teams: usize,
    pub team_participants: usize,
}

impl EntityCounts {
    pub fn from_dataset(dataset: &SeedDataset) -> Self {
        let by_role =
            |role: PersonRole| dataset.people.iter().filter(|p| p.role == role).count();

        Self {
            cities: dataset.cities.len(),
            organizers: by_role(PersonRole::Organizer),
            jury: by_role(PersonRole::Jury),
            moderators: by_role(PersonRole::Moderator),
            participants: by_role(PersonRole::Participant),
            events: dataset.events.len(),
            activities: dataset.activities.len(),
            activity_jury: dataset.jury_links.len(),
            teams: dataset.teams.len(),
            team_participants: dataset.team_members.len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub counts: EntityCounts,
    pub unresolved: Vec<UnresolvedReference>,
}

impl ImportReport {
    pub fn record_unresolved(&mut self, kind: ReferenceKind, name: &str, row_number: usize) {
        self.unresolved.push(UnresolvedReference {
            kind,
            name: name.to_string(),
            row_number,
        });
    }

    pub fn unresolved_count(&self, kind: ReferenceKind) -> usize {
        self.unresolved.iter().filter(|u| u.kind == kind).count()
    }

    /// 报告的 JSON 文本
    pub fn to_json(&self) -> ImportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
