// ==========================================
// CyberShield 种子数据生成器 - 团队合成
// ==========================================
// 团队不是输入实体: 参赛者按单位字段（направление）分组
// 空方向归入默认赛道 "Общий поток"
// 团队 id 按赛道名升序分配, 成员按人员 id 顺序
// ==========================================

use crate::domain::team::DEFAULT_TRACK;
use crate::domain::{Person, Team, TeamMemberLink};
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesizedTeams {
    pub teams: Vec<Team>,
    pub members: Vec<TeamMemberLink>,
}

pub struct TeamSynthesizer;

impl TeamSynthesizer {
    pub fn build(&self, people: &[Person]) -> SynthesizedTeams {
        let mut tracks: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
        for person in people.iter().filter(|p| p.is_participant()) {
            let track = if person.organization.is_empty() {
                DEFAULT_TRACK
            } else {
                person.organization.as_str()
            };
            tracks.entry(track).or_default().push(person.id);
        }

        let mut result = SynthesizedTeams::default();
        for ((track, members), team_id) in tracks.into_iter().zip(1_i64..) {
            result.teams.push(Team::for_track(team_id, track));
            result
                .members
                .extend(members.into_iter().map(|person_id| TeamMemberLink {
                    team_id,
                    person_id,
                }));
        }

        info!(
            teams = result.teams.len(),
            members = result.members.len(),
            "团队合成完成"
        );
        result
    }
}
