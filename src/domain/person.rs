// ==========================================
// CyberShield 种子数据生成器 - 人员实体
// ==========================================
// 主键: email (跨来源合并)
// id: 全部来源加载完毕后按 ФИО 排序分配
// ==========================================

use crate::domain::types::PersonRole;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub role: PersonRole,
    pub full_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub city_id: Option<i64>,
    pub organization: String,
    pub phone: String,
    /// 原始照片文件名
    pub photo: Option<String>,
}

impl Person {
    /// 照片相对路径: people/{角色}/{文件名}
    pub fn photo_path(&self) -> Option<String> {
        self.photo
            .as_ref()
            .map(|photo| format!("people/{}/{}", self.role.photo_dir(), photo))
    }

    pub fn is_participant(&self) -> bool {
        self.role == PersonRole::Participant
    }
}
