// ==========================================
// CyberShield 种子数据生成器 - 人员加载器
// ==========================================
// 来源: 组织者 / 评委 / 主持人 / 参赛者 四张表（按此顺序）
// 合并: 以 email 为键, 先加载者各字段优先, 仅照片为空时由后来者补齐
// id: 全部来源合并后按 ФИО 升序分配（稳定排序）
// ==========================================

use crate::domain::{Person, PersonRole};
use crate::importer::date_parser::parse_excel_date;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::HeaderMap;
use crate::importer::sheet_reader_trait::{SheetReader, SheetRow};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 组织者的固定单位名称
pub const ORGANIZER_ORGANIZATION: &str = "Оргкомитет CyberShield";

// 表头列名（小写）
const COL_EMAIL: [&str; 2] = ["почта", "email"];
const COL_FULL_NAME: [&str; 1] = ["фио"];
const COL_BIRTH_DATE: [&str; 2] = ["дата рождения", "дата"];
const COL_COUNTRY: &str = "страна";
const COL_PHONE: [&str; 1] = ["телефон"];
const COL_PHOTO: [&str; 1] = ["фото"];
const COL_EVENT: &str = "мероприятие";
const COL_DIRECTION: &str = "направление";

/// 一个带角色标签的人员来源
#[derive(Debug, Clone)]
pub struct PeopleSource {
    pub role: PersonRole,
    pub path: PathBuf,
}

impl PeopleSource {
    pub fn new(role: PersonRole, path: impl Into<PathBuf>) -> Self {
        Self {
            role,
            path: path.into(),
        }
    }
}

/// 尚未分配 id 的人员记录
#[derive(Debug, Clone, PartialEq)]
struct PersonDraft {
    role: PersonRole,
    full_name: String,
    email: String,
    birth_date: Option<NaiveDate>,
    city_id: Option<i64>,
    organization: String,
    phone: String,
    photo: Option<String>,
}

// ==========================================
// PeopleRegistry - 按 email 合并
// ==========================================
#[derive(Debug, Default)]
struct PeopleRegistry {
    drafts: Vec<PersonDraft>,
    by_email: HashMap<String, usize>,
}

impl PeopleRegistry {
    /// 合并一条记录, 返回是否新建
    fn merge(&mut self, draft: PersonDraft) -> bool {
        match self.by_email.get(&draft.email) {
            Some(&idx) => {
                let existing = &mut self.drafts[idx];
                if existing.photo.is_none() {
                    existing.photo = draft.photo;
                }
                false
            }
            None => {
                self.by_email.insert(draft.email.clone(), self.drafts.len());
                self.drafts.push(draft);
                true
            }
        }
    }

    /// 按 ФИО 排序并分配 id
    fn into_people(self) -> Vec<Person> {
        let mut drafts = self.drafts;
        drafts.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        drafts
            .into_iter()
            .zip(1_i64..)
            .map(|(draft, id)| Person {
                id,
                role: draft.role,
                full_name: draft.full_name,
                email: draft.email,
                birth_date: draft.birth_date,
                city_id: draft.city_id,
                organization: draft.organization,
                phone: draft.phone,
                photo: draft.photo,
            })
            .collect()
    }
}

// ==========================================
// PeopleLoader
// ==========================================
pub struct PeopleLoader<'a> {
    reader: &'a dyn SheetReader,
}

impl<'a> PeopleLoader<'a> {
    pub fn new(reader: &'a dyn SheetReader) -> Self {
        Self { reader }
    }

    /// 依次加载全部来源并合并
    pub fn load(&self, sources: &[PeopleSource]) -> ImportResult<Vec<Person>> {
        let mut registry = PeopleRegistry::default();

        for source in sources {
            let (created, merged) = self.load_source(source, &mut registry)?;
            info!(
                role = %source.role,
                created = created,
                merged = merged,
                "人员来源加载完成"
            );
        }

        let people = registry.into_people();
        info!(people = people.len(), "人员合并完成");
        Ok(people)
    }

    fn load_source(
        &self,
        source: &PeopleSource,
        registry: &mut PeopleRegistry,
    ) -> ImportResult<(usize, usize)> {
        let rows = self.reader.read_rows(&source.path)?;
        let Some((header_row, data_rows)) = rows.split_first() else {
            debug!(file = %source.path.display(), "人员表为空");
            return Ok((0, 0));
        };
        let header = HeaderMap::from_header(header_row);

        let mut created = 0;
        let mut merged = 0;
        for (idx, row) in data_rows.iter().enumerate() {
            match map_row(source.role, &header, row)? {
                Some(draft) => {
                    if registry.merge(draft) {
                        created += 1;
                    } else {
                        merged += 1;
                    }
                }
                None => debug!(
                    file = %display_name(&source.path),
                    row_number = idx + 2,
                    "缺少 email, 跳过"
                ),
            }
        }
        Ok((created, merged))
    }
}

/// 行 → 人员记录; 无 email 的行返回 None
fn map_row(
    role: PersonRole,
    header: &HeaderMap,
    row: &SheetRow,
) -> ImportResult<Option<PersonDraft>> {
    let email = header.get_string(row, &COL_EMAIL);
    if email.is_empty() {
        return Ok(None);
    }

    let birth_date = parse_excel_date(&header.get_string(row, &COL_BIRTH_DATE))?;
    let city_id = header.parse_i64(row, COL_COUNTRY)?.filter(|id| *id != 0);

    Ok(Some(PersonDraft {
        role,
        full_name: header.get_string(row, &COL_FULL_NAME),
        email,
        birth_date,
        city_id,
        organization: organization_for(role, header, row),
        phone: header.get_string(row, &COL_PHONE),
        photo: header.get_optional(row, &COL_PHOTO),
    }))
}

/// 单位字段按角色派生
fn organization_for(role: PersonRole, header: &HeaderMap, row: &SheetRow) -> String {
    match role {
        PersonRole::Moderator => header.get_string(row, &[COL_EVENT, COL_DIRECTION]),
        PersonRole::Jury | PersonRole::Participant => header.get_string(row, &[COL_DIRECTION]),
        PersonRole::Organizer => ORGANIZER_ORGANIZATION.to_string(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
