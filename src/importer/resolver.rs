// ==========================================
// CyberShield 种子数据生成器 - 交叉引用解析器
// ==========================================
// 各表之间没有共享主键, 只能用人类可读文本互相引用:
//   议程表 → 活动: 按标题
//   议程表 → 主持人/评委: 按 ФИО
// 匹配规则: 两端 TRIM 后精确相等, 不做模糊匹配
// 注意: 拼写不一致会导致关联静默丢失（记入导入报告）
// ==========================================

use crate::domain::{Event, Person};
use std::collections::HashMap;

/// 只读索引, 活动与人员加载完成后构建一次
#[derive(Debug)]
pub struct CrossReferenceIndex<'a> {
    events_by_title: HashMap<&'a str, &'a Event>,
    people_by_name: HashMap<&'a str, &'a Person>,
}

impl<'a> CrossReferenceIndex<'a> {
    /// 构建索引（同名条目以靠后的为准）
    pub fn build(events: &'a [Event], people: &'a [Person]) -> Self {
        let events_by_title = events
            .iter()
            .map(|event| (event.title.trim(), event))
            .collect();
        let people_by_name = people
            .iter()
            .map(|person| (person.full_name.trim(), person))
            .collect();

        Self {
            events_by_title,
            people_by_name,
        }
    }

    pub fn event_by_title(&self, title: &str) -> Option<&'a Event> {
        self.events_by_title.get(title.trim()).copied()
    }

    pub fn person_by_name(&self, full_name: &str) -> Option<&'a Person> {
        self.people_by_name.get(full_name.trim()).copied()
    }
}
