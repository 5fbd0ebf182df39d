// ==========================================
// CyberShield 种子数据生成器 - SQL 脚本生成
// ==========================================
// 语句顺序（遵循外键依赖）:
// 1. 关闭外键检查 + 清空全部表
// 2. 固定国家行
// 3. cities → conference_users → events → activities
//    → activity_jury → teams → team_participants
// 4. 恢复外键检查
// 任一列表为空时对应 INSERT 整条省略
// ==========================================

use crate::domain::SeedDataset;
use crate::sql::literal::{
    build_insert, date_literal, date_or_null, int_or_null, quote, quote_opt, timestamp_literal,
};

/// 脚本首行注释
pub const SCRIPT_HEADER: &str = "-- Автоматически сгенерированный скрипт заполнения данных CyberShield";

/// 清空顺序: 先关联表, 后被引用表
pub const TRUNCATE_ORDER: [&str; 8] = [
    "activity_jury",
    "activities",
    "events",
    "team_participants",
    "teams",
    "conference_users",
    "cities",
    "countries",
];

/// 固定国家行
pub const COUNTRY_INSERT: &str =
    "INSERT INTO countries (id, name, iso_code) VALUES (1, 'Российская Федерация', 'RU');";

pub struct SqlEmitter;

impl SqlEmitter {
    /// 渲染完整脚本（相同输入产生逐字节相同的输出）
    pub fn render(&self, dataset: &SeedDataset) -> String {
        let mut script = String::new();

        script.push_str(SCRIPT_HEADER);
        script.push('\n');
        script.push_str("SET FOREIGN_KEY_CHECKS=0;\n");
        for table in TRUNCATE_ORDER {
            script.push_str(&format!("TRUNCATE TABLE {};\n", table));
        }
        script.push_str(COUNTRY_INSERT);
        script.push('\n');

        let statements = [
            self.cities(dataset),
            self.people(dataset),
            self.events(dataset),
            self.activities(dataset),
            self.activity_jury(dataset),
            self.teams(dataset),
            self.team_participants(dataset),
        ];
        for statement in statements.into_iter().flatten() {
            script.push_str(&statement);
        }

        script.push_str("SET FOREIGN_KEY_CHECKS=1;\n");
        script
    }

    fn cities(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .cities
            .iter()
            .map(|city| format!("{}, {}, {}", city.id, quote(&city.name), city.country_id))
            .collect();
        build_insert("cities", &["id", "name", "country_id"], &rows)
    }

    fn people(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .people
            .iter()
            .map(|person| {
                format!(
                    "{}, {}, {}, {}, {}, {}, {}, {}, {}",
                    person.id,
                    quote(&person.full_name),
                    quote(&person.email),
                    quote(person.role.as_str()),
                    date_or_null(person.birth_date),
                    int_or_null(person.city_id),
                    quote(&person.organization),
                    quote(&person.phone),
                    quote_opt(person.photo_path().as_deref()),
                )
            })
            .collect();
        build_insert(
            "conference_users",
            &[
                "id",
                "full_name",
                "email",
                "role",
                "birth_date",
                "city_id",
                "organization",
                "phone",
                "photo_path",
            ],
            &rows,
        )
    }

    fn events(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .events
            .iter()
            .map(|event| {
                format!(
                    "{}, {}, {}, {}, {}, {}, {}",
                    event.id,
                    quote(&event.title),
                    date_literal(event.start_date),
                    date_literal(event.end_date),
                    event.city_id,
                    quote(&event.venue),
                    quote(&event.image_path),
                )
            })
            .collect();
        build_insert(
            "events",
            &[
                "id",
                "title",
                "start_date",
                "end_date",
                "city_id",
                "venue",
                "image_path",
            ],
            &rows,
        )
    }

    fn activities(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .activities
            .iter()
            .map(|activity| {
                format!(
                    "{}, {}, {}, {}, {}, {}, {}",
                    activity.id,
                    activity.event_id,
                    quote(&activity.name),
                    timestamp_literal(activity.start),
                    timestamp_literal(activity.end),
                    int_or_null(activity.moderator_id),
                    quote_opt(activity.winner.as_deref()),
                )
            })
            .collect();
        build_insert(
            "activities",
            &[
                "id",
                "event_id",
                "name",
                "start_time",
                "end_time",
                "moderator_id",
                "winner_team",
            ],
            &rows,
        )
    }

    fn activity_jury(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .jury_links
            .iter()
            .map(|link| format!("{}, {}", link.activity_id, link.person_id))
            .collect();
        build_insert("activity_jury", &["activity_id", "user_id"], &rows)
    }

    fn teams(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .teams
            .iter()
            .map(|team| format!("{}, {}, {}", team.id, quote(&team.name), quote(&team.track)))
            .collect();
        build_insert("teams", &["id", "name", "track"], &rows)
    }

    fn team_participants(&self, dataset: &SeedDataset) -> Option<String> {
        let rows: Vec<String> = dataset
            .team_members
            .iter()
            .map(|link| format!("{}, {}", link.team_id, link.person_id))
            .collect();
        build_insert("team_participants", &["team_id", "user_id"], &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Activity, ActivityJuryLink, City, Event, Person, PersonRole, Team, TeamMemberLink,
    };
    use chrono::NaiveDate;

    fn dataset() -> SeedDataset {
        let start = NaiveDate::from_ymd_opt(2022, 10, 26).unwrap();
        let activity_start = start.and_hms_opt(10, 0, 0).unwrap();
        SeedDataset {
            cities: vec![City::new(34, "Казань")],
            people: vec![Person {
                id: 1,
                role: PersonRole::Participant,
                full_name: "Д'Артаньян Шарль".to_string(),
                email: "dartagnan@example.com".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 3, 4),
                city_id: Some(34),
                organization: "Pentest".to_string(),
                phone: "+7 900 000-00-00".to_string(),
                photo: Some("d.jpg".to_string()),
            }],
            events: vec![Event {
                id: 1,
                title: "Хакатон".to_string(),
                start_date: start,
                end_date: start,
                city_id: 34,
                venue: "Город 34".to_string(),
                image_path: "events/1.jpg".to_string(),
            }],
            activities: vec![Activity {
                id: 1,
                event_id: 1,
                name: "Открытие".to_string(),
                start: activity_start,
                end: Activity::end_for(activity_start).unwrap(),
                moderator_id: None,
                winner: None,
            }],
            jury_links: vec![ActivityJuryLink {
                activity_id: 1,
                person_id: 1,
            }],
            teams: vec![Team::for_track(1, "Pentest")],
            team_members: vec![TeamMemberLink {
                team_id: 1,
                person_id: 1,
            }],
        }
    }

    #[test]
    fn test_script_statement_order() {
        let script = SqlEmitter.render(&dataset());

        let position = |needle: &str| {
            script
                .find(needle)
                .unwrap_or_else(|| panic!("missing {}", needle))
        };
        let order = [
            "SET FOREIGN_KEY_CHECKS=0;",
            "TRUNCATE TABLE activity_jury;",
            "TRUNCATE TABLE countries;",
            "INSERT INTO countries",
            "INSERT INTO cities",
            "INSERT INTO conference_users",
            "INSERT INTO events",
            "INSERT INTO activities",
            "INSERT INTO activity_jury",
            "INSERT INTO teams",
            "INSERT INTO team_participants",
            "SET FOREIGN_KEY_CHECKS=1;",
        ];
        for pair in order.windows(2) {
            assert!(position(pair[0]) < position(pair[1]), "{:?}", pair);
        }
        assert!(script.starts_with(SCRIPT_HEADER));
        assert!(script.ends_with("SET FOREIGN_KEY_CHECKS=1;\n"));
    }

    #[test]
    fn test_row_rendering() {
        let script = SqlEmitter.render(&dataset());

        assert!(script.contains(
            "    (1, 'Д''Артаньян Шарль', 'dartagnan@example.com', 'PARTICIPANT', '1990-03-04', 34, 'Pentest', '+7 900 000-00-00', 'people/participant/d.jpg')"
        ));
        assert!(script.contains(
            "    (1, 'Хакатон', '2022-10-26', '2022-10-26', 34, 'Город 34', 'events/1.jpg')"
        ));
        assert!(script.contains(
            "    (1, 1, 'Открытие', '2022-10-26 10:00:00', '2022-10-26 12:00:00', NULL, NULL)"
        ));
        assert!(script.contains("INSERT INTO cities (id, name, country_id) VALUES\n    (34, 'Казань', 1);\n"));
        assert!(script.contains("    (1, 'Команда Pentest', 'Pentest')"));
    }

    #[test]
    fn test_empty_lists_omit_insert() {
        let mut data = dataset();
        data.jury_links.clear();
        data.teams.clear();
        data.team_members.clear();

        let script = SqlEmitter.render(&data);

        assert!(!script.contains("INSERT INTO activity_jury"));
        assert!(!script.contains("INSERT INTO teams"));
        assert!(!script.contains("INSERT INTO team_participants"));
        assert!(script.contains("TRUNCATE TABLE teams;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = dataset();
        assert_eq!(SqlEmitter.render(&data), SqlEmitter.render(&data));
    }
}
