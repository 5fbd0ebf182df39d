// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 在临时目录中生成一整套导出工作簿（rust_xlsxwriter）
// ==========================================

#![allow(dead_code)]

use cybershield_seed::SeedConfig;
use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 夹具单元格
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

/// 写出单工作表工作簿（空单元格不写入）
pub fn write_workbook(path: &Path, rows: &[Vec<Cell>]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(value) => {
                    sheet.write_string(r as u32, c as u16, *value)?;
                }
                Cell::Number(value) => {
                    sheet.write_number(r as u32, c as u16, *value)?;
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path)?;
    Ok(())
}

/// 标准议程表表头
pub fn activity_header() -> Vec<Cell<'static>> {
    [
        "Наименование мероприятия",
        "Активность",
        "День",
        "Время начала",
        "Модератор",
        "Жюри 1",
        "Жюри 2",
        "Жюри 3",
        "Жюри 4",
        "Жюри 5",
        "Победитель",
    ]
    .into_iter()
    .map(Text)
    .collect()
}

/// 生成完整会话目录
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - SeedConfig: 指向该目录的配置, 输出写到 out/seed_data.sql
pub fn create_session() -> Result<(TempDir, SeedConfig), Box<dyn Error>> {
    let temp = TempDir::new()?;
    let session_dir = temp.path().join("session-1");
    let config = SeedConfig {
        session_dir: session_dir.clone(),
        output_path: temp.path().join("out").join("seed_data.sql"),
        ..SeedConfig::default()
    };
    let sources = &config.sources;

    write_workbook(
        &session_dir.join(&sources.cities),
        &[
            vec![Number(34.0), Text("RU"), Text("Казань")],
            vec![Number(9.0), Text("RU"), Text(" Санкт-Петербург ")],
            vec![Blank, Text("RU"), Text("Без номера")],
        ],
    )?;

    write_workbook(
        &session_dir.join(&sources.organizers),
        &[
            vec![Text("ФИО"), Text("Почта"), Text("Дата рождения"), Text("Страна"), Text("Телефон"), Text("Фото")],
            vec![Text("Яковлев Олег"), Text("yakovlev@example.com"), Number(30000.0), Number(34.0), Text("+7 901 000-00-01"), Blank],
        ],
    )?;

    write_workbook(
        &session_dir.join(&sources.jury),
        &[
            vec![Text("ФИО"), Text("Пол"), Text("Почта"), Text("Дата рождения"), Text("Страна"), Text("Телефон"), Text("Направление"), Text("Фото")],
            vec![Text("Борисова Анна"), Text("ж"), Text("borisova@example.com"), Text("25.12.1988"), Number(9.0), Text("+7 902"), Text("Криптография"), Text("anna.jpg")],
            vec![Text("Кузнецов Максим"), Text("м"), Text("kuznetsov@example.com"), Blank, Blank, Text("+7 903"), Text("Форензика"), Blank],
        ],
    )?;

    write_workbook(
        &session_dir.join(&sources.moderators),
        &[
            vec![Text("ФИО"), Text("Пол"), Text("Почта"), Text("Дата рождения"), Text("Страна"), Text("Телефон"), Text("Направление"), Text("Мероприятие"), Text("Фото")],
            vec![Text("Васильев Пётр"), Text("м"), Text("vasiliev@example.com"), Blank, Number(50.0), Text("+7 904"), Text("Pentest"), Text("Встреча SPb Python Community"), Blank],
            // 与组织者同一邮箱: 只补齐照片
            vec![Text("Яковлев О."), Text("м"), Text("yakovlev@example.com"), Blank, Number(78.0), Text("+7 999"), Blank, Text("Другое"), Text("oleg.jpg")],
        ],
    )?;

    write_workbook(
        &session_dir.join(&sources.participants),
        &[
            vec![Text("ФИО"), Text("Почта"), Text("Дата рождения"), Text("Страна"), Text("Телефон"), Text("Направление"), Text("Фото")],
            vec![Text("Григорьев Глеб"), Text("grigoriev@example.com"), Blank, Blank, Text("+7 905"), Text("Pentest"), Blank],
            vec![Text("Алексеев Илья"), Text("alekseev@example.com"), Blank, Blank, Text("+7 906"), Text("Pentest"), Text("ilya.png")],
            vec![Text("Дмитриева Дарья"), Text("dmitrieva@example.com"), Blank, Blank, Text("+7 907"), Blank, Blank],
            vec![Text("Нет Почты"), Blank, Blank, Blank, Text("+7 908"), Text("Pentest"), Blank],
        ],
    )?;

    let title = |t: &'static str| {
        let mut row = vec![Text(t)];
        row.extend(std::iter::repeat(Blank).take(10));
        row
    };
    write_workbook(
        &session_dir.join(&sources.activities),
        &[
            activity_header(),
            title("Встреча SPb Python Community"),
            vec![Blank, Text("Открытие"), Number(1.0), Number(0.375), Text("Васильев Пётр"), Text("Борисова Анна"), Text("Кузнецов Максим"), Text("Неизвестный Судья"), Blank, Blank, Text("Команда Pentest")],
            vec![Blank, Text("Воркшоп"), Number(2.0), Number(0.5), Text("Нет Такого"), Text("Кузнецов Максим"), Blank, Blank, Blank, Blank, Blank],
            title("Мероприятие, которого нет"),
            vec![Blank, Text("Потерянная активность"), Number(1.0), Number(0.5), Blank, Blank, Blank, Blank, Blank, Blank, Blank],
        ],
    )?;

    Ok((temp, config))
}

/// 读取生成的脚本
pub fn read_script(path: &PathBuf) -> String {
    std::fs::read_to_string(path).expect("读取脚本失败")
}
