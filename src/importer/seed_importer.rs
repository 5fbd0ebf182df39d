// ==========================================
// CyberShield 种子数据生成器 - 导入流程编排
// ==========================================
// 流程: 城市 → 人员 → 活动 → 交叉索引 → 议程 → 团队 → 城市补齐 → SQL → 落盘
// 单线程一次性执行: 任一阶段出错即中止, 不写出任何脚本
// ==========================================

use crate::config::SeedConfig;
use crate::domain::SeedDataset;
use crate::importer::activity_loader::ActivityLoader;
use crate::importer::city_loader::{resolve_referenced_cities, CityLoader};
use crate::importer::error::ImportResult;
use crate::importer::event_loader::EventLoader;
use crate::importer::file_parser::XlsxSheetReader;
use crate::importer::people_loader::PeopleLoader;
use crate::importer::report::{EntityCounts, ImportReport, ReferenceKind};
use crate::importer::resolver::CrossReferenceIndex;
use crate::importer::sheet_reader_trait::SheetReader;
use crate::importer::team_builder::TeamSynthesizer;
use crate::sql::{ScriptWriter, SqlEmitter};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// 构建结果: 数据集 + 诊断报告
#[derive(Debug, Clone)]
pub struct SeedBuild {
    pub dataset: SeedDataset,
    pub report: ImportReport,
}

// ==========================================
// SeedImporter - 导入流程编排器
// ==========================================
pub struct SeedImporter {
    reader: Box<dyn SheetReader>,
}

impl SeedImporter {
    /// 创建新的 SeedImporter 实例
    ///
    /// # 参数
    /// - reader: 工作簿读取器
    pub fn new(reader: Box<dyn SheetReader>) -> Self {
        Self { reader }
    }

    /// 使用 calamine 读取真实 .xlsx 文件
    pub fn with_xlsx() -> Self {
        Self::new(Box::new(XlsxSheetReader))
    }

    /// 读取全部来源并构建内存数据集
    #[instrument(skip(self, config), fields(session_dir = %config.session_dir.display()))]
    pub fn build(&self, config: &SeedConfig) -> ImportResult<SeedBuild> {
        let reader = self.reader.as_ref();
        let mut report = ImportReport::default();

        // === 步骤 1: 城市 ===
        debug!("步骤 1: 城市表");
        let catalog = CityLoader::new(reader).load(&config.cities_path())?;

        // === 步骤 2: 人员 ===
        debug!("步骤 2: 人员表");
        let people = PeopleLoader::new(reader).load(&config.people_sources())?;

        // === 步骤 3: 活动 ===
        debug!("步骤 3: 活动种子表");
        let events = EventLoader.load(&config.event_source())?;

        // === 步骤 4: 议程（依赖交叉索引）===
        debug!("步骤 4: 议程表");
        let loaded = {
            let index = CrossReferenceIndex::build(&events, &people);
            ActivityLoader::new(reader, &index).load(&config.activities_path(), &mut report)?
        };

        // === 步骤 5: 团队 ===
        debug!("步骤 5: 团队合成");
        let teams = TeamSynthesizer.build(&people);

        // === 步骤 6: 城市补齐 ===
        let referenced = events
            .iter()
            .map(|event| event.city_id)
            .chain(people.iter().filter_map(|person| person.city_id));
        let cities = resolve_referenced_cities(&catalog, referenced);

        let dataset = SeedDataset {
            cities,
            people,
            events,
            activities: loaded.activities,
            jury_links: loaded.jury_links,
            teams: teams.teams,
            team_members: teams.members,
        };
        report.counts = EntityCounts::from_dataset(&dataset);

        Ok(SeedBuild { dataset, report })
    }

    /// 完整运行: 构建 → 生成 SQL → 原子写出报告（可选）与脚本
    pub fn run(&self, config: &SeedConfig) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        info!(output = %config.output_path.display(), "开始生成种子脚本");

        let SeedBuild { dataset, report } = self.build(config)?;
        let script = SqlEmitter.render(&dataset);

        // 报告先于脚本落盘: 任一写入失败时不会留下新脚本
        if let Some(report_path) = &config.report_path {
            ScriptWriter.write(report_path, &report.to_json()?)?;
            info!(path = %report_path.display(), "导入报告已写入");
        }
        ScriptWriter.write(&config.output_path, &script)?;

        if !report.unresolved.is_empty() {
            warn!(
                events = report.unresolved_count(ReferenceKind::Event),
                moderators = report.unresolved_count(ReferenceKind::Moderator),
                jury = report.unresolved_count(ReferenceKind::Jury),
                "存在未匹配的文本引用, 对应关联已省略"
            );
        }

        info!(
            cities = report.counts.cities,
            people = dataset.people.len(),
            events = report.counts.events,
            activities = report.counts.activities,
            teams = report.counts.teams,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "种子脚本生成完成"
        );
        Ok(report)
    }
}
