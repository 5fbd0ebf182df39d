// ==========================================
// CyberShield 种子数据生成器 - 脚本写入
// ==========================================
// 原子写入: 先写同目录临时文件, 完成后重命名
// 失败时目标文件保持原状, 不会留下半截脚本
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

pub struct ScriptWriter;

impl ScriptWriter {
    pub fn write(&self, path: &Path, script: &str) -> ImportResult<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| output_error(path, e))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| output_error(path, e))?;
        temp.write_all(script.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| output_error(path, e))?;
        temp.persist(path).map_err(|e| output_error(path, e.error))?;

        info!(path = %path.display(), bytes = script.len(), "文件已写入");
        Ok(())
    }
}

fn output_error(path: &Path, err: std::io::Error) -> ImportError {
    ImportError::OutputWriteError(format!("{}: {}", path.display(), err))
}
