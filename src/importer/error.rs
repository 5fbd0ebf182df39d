// ==========================================
// CyberShield 种子数据生成器 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 提取错误 / 解析错误 / 配置错误 (全部致命, 中止本次运行)
// 说明: 引用未命中与畸形行不属于错误, 在加载器内静默跳过
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 提取错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("工作表缺失: {0}")]
    SheetMissing(String),

    #[error("表头缺失 ({file}): 找不到列 {column}")]
    ColumnMissing { file: String, column: String },

    #[error("种子表解析失败: {0}")]
    SeedParseError(String),

    // ===== 解析错误 =====
    #[error("日期格式错误: 无法解析 {value:?}")]
    DateFormatError { value: String },

    #[error("未知月份 {month:?} (原值 {value:?})")]
    UnknownMonth { month: String, value: String },

    #[error("类型转换失败 (字段 {field}): {message}")]
    TypeConversionError { field: String, message: String },

    // ===== 配置错误 =====
    #[error("配置读取失败 ({path}): {message}")]
    ConfigReadError { path: String, message: String },

    // ===== 输出错误 =====
    #[error("脚本写入失败: {0}")]
    OutputWriteError(String),

    #[error("序列化失败: {0}")]
    SerializationError(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::SeedParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::SerializationError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
