//! rsuaparser - UA字符串结构化解析引擎
//! 基于有序规则表的首个命中匹配与字段提取，输出浏览器/引擎/系统/CPU/设备五类结果

// 导出全局错误类型
pub use self::error::{UaParserError, UaResult};

// 导出规则模型核心接口
pub use self::rule::{CompiledPattern, Extractor, FieldKey, FieldMap, RemapDict, UaRule};

// 导出匹配引擎
pub use self::matcher::match_first;

// 导出静态规则库
pub use self::tables::RuleLibrary;

// 导出类别结果结构
pub use self::result::{Browser, Cpu, Device, Engine, Os, UaInfo};

// 导出解析器门面
pub use self::detector::UaParser;

// 声明所有子模块
pub mod detector;
pub mod error;
pub mod matcher;
pub mod result;
pub mod rule;
pub mod tables;
