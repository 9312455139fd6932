//! 静态规则表
//! 五张类别表 + 四份重映射字典，进程启动时一次性构建，此后只读共享
//! 表内容与上游规则数据逐条兼容（含个别存疑条目，见各表行内注释）

pub mod browser;
pub mod cpu;
pub mod device;
pub mod engine;
pub mod mappings;
pub mod os;

use once_cell::sync::Lazy;

use crate::error::{UaParserError, UaResult};
use crate::rule::UaRule;

/// 规则库：五张类别表的只读集合
/// 默认实例为进程级单例；可自行构建并注入解析器，用于替换内置表（测试用途）
#[derive(Debug)]
pub struct RuleLibrary {
    pub browsers: Vec<UaRule>,
    pub cpu: Vec<UaRule>,
    pub devices: Vec<UaRule>,
    pub engines: Vec<UaRule>,
    pub os: Vec<UaRule>,
}

/// 内置规则库（进程级单例，首次访问时构建）
static SHIPPED_LIBRARY: Lazy<RuleLibrary> = Lazy::new(|| RuleLibrary {
    browsers: browser::rules(),
    cpu: cpu::rules(),
    devices: device::rules(),
    engines: engine::rules(),
    os: os::rules(),
});

impl RuleLibrary {
    /// 获取内置规则库
    pub fn shipped() -> &'static RuleLibrary {
        &SHIPPED_LIBRARY
    }

    /// 各类别表的只读视图（表名 → 规则表），按类别名排序
    pub fn tables(&self) -> [(&'static str, &[UaRule]); 5] {
        [
            ("browser", self.browsers.as_slice()),
            ("cpu", self.cpu.as_slice()),
            ("device", self.devices.as_slice()),
            ("engine", self.engines.as_slice()),
            ("os", self.os.as_slice()),
        ]
    }

    /// 校验规则库一致性：
    /// 1. 每条规则必须带候选模式与提取指令
    /// 2. 所有模式原文均编译成功（建表期被剔除的非法模式在此显形）
    pub fn validate(&self) -> UaResult<()> {
        for (name, table) in self.tables() {
            for (idx, rule) in table.iter().enumerate() {
                if rule.pattern_sources().is_empty() {
                    return Err(UaParserError::InvalidRule(format!(
                        "{}表第{}条规则无候选模式",
                        name, idx
                    )));
                }
                if rule.extractors().is_empty() {
                    return Err(UaParserError::InvalidRule(format!(
                        "{}表第{}条规则无提取指令",
                        name, idx
                    )));
                }
                if rule.patterns().len() != rule.pattern_sources().len() {
                    return Err(UaParserError::InvalidRule(format!(
                        "{}表第{}条规则存在编译失败的模式",
                        name, idx
                    )));
                }
            }
        }
        Ok(())
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_library_validates() {
        // 测试场景：内置表全部模式可编译、无空规则
        RuleLibrary::shipped().validate().expect("shipped tables must validate");
    }

    #[test]
    fn test_shipped_table_sizes() {
        // 测试场景：内置表规模与上游规则数据逐条对应
        let lib = RuleLibrary::shipped();
        assert_eq!(lib.browsers.len(), 31);
        assert_eq!(lib.cpu.len(), 7);
        assert_eq!(lib.devices.len(), 74);
        assert_eq!(lib.engines.len(), 3);
        assert_eq!(lib.os.len(), 16);
    }

    #[test]
    fn test_remap_rules_reference_shared_dictionaries() {
        // 测试场景：四份字典均为非空有序映射
        for dict in [
            mappings::OLD_SAFARI_VERSION_MAP,
            mappings::AMAZON_DEVICE_MAP,
            mappings::SPRINT_VENDOR_MAP,
            mappings::SPRINT_MODEL_MAP,
            mappings::WINDOWS_VERSION_MAP,
        ] {
            assert!(!dict.is_empty());
            assert!(dict.iter().all(|(_, candidates)| !candidates.is_empty()));
        }
    }
}
