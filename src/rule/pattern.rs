//! 单条已编译规则模式
//! 规则模式统一忽略大小写编译；编译失败降级处理（告警后剔除，不panic）

use fancy_regex::{Regex, RegexBuilder};

use crate::error::UaResult;

/// 回溯步数上限，约束恶意UA触发的灾难性回溯
const BACKTRACK_LIMIT: usize = 1_000_000;

/// 单条已编译的规则模式（进程级只读）
#[derive(Debug)]
pub struct CompiledPattern {
    /// 原始模式文本（日志/校验用）
    source: &'static str,
    /// 编译后的正则（忽略大小写）
    regex: Regex,
}

impl CompiledPattern {
    /// 编译单条模式（显式错误版，供规则库校验使用）
    pub fn try_new(source: &'static str) -> UaResult<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .backtrack_limit(BACKTRACK_LIMIT)
            .build()?;
        Ok(Self { source, regex })
    }

    /// 编译单条模式（降级版，建表路径使用）
    /// 编译失败返回None并记录告警，失败的模式不参与任何匹配
    pub fn new(source: &'static str) -> Option<Self> {
        match Self::try_new(source) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!("Pattern compilation failed: pattern={} error={}", source, e);
                None
            }
        }
    }

    /// 原始模式文本
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// 对输入执行首次匹配，按位置返回各捕获组文本
    /// 1. 仅取首个匹配，未参与的组为None
    /// 2. 运行时错误（回溯超限等）一律视为未匹配
    pub fn first_captures<'a>(&self, input: &'a str) -> Option<Vec<Option<&'a str>>> {
        let caps = self.regex.captures(input).ok().flatten()?;
        Some((1..caps.len()).map(|i| caps.get(i).map(|m| m.as_str())).collect())
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_case_insensitive() {
        // 测试场景：模式统一忽略大小写编译
        let pattern = CompiledPattern::new(r"(chrome)\/([\w\.]+)").unwrap();
        let groups = pattern.first_captures("Chrome/104.0.0.0 Safari/537.36").unwrap();
        assert_eq!(groups, vec![Some("Chrome"), Some("104.0.0.0")]);
    }

    #[test]
    fn test_invalid_pattern_dropped() {
        // 测试场景：非法模式编译失败，返回None而非panic
        assert!(CompiledPattern::new(r"(unclosed").is_none());
        assert!(CompiledPattern::try_new(r"(unclosed").is_err());
    }

    #[test]
    fn test_lookahead_and_backreference() {
        // 测试场景：内置表依赖的环视与反向引用语法
        let lookahead = CompiledPattern::new(r"arm(?=v\d+;)").unwrap();
        assert!(lookahead.first_captures("armv7l;").is_some());
        assert!(lookahead.first_captures("arm;").is_none());

        let backref = CompiledPattern::new(r"(\w+)\s+build\/hm\1").unwrap();
        let groups = backref.first_captures("android 4.2; 1s build/hm1s").unwrap();
        assert_eq!(groups, vec![Some("1s")]);
    }

    #[test]
    fn test_unmatched_optional_group_is_none() {
        // 测试场景：可选组未参与匹配时按缺失处理
        let pattern = CompiledPattern::new(r"(nginx)(?:\/([\d\.]+))?").unwrap();
        let groups = pattern.first_captures("nginx").unwrap();
        assert_eq!(groups, vec![Some("nginx"), None]);
    }

    #[test]
    fn test_first_match_only() {
        // 测试场景：仅提取首个匹配的捕获组，后续匹配不参与
        let pattern = CompiledPattern::new(r"(\w+)\/([\d\.]+)").unwrap();
        let groups = pattern.first_captures("Silk/3.68 Chrome/39.0").unwrap();
        assert_eq!(groups, vec![Some("Silk"), Some("3.68")]);
    }
}
