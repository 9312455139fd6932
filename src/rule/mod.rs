//! 规则数据模型
//! 一条规则 = 一组等价候选模式 + 一份共享的提取指令列表
//! 同规则内多条模式互为替代：首个命中的模式独占提取，其余不再求值

pub mod extractor;
pub mod pattern;

pub use extractor::{Extractor, FieldKey, FieldMap, RemapDict};
pub use pattern::CompiledPattern;

/// 单条分类规则
/// 进程启动时从静态表一次性构建，此后只读，跨解析调用共享
#[derive(Debug)]
pub struct UaRule {
    /// 模式原文（有序，校验用）
    sources: &'static [&'static str],
    /// 已编译候选模式（有序；非法模式在建表时剔除并告警）
    patterns: Vec<CompiledPattern>,
    /// 提取指令（有序，第i条绑定第i+1号捕获组）
    extractors: Vec<Extractor>,
}

impl UaRule {
    /// 从模式原文构建规则
    pub fn new(patterns: &'static [&'static str], extractors: Vec<Extractor>) -> Self {
        Self {
            sources: patterns,
            patterns: patterns.iter().copied().filter_map(CompiledPattern::new).collect(),
            extractors,
        }
    }

    /// 模式原文列表
    pub fn pattern_sources(&self) -> &'static [&'static str] {
        self.sources
    }

    /// 已编译的候选模式
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// 提取指令列表
    pub fn extractors(&self) -> &[Extractor] {
        &self.extractors
    }

    /// 按序尝试候选模式，对首个命中者执行全部提取指令
    /// 返回None表示本规则所有模式均未命中
    pub fn apply(&self, input: &str) -> Option<FieldMap> {
        for pattern in &self.patterns {
            let Some(groups) = pattern.first_captures(input) else { continue };
            let mut fields = FieldMap::default();
            for (idx, extractor) in self.extractors.iter().enumerate() {
                // 位置越界的指令绑定到缺失捕获，不报错
                let captured = groups.get(idx).copied().flatten();
                extractor.apply(captured, &mut fields);
            }
            return Some(fields);
        }
        None
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::FieldKey::{Name, Version};
    use super::*;

    #[test]
    fn test_first_matching_alternative_wins() {
        // 测试场景：同规则内多条模式按序尝试，首个命中者独占提取
        let rule = UaRule::new(
            &[r"(alpha)\/([\d\.]+)", r"(beta)\/([\d\.]+)"],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        );
        let fields = rule.apply("Beta/2.0 Alpha/1.0").unwrap();
        // 第一条模式优先，即便第二条在输入中出现更早
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Alpha"));
        assert_eq!(fields.get(&Version).map(String::as_str), Some("1.0"));
    }

    #[test]
    fn test_alternatives_share_extractor_list() {
        // 测试场景：后备模式命中时复用同一份提取指令
        let rule = UaRule::new(
            &[r"(alpha)\/([\d\.]+)", r"(beta)\/([\d\.]+)"],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        );
        let fields = rule.apply("Beta/2.0").unwrap();
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Beta"));
        assert_eq!(fields.get(&Version).map(String::as_str), Some("2.0"));
    }

    #[test]
    fn test_extractors_beyond_group_count_resolve_absent() {
        // 测试场景：提取指令多于捕获组时，越界指令一律按缺失处理
        let rule = UaRule::new(
            &[r"(alpha)"],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        );
        let fields = rule.apply("alpha").unwrap();
        assert_eq!(fields.get(&Name).map(String::as_str), Some("alpha"));
        assert!(!fields.contains_key(&Version));
    }

    #[test]
    fn test_invalid_pattern_excluded_from_matching() {
        // 测试场景：非法模式建表时剔除，规则退化为其余可用模式
        let rule = UaRule::new(
            &[r"(unclosed", r"(beta)\/([\d\.]+)"],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        );
        assert_eq!(rule.patterns().len(), 1);
        assert_eq!(rule.pattern_sources().len(), 2);
        let fields = rule.apply("Beta/2.0").unwrap();
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Beta"));
    }

    #[test]
    fn test_no_alternative_matches() {
        // 测试场景：所有候选模式未命中返回None
        let rule = UaRule::new(&[r"(alpha)"], vec![Extractor::capture(Name)]);
        assert!(rule.apply("gamma").is_none());
    }
}
