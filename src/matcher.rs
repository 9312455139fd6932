//! 类别表匹配引擎
//! 对单一类别的有序规则表执行"首个命中"语义：
//! 表内规则互斥，先到先得，命中规则的提取结果即该类别的字段集

use crate::rule::{FieldMap, UaRule};

/// 在有序规则表上匹配输入，返回首个有效命中的字段集
/// 1. 规则按表序逐条尝试，首个命中者胜出，后续规则不再求值
/// 2. 命中但未提取出任何字段的规则视为未命中，继续扫描（兜底路径，
///    内置表中带定值提取的规则命中后不会走到这里）
/// 3. 全表未命中返回None
pub fn match_first(input: &str, table: &[UaRule]) -> Option<FieldMap> {
    for rule in table {
        if let Some(fields) = rule.apply(input) {
            if !fields.is_empty() {
                return Some(fields);
            }
            log::debug!("Rule matched without extracting fields, continue scanning");
        }
    }
    None
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Extractor;
    use crate::rule::FieldKey::{Name, Version};

    #[test]
    fn test_first_match_precedence() {
        // 测试场景：两条规则同时可命中，结果等于首条规则单独匹配的结果
        let table = vec![
            UaRule::new(&[r"(alpha)\/([\d\.]+)"], vec![
                Extractor::capture(Name),
                Extractor::capture(Version),
            ]),
            UaRule::new(&[r"(alpha)"], vec![Extractor::fixed(Name, "shadowed")]),
        ];
        let fields = match_first("Alpha/3.1", &table).unwrap();
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Alpha"));
        assert_eq!(fields.get(&Version).map(String::as_str), Some("3.1"));
    }

    #[test]
    fn test_empty_field_map_continues_scanning() {
        // 测试场景：命中但零提取的规则不终止扫描，后续规则仍可胜出
        let table = vec![
            // 无捕获组 + 直取指令 => 命中也提取不出字段
            UaRule::new(&[r"alpha"], vec![Extractor::capture(Name)]),
            UaRule::new(&[r"beta"], vec![Extractor::fixed(Name, "fallback")]),
        ];
        let fields = match_first("alpha beta", &table).unwrap();
        assert_eq!(fields.get(&Name).map(String::as_str), Some("fallback"));
    }

    #[test]
    fn test_no_rule_matches() {
        // 测试场景：全表未命中返回None
        let table = vec![UaRule::new(&[r"(alpha)"], vec![Extractor::capture(Name)])];
        assert!(match_first("gamma delta", &table).is_none());
    }

    #[test]
    fn test_empty_table() {
        // 测试场景：空表直接返回None
        assert!(match_first("anything", &[]).is_none());
    }
}
