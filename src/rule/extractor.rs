//! 字段提取DSL
//! 四种提取行为：直取、定值、二次改写、字典重映射
//! 每条提取指令按位置绑定到命中模式的一个捕获组（第i条指令 ↔ 第i+1号组）

use regex::RegexBuilder;
use rustc_hash::FxHashMap;

/// 语义字段键
/// 跨类别复用，含义随类别变化（如name/version在浏览器表指浏览器名与版本，
/// 在操作系统表指系统名与版本）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Model,
    Name,
    Vendor,
    Type,
    Version,
    Arch,
}

/// 重映射字典：规范值 → 判定子串列表
/// 纯映射数据，有序，字典序即优先级（先命中先得）
pub type RemapDict = [(&'static str, &'static [&'static str])];

/// 单类别字段结果集（每次解析新建，不共享、构建后不修改）
pub type FieldMap = FxHashMap<FieldKey, String>;

/// 字段提取指令
#[derive(Debug)]
pub enum Extractor {
    /// 直取：捕获组去首尾空白后非空则赋给key
    Capture(FieldKey),
    /// 定值：忽略捕获组，直接赋固定值（模式命中本身即隐含该值）
    Fixed(FieldKey, &'static str),
    /// 改写：对捕获组应用二次查找/替换，再小写、去空白后赋值
    Rewrite {
        key: FieldKey,
        /// 二次查找模式原文（日志用）
        find: &'static str,
        /// 建表时一次性编译；None表示模式非法，应用时静默保留原文
        compiled: Option<regex::Regex>,
        /// 替换模板，支持$1式组引用（引用二次模式自身的捕获组）
        replace: &'static str,
    },
    /// 重映射：大写后在字典中按序做包含判定，未命中且捕获非空则回退原文
    Remap(FieldKey, &'static RemapDict),
}

impl Extractor {
    pub fn capture(key: FieldKey) -> Self {
        Extractor::Capture(key)
    }

    pub fn fixed(key: FieldKey, value: &'static str) -> Self {
        Extractor::Fixed(key, value)
    }

    /// 构造改写指令，二次模式在建表时一次性编译（忽略大小写）
    pub fn rewrite(key: FieldKey, find: &'static str, replace: &'static str) -> Self {
        let compiled = RegexBuilder::new(find)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                log::warn!("Rewrite pattern compilation failed: pattern={} error={}", find, e);
            })
            .ok();
        Extractor::Rewrite { key, find, compiled, replace }
    }

    pub fn remap(key: FieldKey, dict: &'static RemapDict) -> Self {
        Extractor::Remap(key, dict)
    }

    /// 对位置绑定的捕获组执行本指令，结果写入fields
    /// 捕获缺失（位置越界/组未参与）用None表示，不视为错误
    pub fn apply(&self, captured: Option<&str>, fields: &mut FieldMap) {
        match self {
            Extractor::Capture(key) => {
                let Some(text) = captured else { return };
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    fields.insert(*key, trimmed.to_string());
                }
            }
            Extractor::Fixed(key, value) => {
                fields.insert(*key, (*value).to_string());
            }
            Extractor::Rewrite { key, find, compiled, replace } => {
                let Some(text) = captured else { return };
                match compiled {
                    Some(re) => {
                        let rewritten = re.replace_all(text, *replace).to_lowercase();
                        let rewritten = rewritten.trim();
                        if !rewritten.is_empty() {
                            fields.insert(*key, rewritten.to_string());
                        }
                    }
                    // 二次模式非法：静默保留原文（不小写、不去空白）
                    None => {
                        log::debug!("Malformed rewrite pattern, keeping raw capture: pattern={}", find);
                        if !text.is_empty() {
                            fields.insert(*key, text.to_string());
                        }
                    }
                }
            }
            Extractor::Remap(key, dict) => {
                let Some(text) = captured else { return };
                // 1. 大写后做包含判定，字典自身大小写不限
                let upper = text.to_uppercase();
                for (canonical, candidates) in dict.iter() {
                    if candidates.iter().any(|cand| upper.contains(&cand.to_uppercase())) {
                        fields.insert(*key, canonical.trim().to_string());
                        return;
                    }
                }
                // 2. 字典未命中但捕获非空：回退为原始捕获文本
                if !text.is_empty() {
                    fields.insert(*key, text.to_string());
                }
            }
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::FieldKey::{Model, Name, Version};
    use super::*;

    static WINDOWS_LIKE_DICT: &RemapDict = &[
        ("7", &["NT 6.1"]),
        ("8", &["NT 6.2"]),
        ("RT", &["ARM"]),
    ];

    static ORDERED_DICT: &RemapDict = &[
        ("first", &["XX"]),
        ("second", &["XX", "YY"]),
    ];

    #[test]
    fn test_capture_trims_whitespace() {
        // 测试场景：直取提取去首尾空白后赋值
        let mut fields = FieldMap::default();
        Extractor::capture(Name).apply(Some("  Safari  "), &mut fields);
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Safari"));
    }

    #[test]
    fn test_capture_whitespace_only_is_absent() {
        // 测试场景：纯空白捕获视为缺失，不赋值
        let mut fields = FieldMap::default();
        Extractor::capture(Name).apply(Some("   "), &mut fields);
        Extractor::capture(Version).apply(None, &mut fields);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fixed_ignores_capture() {
        // 测试场景：定值提取无视捕获内容，包括缺失捕获
        let mut fields = FieldMap::default();
        Extractor::fixed(Name, "Opera Mini").apply(None, &mut fields);
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Opera Mini"));
    }

    #[test]
    fn test_rewrite_replaces_and_lowercases() {
        // 测试场景：二次替换后统一小写
        let mut fields = FieldMap::default();
        Extractor::rewrite(Name, "_", " ").apply(Some("Comodo_Dragon"), &mut fields);
        assert_eq!(fields.get(&Name).map(String::as_str), Some("comodo dragon"));
    }

    #[test]
    fn test_rewrite_group_reference_template() {
        // 测试场景：替换模板引用二次模式自身的捕获组
        let mut fields = FieldMap::default();
        Extractor::rewrite(Version, r"^(\d+)_(\d+).*$", "$1.$2").apply(Some("5_1_1"), &mut fields);
        assert_eq!(fields.get(&Version).map(String::as_str), Some("5.1"));
    }

    #[test]
    fn test_rewrite_malformed_pattern_keeps_original() {
        // 测试场景：二次模式非法时静默保留原文，连小写都不做
        let mut fields = FieldMap::default();
        Extractor::rewrite(Name, "(unclosed", " ").apply(Some("Comodo_Dragon"), &mut fields);
        assert_eq!(fields.get(&Name).map(String::as_str), Some("Comodo_Dragon"));
    }

    #[test]
    fn test_rewrite_absent_capture_is_noop() {
        // 测试场景：捕获缺失时改写指令整体跳过
        let mut fields = FieldMap::default();
        Extractor::rewrite(Version, "_", ".").apply(None, &mut fields);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_remap_uppercases_before_containment() {
        // 测试场景：重映射统一大写后做包含判定
        let mut fields = FieldMap::default();
        Extractor::remap(Version, WINDOWS_LIKE_DICT).apply(Some("nt 6.1; wow64"), &mut fields);
        assert_eq!(fields.get(&Version).map(String::as_str), Some("7"));
    }

    #[test]
    fn test_remap_insertion_order_breaks_ties() {
        // 测试场景：多个规范值均可命中时，字典序靠前者胜出
        let mut fields = FieldMap::default();
        Extractor::remap(Model, ORDERED_DICT).apply(Some("xx"), &mut fields);
        assert_eq!(fields.get(&Model).map(String::as_str), Some("first"));
    }

    #[test]
    fn test_remap_fallback_to_raw_text() {
        // 测试场景：字典未命中且捕获非空，回退为原始捕获文本
        let mut fields = FieldMap::default();
        Extractor::remap(Version, WINDOWS_LIKE_DICT).apply(Some("8.0"), &mut fields);
        assert_eq!(fields.get(&Version).map(String::as_str), Some("8.0"));
    }

    #[test]
    fn test_remap_empty_capture_leaves_unassigned() {
        // 测试场景：空捕获既不参与判定也不触发回退
        let mut fields = FieldMap::default();
        Extractor::remap(Model, WINDOWS_LIKE_DICT).apply(Some(""), &mut fields);
        Extractor::remap(Model, WINDOWS_LIKE_DICT).apply(None, &mut fields);
        assert!(fields.is_empty());
    }
}
