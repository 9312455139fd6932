//! 渲染引擎类别规则表

use crate::rule::FieldKey::{Name, Version};
use crate::rule::{Extractor, UaRule};

/// 构建渲染引擎规则表
pub(super) fn rules() -> Vec<UaRule> {
    vec![
        UaRule::new(
            &[
                r"windows.+\sedge\/([\w\.]+)", // EdgeHTML
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "EdgeHTML")],
        ),
        UaRule::new(
            &[
                r"(presto)\/([\w\.]+)", // Presto
                r"(webkit|trident|netfront|netsurf|amaya|lynx|w3m)\/([\w\.]+)", // WebKit/Trident/NetFront/NetSurf/Amaya/Lynx/w3m
                r"(khtml|tasman|links)[\/\s]\(?([\w\.]+)", // KHTML/Tasman/Links
                r"(icab)[\/\s]([23]\.[\d\.]+)", // iCab
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"rv\:([\w\.]+).*(gecko)", // Gecko
            ],
            vec![Extractor::capture(Version), Extractor::capture(Name)],
        ),
    ]
}
