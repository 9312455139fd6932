//! CPU架构类别规则表

use crate::rule::FieldKey::Arch;
use crate::rule::{Extractor, UaRule};

/// 构建CPU架构规则表
pub(super) fn rules() -> Vec<UaRule> {
    vec![
        UaRule::new(
            &[
                r"(?:(amd|x(?:(?:86|64)[_-])?|wow|win)64)[;\)]", // AMD64
            ],
            vec![Extractor::fixed(Arch, "amd64")],
        ),
        UaRule::new(
            &[
                r"(ia32(?=;))", // IA32 (quicktime)
            ],
            vec![Extractor::capture(Arch)],
        ),
        UaRule::new(
            &[
                r"((?:i[346]|x)86)[;\)]", // IA32
            ],
            vec![Extractor::fixed(Arch, "ia32")],
        ),
        UaRule::new(
            &[
                r"windows\s(ce|mobile);\sppc;", // PocketPC mistakenly identified as PowerPC
            ],
            vec![Extractor::fixed(Arch, "arm")],
        ),
        UaRule::new(
            &[
                r"((?:ppc|powerpc)(?:64)?)(?:\smac|;|\))", // PowerPC
            ],
            vec![Extractor::rewrite(Arch, "ower", "")],
        ),
        UaRule::new(
            &[
                r"(sun4\w)[;\)]", // SPARC
            ],
            vec![Extractor::fixed(Arch, "sparc")],
        ),
        UaRule::new(
            &[
                r"((?:avr32|ia64(?=;))|68k(?=\))|arm(?:64|(?=v\d+;))|(?=atmel\s)avr|(?:irix|mips|sparc)(?:64)?(?=;)|pa-risc)", // IA64, 68K, ARM/64, AVR/32, IRIX/64, MIPS/64, SPARC/64, PA-RISC
            ],
            vec![Extractor::capture(Arch)],
        ),
    ]
}
