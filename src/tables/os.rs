//! 操作系统类别规则表

use crate::rule::FieldKey::{Name, Version};
use crate::rule::{Extractor, UaRule};

use super::mappings::WINDOWS_VERSION_MAP;

/// 构建操作系统规则表
pub(super) fn rules() -> Vec<UaRule> {
    vec![
        UaRule::new(
            &[
                // Windows based
                r"microsoft\s(windows)\s(vista|xp)", // Windows (iTunes)
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(windows)\snt\s6\.2;\s(arm)",                       // Windows RT
                r"(windows\sphone(?:\sos)*)[\s\/]?([\d\.\s]+\w)*",    // Windows Phone
                r"(windows\smobile|windows)[\s\/]?([ntce\d\.\s]+\w)",
            ],
            vec![Extractor::capture(Name), Extractor::remap(Version, WINDOWS_VERSION_MAP)],
        ),
        UaRule::new(
            &[
                r"(win(?=3|9|n)|win\s9x\s)([nt\d\.]+)", // Windows
            ],
            vec![Extractor::fixed(Name, "windows"), Extractor::remap(Version, WINDOWS_VERSION_MAP)],
        ),
        UaRule::new(
            &[
                // Mobile/Embedded OS
                r"\((bb)(10);", // BlackBerry 10
            ],
            vec![Extractor::fixed(Name, "blackberry"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(blackberry)\w*\/?([\w\.]+)*", // Blackberry
                r"(tizen)[\/\s]([\w\.]+)",       // Tizen
                r"(android|webos|palm\sos|qnx|bada|rim\stablet\sos|meego|contiki)[\/\s-]?([\w\.]+)*", // Android/WebOS/Palm/QNX/Bada/RIM/MeeGo/Contiki
                r"linux;.+(sailfish);",          // Sailfish OS
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(symbian\s?os|symbos|s60(?=;))[\/\s-]?([\w\.]+)*", // Symbian
            ],
            vec![Extractor::fixed(Name, "symbian"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"\((series40);", // Series 40
            ],
            vec![Extractor::capture(Name)],
        ),
        UaRule::new(
            &[
                r"mozilla.+\(mobile;.+gecko.+firefox", // Firefox OS
            ],
            vec![Extractor::fixed(Name, "firefox os"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                // Console
                r"(nintendo|playstation)\s([wids34portablevu]+)", // Nintendo/Playstation
                // GNU/Linux based
                r"(mint)[\/\s\(]?(\w+)*",       // Mint
                r"(mageia|vectorlinux)[;\s]",   // Mageia/VectorLinux
                // Joli/Ubuntu/Debian/SUSE/Gentoo/Arch/Slackware
                // Fedora/Mandriva/CentOS/PCLinuxOS/RedHat/Zenwalk/Linpus
                r"(joli|[kxln]?ubuntu|debian|[open]*suse|gentoo|(?=\s)arch|slackware|fedora|mandriva|centos|pclinuxos|redhat|zenwalk|linpus)[\/\s-]?(?!chrom)([\w\.-]+)*",
                r"(hurd|linux)\s?([\w\.]+)*",   // Hurd/Linux
                r"(gnu)\s?([\w\.]+)*",          // GNU
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(cros)\s[\w]+\s([\w\.]+\w)", // Chromium OS
            ],
            vec![Extractor::fixed(Name, "chromium os"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(sunos)\s?([\w\.]+\d)*", // Solaris
            ],
            vec![Extractor::fixed(Name, "solaris"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                // BSD based
                r"\s([frentopc-]{0,4}bsd|dragonfly)\s?([\w\.]+)*", // FreeBSD/NetBSD/OpenBSD/PC-BSD/DragonFly
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(haiku)\s(\w+)", // Haiku
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"cfnetwork\/.+darwin",
                r"ip[honead]+(?:.*os\s([\w]+)\slike\smac|;\sopera)", // iOS
            ],
            vec![Extractor::rewrite(Version, "_", "."), Extractor::fixed(Name, "ios")],
        ),
        UaRule::new(
            &[
                r"(mac\sos\sx)\s?([\w\s\.]+\w)*",
                r"(macintosh|mac(?=_powerpc)\s)", // Mac OS
            ],
            vec![Extractor::fixed(Name, "mac os"), Extractor::rewrite(Version, "_", ".")],
        ),
        UaRule::new(
            &[
                // Other
                r"((?:open)?solaris)[\/\s-]?([\w\.]+)*", // Solaris
                r"(aix)\s((\d)(?=\.|\)|\s)[\w\.]*)*",    // AIX
                r"(plan\s9|minix|beos|os\/2|amigaos|morphos|risc\sos|openvms)", // Plan9/Minix/BeOS/OS2/AmigaOS/MorphOS/RISCOS/OpenVMS
                r"(unix)\s?([\w\.]+)*", // UNIX
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
    ]
}
