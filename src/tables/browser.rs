//! 浏览器类别规则表
//! 规则按优先级排列，先命中先得；模式原文与上游规则数据逐条对应

use crate::rule::FieldKey::{Name, Version};
use crate::rule::{Extractor, UaRule};

use super::mappings::OLD_SAFARI_VERSION_MAP;

/// 构建浏览器规则表
pub(super) fn rules() -> Vec<UaRule> {
    vec![
        UaRule::new(
            &[
                r"(opera\smini)\/([\w\.-]+)",                  // Opera Mini
                r"(opera\s[mobiletab]+).+version\/([\w\.-]+)", // Opera Mobi/Tablet
                r"(opera).+version\/([\w\.]+)",                // Opera > 9.80
                r"(opera)[\/\s]+([\w\.]+)",                    // Opera < 9.80
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(opios)[\/\s]+([\w\.]+)", // Opera mini on iphone >= 8.0
            ],
            vec![Extractor::fixed(Name, "Opera Mini"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"\s(opr)\/([\w\.]+)", // Opera Webkit
            ],
            vec![Extractor::fixed(Name, "Opera"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                // Mixed
                r"(kindle)\/([\w\.]+)",                                  // Kindle
                r"(lunascape|maxthon|netfront|jasmine|blazer)[\/\s]?([\w\.]+)*", // Lunascape/Maxthon/Netfront/Jasmine/Blazer
                // Trident based
                r"(avant\s|iemobile|slim|baidu)(?:browser)?[\/\s]?([\w\.]*)", // Avant/IEMobile/SlimBrowser/Baidu
                r"(?:ms|\()(ie)\s([\w\.]+)",                             // Internet Explorer
                // Webkit/KHTML based
                r"(rekonq)\/([\w\.]+)*",                                 // Rekonq
                r"(chromium|flock|rockmelt|midori|epiphany|silk|skyfire|ovibrowser|bolt|iron|vivaldi|iridium|phantomjs|bowser)\/([\w\.-]+)", // Chromium/Flock/RockMelt/Midori/Epiphany/Silk/Skyfire/Bolt/Iron/Iridium/PhantomJS/Bowser
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(trident).+rv[:\s]([\w\.]+).+like\sgecko", // IE11
            ],
            vec![Extractor::fixed(Name, "IE"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(edge)\/((\d+)?[\w\.]+)", // Microsoft Edge
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(yabrowser)\/([\w\.]+)", // Yandex
            ],
            vec![Extractor::fixed(Name, "Yandex"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(puffin)\/([\w\.]+)", // Puffin
            ],
            vec![Extractor::fixed(Name, "Puffin"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"((?:[\s\/])uc?\s?browser|(?:juc.+)ucweb)[\/\s]?([\w\.]+)", // UCBrowser
            ],
            vec![Extractor::fixed(Name, "UCBrowser"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(comodo_dragon)\/([\w\.]+)", // Comodo Dragon
            ],
            vec![Extractor::rewrite(Name, "_", " "), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(micromessenger)\/([\w\.]+)", // WeChat
            ],
            vec![Extractor::fixed(Name, "WeChat"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(QQ)\/([\d\.]+)", // QQ, aka ShouQ
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"m?(qqbrowser)[\/\s]?([\w\.]+)", // QQBrowser
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"xiaomi\/miuibrowser\/([\w\.]+)", // MIUI Browser
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "MIUI Browser")],
        ),
        UaRule::new(
            &[
                r";fbav\/([\w\.]+);", // Facebook App for iOS & Android
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "Facebook")],
        ),
        UaRule::new(
            &[
                r"headlesschrome(?:\/([\w\.]+)|\s)", // Chrome Headless
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "Chrome Headless")],
        ),
        UaRule::new(
            &[
                r"\swv\).+(chrome)\/([\w\.]+)", // Chrome WebView
            ],
            vec![Extractor::rewrite(Name, "(.+)/", "$1 WebView"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"((?:oculus|samsung)browser)\/([\w\.]+)", // Oculus / Samsung Browser
            ],
            vec![Extractor::rewrite(Name, "(.+(?:g|us))(.+)/", "$1 $2"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"android.+version\/([\w\.]+)\s+(?:mobile\s?safari|safari)*", // Android Browser
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "Android Browser")],
        ),
        UaRule::new(
            &[
                r"(chrome|omniweb|arora|[tizenoka]{5}\s?browser)\/v?([\w\.]+)", // Chrome/OmniWeb/Arora/Tizen/Nokia
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(dolfin)\/([\w\.]+)", // Dolphin
            ],
            vec![Extractor::fixed(Name, "Dolphin"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"((?:android.+)crmo|crios)\/([\w\.]+)", // Chrome for Android/iOS
            ],
            vec![Extractor::fixed(Name, "Chrome"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(coast)\/([\w\.]+)", // Opera Coast
            ],
            vec![Extractor::fixed(Name, "Opera Coast"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"fxios\/([\w\.-]+)", // Firefox for iOS
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "Firefox")],
        ),
        UaRule::new(
            &[
                r"version\/([\w\.]+).+?mobile\/\w+\s(safari)", // Mobile Safari
            ],
            vec![Extractor::capture(Version), Extractor::fixed(Name, "Mobile Safari")],
        ),
        UaRule::new(
            &[
                r"version\/([\w\.]+).+?(mobile\s?safari|safari)", // Safari & Safari Mobile
            ],
            vec![Extractor::capture(Version), Extractor::capture(Name)],
        ),
        UaRule::new(
            &[
                r"webkit.+?(gsa)\/([\w\.]+).+?(mobile\s?safari|safari)(\/[\w\.]+)", // Google Search Appliance on iOS
            ],
            vec![Extractor::fixed(Name, "GSA"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"webkit.+?(mobile\s?safari|safari)(\/[\w\.]+)", // Safari < 3.0
            ],
            vec![Extractor::capture(Name), Extractor::remap(Version, OLD_SAFARI_VERSION_MAP)],
        ),
        UaRule::new(
            &[
                // 存疑：尾部"/i,"为上游数据残留，保留以保证分类结果逐条兼容
                r"(konqueror)\/([\w\.]+)/i,", // Konqueror
                r"(webkit|khtml)\/([\w\.]+)",
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                // Gecko based
                r"(navigator|netscape)\/([\w\.-]+)", // Netscape
            ],
            vec![Extractor::fixed(Name, "Netscape"), Extractor::capture(Version)],
        ),
        UaRule::new(
            &[
                r"(swiftfox)", // Swiftfox
                r"(icedragon|iceweasel|camino|chimera|fennec|maemo\sbrowser|minimo|conkeror)[\/\s]?([\w\.\+]+)", // IceDragon/Iceweasel/Camino/Chimera/Fennec/Maemo/Minimo/Conkeror
                r"(firefox|seamonkey|k-meleon|icecat|iceape|firebird|phoenix)\/([\w\.-]+)", // Firefox/SeaMonkey/K-Meleon/IceCat/IceApe/Firebird/Phoenix
                r"(mozilla)\/([\w\.]+).+rv\:.+gecko\/\d+", // Mozilla
                // Other
                r"(polaris|lynx|dillo|icab|doris|amaya|w3m|netsurf|sleipnir)[\/\s]?([\w\.]+)", // Polaris/Lynx/Dillo/iCab/Doris/Amaya/w3m/NetSurf/Sleipnir
                r"(links)\s\(([\w\.]+)",        // Links
                r"(gobrowser)\/?([\w\.]+)*",    // GoBrowser
                r"(ice\s?browser)\/v?([\w\._]+)", // ICE Browser
                r"(mosaic)[\/\s]([\w\.]+)",     // Mosaic
            ],
            vec![Extractor::capture(Name), Extractor::capture(Version)],
        ),
    ]
}
