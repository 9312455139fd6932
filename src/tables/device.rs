//! 设备类别规则表
//! 规则量最大的一张表，厂商专属模式按优先级排列
//! 个别存疑条目随上游数据原样保留（见行内注释），以保证分类结果逐条兼容

use crate::rule::FieldKey::{Model, Type, Vendor};
use crate::rule::{Extractor, UaRule};

use super::mappings::{AMAZON_DEVICE_MAP, SPRINT_MODEL_MAP, SPRINT_VENDOR_MAP};

/// 构建设备规则表
pub(super) fn rules() -> Vec<UaRule> {
    vec![
        UaRule::new(
            &[
                r"\((ipad|playbook);[\w\s\);-]+(rim|apple)", // iPad/PlayBook
            ],
            vec![
                Extractor::capture(Model),
                Extractor::capture(Vendor),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"applecoremedia\/[\w\.]+ \((ipad)/", // iPad
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "apple"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(apple\s{0,1}tv)", // Apple TV
            ],
            vec![Extractor::fixed(Model, "apple tv"), Extractor::fixed(Vendor, "apple")],
        ),
        UaRule::new(
            &[
                r"(archos)\s(gamepad2?)",           // Archos
                r"(hp).+(touchpad)",                // HP TouchPad
                r"(hp).+(tablet)",                  // HP Tablet
                r"(kindle)\/([\w\.]+)",             // Kindle
                r"\s(nook)[\w\s]+build\/(\w+)",     // Nook
                r"(dell)\s(strea[kpr\s\d]*[\dko])", // Dell Streak
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(kf[A-z]+)\sbuild\/[\w\.]+.*silk\/", // Kindle Fire HD
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "amazon"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(sd|kf)[0349hijorstuw]+\sbuild\/[\w\.]+.*silk\/", // Fire Phone
            ],
            vec![
                Extractor::remap(Model, AMAZON_DEVICE_MAP),
                Extractor::fixed(Vendor, "amazon"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"\((ip[honed|\s\w*]+);.+(apple)", // iPod/iPhone
            ],
            vec![
                Extractor::capture(Model),
                Extractor::capture(Vendor),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"\((ip[honed|\s\w*]+);", // iPod/iPhone
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "apple"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"(blackberry)[\s-]?(\w+)", // BlackBerry
                r"(blackberry|benq|palm(?=\-)|sonyericsson|acer|asus|dell|meizu|motorola|polytron)[\s_-]?([\w-]+)*", // BenQ/Palm/Sony-Ericsson/Acer/Asus/Dell/Meizu/Motorola/Polytron
                r"(hp)\s([\w\s]+\w)", // HP iPAQ
                r"(asus)-?(\w+)",     // Asus
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"\(bb10;\s(\w+)", // BlackBerry 10
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "BlackBerry"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+(transfo[prime\s]{4,10}\s\w+|eeepc|slider\s\w+|nexus 7|padfone)", // Asus Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "asus"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(sony)\s(tablet\s[ps])\sbuild\/", // Sony Xperia
                r"(sony)?(?:sgp.+)\sbuild\/",
            ],
            vec![
                Extractor::fixed(Vendor, "sony"),
                Extractor::fixed(Model, "xperia tablet"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+\s([c-g]\d{4}|so[-l]\w+)\sbuild\/", // Sony
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "sony"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"\s(ouya)\s",            // Ouya
                r"(nintendo)\s([wids3u]+)", // Nintendo
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "console"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+;\s(shield)\sbuild", // Nvidia
            ],
            vec![
                Extractor::capture(Model),
                // 存疑：上游数据将Nvidia Shield厂商标为sony，原样保留
                Extractor::fixed(Vendor, "sony"),
                Extractor::fixed(Type, "console"),
            ],
        ),
        UaRule::new(
            &[
                r"(playstation\s[34portablevi]+)", // Playstation
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "sony"),
                Extractor::fixed(Type, "console"),
            ],
        ),
        UaRule::new(
            &[
                r"(sprint\s(\w+))", // Sprint Phones
            ],
            vec![
                Extractor::remap(Vendor, SPRINT_VENDOR_MAP),
                Extractor::remap(Model, SPRINT_MODEL_MAP),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"(lenovo)\s?(S(?:5000|6000)+(?:[-][\w+]))", // Lenovo tablets
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(htc)[;_\s-]+([\w\s]+(?=\))|\w+)*", // HTC
                r"(zte)-(\w+)*",                      // ZTE
                r"(alcatel|geeksphone|lenovo|nexian|panasonic|(?=;\s)sony)[_\s-]?([\w-]+)*", // Alcatel/GeeksPhone/Lenovo/Nexian/Panasonic/Sony
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::rewrite(Model, "_", " "),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"(nexus\s9)", // HTC Nexus 9
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "htc"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"d\/huawei([\w\s-]+)[;\)]", // Huawei
                r"(nexus\s6p)",
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "huawei"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"(microsoft);\s(lumia[\s\w]+)", // Microsoft Lumia
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"[\s\(;](xbox(?:\sone)?)[\s\);]", // Microsoft Xbox
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "microsoft"),
                Extractor::fixed(Type, "console"),
            ],
        ),
        UaRule::new(
            &[
                r"(kin\.[onetw]{3})", // Microsoft Kin
            ],
            vec![
                Extractor::rewrite(Model, r"\.", " "),
                Extractor::fixed(Vendor, "microsoft"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"\s(milestone|droid(?:[2-4x]|\s(?:bionic|x2|pro|razr))?(:?\s4g)?)[\w\s]+build\/", // Motorola
                r"mot[\s-]?(\w+)*",
                r"(XT\d{3,4}) build\/",
                r"(nexus\s6)",
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "motorola"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+\s(mz60\d|xoom[\s2]{0,2})\sbuild\/", // Motorola
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "motorola"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"hbbtv\/\d+\.\d+\.\d+\s+\([\w\s]*;\s*(\w[^;]*);([^;]*)", // HbbTV devices
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "smarttv"),
            ],
        ),
        UaRule::new(
            &[
                r"hbbtv.+maple;(\d+)",
            ],
            vec![
                Extractor::rewrite(Model, "^/", "SmartTV"),
                Extractor::fixed(Vendor, "samsung"),
                Extractor::fixed(Type, "smarttv"),
            ],
        ),
        UaRule::new(
            &[
                r"\(dtv[\);].+(aquos)", // Sharp
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "sharp"),
                Extractor::fixed(Type, "smarttv"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+((sch-i[89]0\d|shw-m380s|gt-p\d{4}|gt-n\d+|sgh-t8[56]9|nexus 10))", // Samsung
                r"((SM-T\w+))",
            ],
            vec![
                Extractor::fixed(Vendor, "samsung"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"smart-tv.+(samsung)",
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::fixed(Type, "smarttv"),
                Extractor::capture(Model),
            ],
        ),
        UaRule::new(
            &[
                r"((s[cgp]h-\w+|gt-\w+|galaxy\snexus|sm-\w[\w\d]+))",
                r"(sam[sung]*)[\s-]*(\w+-?[\w-]*)*",
                r"sec-((sgh\w+))",
            ],
            vec![
                Extractor::fixed(Vendor, "samsung"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"sie-(\w+)*", // Siemens
            ],
            vec![
                Extractor::capture(Model),
                // 存疑：上游数据的厂商名拼写即为siemes，原样保留
                Extractor::fixed(Vendor, "siemes"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"(maemo|nokia).*(n900|lumia\s\d+)", // Nokia
                r"(nokia)[\s_-]?([\w-]+)*",
            ],
            vec![
                Extractor::fixed(Vendor, "nokia"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android\s3\.[\s\w;-]{10}(a\d{3})", // Acer
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "acer"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+([vl]k\-?\d{3})\s+build", // LG Tablet
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "lg"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android\s3\.[\s\w;-]{10}(lg?)-([06cv9]{3,4})", // LG Tablet
            ],
            vec![
                Extractor::fixed(Vendor, "lg"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(lg) netcast\.tv", // LG SmartTV
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "smarttv"),
            ],
        ),
        UaRule::new(
            &[
                r"(nexus\s[45])", // LG
                r"lg[e;\s\/-]+(\w+)*",
                r"android.+lg(\-?[\d\w]+)\s+build",
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "lg"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+(ideatab[a-z0-9\-\s]+)", // Lenovo
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "lenovo"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"linux;.+((jolla));", // Jolla
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"((pebble))app\/[\d\.]+\s", // Pebble
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "wearable"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+;\s(oppo)\s?([\w\s]+)\sbuild", // OPPO
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"crkey", // Google Chromecast
            ],
            vec![Extractor::fixed(Model, "chromecast"), Extractor::fixed(Vendor, "google")],
        ),
        UaRule::new(
            &[
                r"android.+;\s(glass)\s\d", // Google Glass
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "google"),
                Extractor::fixed(Type, "wearable"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+;\s(pixel c)\s", // Google Pixel C
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "google"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+;\s(pixel xl|pixel)\s", // Google Pixel
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "google"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+(\w+)\s+build\/hm\1",                                   // Xiaomi Hongmi 'numeric' models
                r"android.+(hm[\s\-_]*note?[\s_]*(?:\d\w)?)\s+build",              // Xiaomi Hongmi
                r"android.+(mi[\s\-_]*(?:one|one[\s_]plus|note lte)?[\s_]*(?:\d\w)?)\s+build", // Xiaomi Mi
                r"android.+(redmi[\s\-_]*(?:note)?(?:[\s_]*[\w\s]+)?)\s+build",    // Redmi Phones
            ],
            vec![
                Extractor::rewrite(Model, "_", " "),
                Extractor::fixed(Vendor, "xiaomi"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+(mi[\s\-_]*(?:pad)?(?:[\s_]*[\w\s]+)?)\s+build", // Mi Pad tablets
            ],
            vec![
                Extractor::rewrite(Model, "_", " "),
                Extractor::fixed(Vendor, "xiaomi"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+;\s(m[1-5]\snote)\sbuild", // Meizu Tablet
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "meizu"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+a000(1)\s+build", // OnePlus
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "oneplus"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(RCT[\d\w]+)\s+build", // RCA Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "rca"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(Venue[\d\s]*)\s+build", // Dell Venue Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "dell"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(Q[T|M][\d\w]+)\s+build", // Verizon Tablet
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "verizon"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s+(Barnes[&\s]+Noble\s+|BN[RT])(V?.*)\s+build", // Barnes & Noble Tablet
            ],
            vec![
                Extractor::fixed(Vendor, "barnes & noble"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s+(TM\d{3}.*\b)\s+build", // Barnes & Noble Tablet
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "nuvision"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(zte)?.+(k\d{2})\s+build", // ZTE K Series Tablet
            ],
            vec![
                Extractor::fixed(Vendor, "zte"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(gen\d{3})\s+build.*49h", // Swiss GEN Mobile
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "swiss"),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(zur\d{3})\s+build", // Swiss ZUR Tablet
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "swiss"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*((Zeki)?TB.*\b)\s+build", // Zeki Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "zeki"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"(android).+[;\/]\s+([YR]\d{2}x?.*)\s+build", // Dragon Touch Tablet
                r"android.+[;\/]\s+(Dragon[\-\s]+Touch\s+|DT)(.+)\s+build",
            ],
            vec![
                Extractor::fixed(Vendor, "dragon touch"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(NS-?.+)\s+build", // Insignia Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "insignia"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*((NX|Next)-?.+)\s+build", // NextBook Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "nextbook"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(Xtreme\_?)?(V(1[045]|2[015]|30|40|60|7[05]|90))\s+build", // Voice Xtreme Phones
            ],
            vec![
                Extractor::fixed(Vendor, "voice"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(LVTEL\-?)?(V1[12])\s+build", // LvTel Phones
            ],
            vec![
                Extractor::fixed(Vendor, "lvtel"),
                Extractor::capture(Model),
                Extractor::fixed(Type, "mobile"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(V(100MD|700NA|7011|917G).*\b)\s+build", // Envizen Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "envizen"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(Le[\s\-]+Pan)[\s\-]+(.*\b)\s+build", // Le Pan Tablets
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(Trio[\s\-]*.*)\s+build", // MachSpeed Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "machspeed"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*(Trinity)[\-\s]*(T\d{3})\s+build", // Trinity Tablets
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+[;\/]\s*TU_(1491)\s+build", // Rotor Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "rotor"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"android.+(KS(.+))\s+build", // Amazon Kindle Tablets
            ],
            vec![
                Extractor::capture(Model),
                Extractor::fixed(Vendor, "amazon"),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                // 存疑：尾部"/i]"为上游数据残留，保留以保证分类结果逐条兼容
                r"android.+(Gigaset)[\s\-]+(Q.+)\s+build/i]", // Gigaset Tablets
            ],
            vec![
                Extractor::capture(Vendor),
                Extractor::capture(Model),
                Extractor::fixed(Type, "tablet"),
            ],
        ),
        UaRule::new(
            &[
                r"\s(tablet|tab)[;\/]",          // Unidentifiable Tablet
                r"\s(mobile)(?:[;\/]|\ssafari)", // Unidentifiable Mobile
            ],
            vec![
                Extractor::capture(Type),
                Extractor::capture(Vendor),
                Extractor::capture(Model),
            ],
        ),
        UaRule::new(
            &[
                r"(android.+)[;\/].+build", // Generic Android Device
            ],
            vec![Extractor::capture(Model), Extractor::fixed(Vendor, "generic")],
        ),
    ]
}
