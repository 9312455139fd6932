//! 特殊重映射字典
//! 纯映射数据（有序，字典序即优先级），四份字典共用同一套查表语义：
//! 大写包含判定，未命中且捕获非空时回退原始捕获文本

use crate::rule::RemapDict;

/// 旧版Safari：WebKit构建号片段 → 市场版本号
pub static OLD_SAFARI_VERSION_MAP: &RemapDict = &[
    ("1.0", &["/8"]),
    ("1.2", &["/1"]),
    ("1.3", &["/3"]),
    ("2.0", &["/412"]),
    ("2.0.2", &["/416"]),
    ("2.0.3", &["/417"]),
    ("2.0.4", &["/419"]),
    ("?", &["/"]),
];

/// Amazon设备代号 → 设备型号
pub static AMAZON_DEVICE_MAP: &RemapDict = &[
    ("Fire Phone", &["SD", "KF"]),
];

/// Sprint定制机：设备代号 → 厂商
pub static SPRINT_VENDOR_MAP: &RemapDict = &[
    ("HTC", &["APA"]),
    ("Sprint", &["Sprint"]),
];

/// Sprint定制机：设备代号 → 型号
pub static SPRINT_MODEL_MAP: &RemapDict = &[
    ("Evo Shift 4G", &["7373KT"]),
];

/// Windows内核版本号 → 市场版本号
pub static WINDOWS_VERSION_MAP: &RemapDict = &[
    ("ME", &["4.90"]),
    ("NT 3.11", &["NT3.51"]),
    ("NT 4.0", &["NT4.0"]),
    ("2000", &["NT 5.0"]),
    ("XP", &["NT 5.1", "NT 5.2"]),
    ("Vista", &["NT 6.0"]),
    ("7", &["NT 6.1"]),
    ("8", &["NT 6.2"]),
    ("8.1", &["NT 6.3"]),
    ("10", &["NT 6.4", "NT 10.0"]),
    ("RT", &["ARM"]),
];
