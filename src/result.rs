//! 类别结果结构
//! 五类结果各自独立可空；"全部字段为空"的记录在构建期即折叠为None，
//! 与"该类别无规则命中"共用同一种缺失表达

use serde::{Deserialize, Serialize};

use crate::rule::{FieldKey, FieldMap};

/// 浏览器识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Browser {
    /// 从字段集投影构建，所有字段均缺失时返回None
    pub fn from_fields(fields: Option<&FieldMap>) -> Option<Self> {
        let fields = fields?;
        let name = fields.get(&FieldKey::Name).cloned();
        let version = fields.get(&FieldKey::Version).cloned();
        if name.is_none() && version.is_none() {
            return None;
        }
        Some(Self { name, version })
    }
}

/// CPU架构识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpu {
    pub arch: Option<String>,
}

impl Cpu {
    pub fn from_fields(fields: Option<&FieldMap>) -> Option<Self> {
        let arch = fields?.get(&FieldKey::Arch).cloned()?;
        Some(Self { arch: Some(arch) })
    }
}

/// 设备识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub vendor: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub model: Option<String>,
}

impl Device {
    pub fn from_fields(fields: Option<&FieldMap>) -> Option<Self> {
        let fields = fields?;
        let vendor = fields.get(&FieldKey::Vendor).cloned();
        let device_type = fields.get(&FieldKey::Type).cloned();
        let model = fields.get(&FieldKey::Model).cloned();
        if vendor.is_none() && device_type.is_none() && model.is_none() {
            return None;
        }
        Some(Self { vendor, device_type, model })
    }
}

/// 渲染引擎识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Engine {
    pub fn from_fields(fields: Option<&FieldMap>) -> Option<Self> {
        let fields = fields?;
        let name = fields.get(&FieldKey::Name).cloned();
        let version = fields.get(&FieldKey::Version).cloned();
        if name.is_none() && version.is_none() {
            return None;
        }
        Some(Self { name, version })
    }
}

/// 操作系统识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl Os {
    pub fn from_fields(fields: Option<&FieldMap>) -> Option<Self> {
        let fields = fields?;
        let name = fields.get(&FieldKey::Name).cloned();
        let version = fields.get(&FieldKey::Version).cloned();
        if name.is_none() && version.is_none() {
            return None;
        }
        Some(Self { name, version })
    }
}

/// 聚合解析结果：五个类别各自独立可空，序列化时自动跳过空类别
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UaInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<Browser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Cpu>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<Os>,
}

fn fmt_pair(name: &Option<String>, version: &Option<String>) -> String {
    match (name, version) {
        (Some(n), Some(v)) => format!("{} {}", n, v),
        (Some(n), None) => n.clone(),
        (None, Some(v)) => v.clone(),
        (None, None) => "-".to_string(),
    }
}

impl std::fmt::Display for UaInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let browser = self
            .browser
            .as_ref()
            .map_or_else(|| "-".to_string(), |b| fmt_pair(&b.name, &b.version));
        let engine = self
            .engine
            .as_ref()
            .map_or_else(|| "-".to_string(), |e| fmt_pair(&e.name, &e.version));
        let os = self
            .os
            .as_ref()
            .map_or_else(|| "-".to_string(), |o| fmt_pair(&o.name, &o.version));
        let cpu = self
            .cpu
            .as_ref()
            .and_then(|c| c.arch.clone())
            .unwrap_or_else(|| "-".to_string());
        let device = self.device.as_ref().map_or_else(
            || "-".to_string(),
            |d| {
                let parts: Vec<&str> = [&d.vendor, &d.model, &d.device_type]
                    .iter()
                    .filter_map(|p| p.as_deref())
                    .collect();
                if parts.is_empty() { "-".to_string() } else { parts.join(" ") }
            },
        );
        writeln!(f, "browser: {}", browser)?;
        writeln!(f, "engine:  {}", engine)?;
        writeln!(f, "os:      {}", os)?;
        writeln!(f, "device:  {}", device)?;
        write!(f, "cpu:     {}", cpu)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::FieldKey;

    fn fields_of(pairs: &[(FieldKey, &str)]) -> FieldMap {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_record_absent_without_field_map() {
        // 测试场景：类别无规则命中时，记录整体缺失
        assert!(Browser::from_fields(None).is_none());
        assert!(Cpu::from_fields(None).is_none());
        assert!(Device::from_fields(None).is_none());
        assert!(Engine::from_fields(None).is_none());
        assert!(Os::from_fields(None).is_none());
    }

    #[test]
    fn test_record_absent_when_all_declared_fields_empty() {
        // 测试场景：字段集非空但声明字段全空，记录仍折叠为缺失
        let foreign = fields_of(&[(FieldKey::Arch, "amd64")]);
        assert!(Browser::from_fields(Some(&foreign)).is_none());
        assert!(Device::from_fields(Some(&foreign)).is_none());
        assert!(Os::from_fields(Some(&foreign)).is_none());

        let no_arch = fields_of(&[(FieldKey::Name, "Chrome")]);
        assert!(Cpu::from_fields(Some(&no_arch)).is_none());
    }

    #[test]
    fn test_partial_fields_survive_projection() {
        // 测试场景：部分字段缺失不影响记录存在性
        let fields = fields_of(&[(FieldKey::Model, "iPhone")]);
        let device = Device::from_fields(Some(&fields)).unwrap();
        assert_eq!(device.model.as_deref(), Some("iPhone"));
        assert!(device.vendor.is_none());
        assert!(device.device_type.is_none());
    }

    #[test]
    fn test_projection_copies_declared_keys_only() {
        // 测试场景：投影仅复制声明字段，忽略无关键
        let fields = fields_of(&[
            (FieldKey::Name, "Firefox"),
            (FieldKey::Version, "115.0"),
            (FieldKey::Arch, "amd64"),
        ]);
        let browser = Browser::from_fields(Some(&fields)).unwrap();
        assert_eq!(browser.name.as_deref(), Some("Firefox"));
        assert_eq!(browser.version.as_deref(), Some("115.0"));
    }

    #[test]
    fn test_info_json_skips_absent_categories() {
        // 测试场景：空类别不出现在序列化输出中
        let info = UaInfo {
            browser: Some(Browser { name: Some("Chrome".into()), version: None }),
            ..UaInfo::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("browser"));
        assert!(!json.contains("device"));
    }
}
