//! UA解析器门面
//! 五个类别相互独立、按需惰性计算；同一输入重复取值结果恒等

use once_cell::sync::OnceCell;

use crate::matcher::match_first;
use crate::result::{Browser, Cpu, Device, Engine, Os, UaInfo};
use crate::tables::RuleLibrary;

/// UA字符串解析器
/// 设计说明：
/// - 规则库默认取进程级内置表，可注入自定义库替换内置表（测试用途）
/// - 各类别独立记忆化，互不影响；解析器自身不持有跨调用可变状态，
///   规则库只读共享，多线程并发解析无需加锁
pub struct UaParser<'a> {
    /// 原始UA字符串
    agent: String,
    /// 规则库（借用，默认指向内置静态表）
    library: &'a RuleLibrary,
    browser: OnceCell<Option<Browser>>,
    cpu: OnceCell<Option<Cpu>>,
    device: OnceCell<Option<Device>>,
    engine: OnceCell<Option<Engine>>,
    os: OnceCell<Option<Os>>,
}

impl UaParser<'static> {
    /// 使用内置规则库创建解析器
    pub fn new(agent: impl Into<String>) -> Self {
        Self::with_library(agent, RuleLibrary::shipped())
    }
}

impl<'a> UaParser<'a> {
    /// 使用指定规则库创建解析器
    /// 适用场景：测试中以最小规则库替换内置表
    pub fn with_library(agent: impl Into<String>, library: &'a RuleLibrary) -> Self {
        Self {
            agent: agent.into(),
            library,
            browser: OnceCell::new(),
            cpu: OnceCell::new(),
            device: OnceCell::new(),
            engine: OnceCell::new(),
            os: OnceCell::new(),
        }
    }

    /// 原始UA字符串
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// 浏览器识别结果（首次访问时计算）
    pub fn browser(&self) -> Option<&Browser> {
        self.browser
            .get_or_init(|| {
                Browser::from_fields(match_first(&self.agent, &self.library.browsers).as_ref())
            })
            .as_ref()
    }

    /// CPU架构识别结果（首次访问时计算）
    pub fn cpu(&self) -> Option<&Cpu> {
        self.cpu
            .get_or_init(|| Cpu::from_fields(match_first(&self.agent, &self.library.cpu).as_ref()))
            .as_ref()
    }

    /// 设备识别结果（首次访问时计算）
    pub fn device(&self) -> Option<&Device> {
        self.device
            .get_or_init(|| {
                Device::from_fields(match_first(&self.agent, &self.library.devices).as_ref())
            })
            .as_ref()
    }

    /// 渲染引擎识别结果（首次访问时计算）
    pub fn engine(&self) -> Option<&Engine> {
        self.engine
            .get_or_init(|| {
                Engine::from_fields(match_first(&self.agent, &self.library.engines).as_ref())
            })
            .as_ref()
    }

    /// 操作系统识别结果（首次访问时计算）
    pub fn os(&self) -> Option<&Os> {
        self.os
            .get_or_init(|| Os::from_fields(match_first(&self.agent, &self.library.os).as_ref()))
            .as_ref()
    }

    /// 一次取齐五类结果
    pub fn info(&self) -> UaInfo {
        UaInfo {
            browser: self.browser().cloned(),
            cpu: self.cpu().cloned(),
            device: self.device().cloned(),
            engine: self.engine().cloned(),
            os: self.os().cloned(),
        }
    }
}
