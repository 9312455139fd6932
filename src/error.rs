//! 全局错误类型定义

use fancy_regex::Error as RegexError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UaParserError {
    // 规则相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),
    #[error("规则校验失败：{0}")]
    InvalidRule(String),
}

// 全局Result类型
pub type UaResult<T> = Result<T, UaParserError>;
