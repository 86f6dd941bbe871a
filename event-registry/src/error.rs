//! 注册表统一错误定义
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RegistryError {
    /// 处理器执行失败；`source` 为处理器返回的原始错误
    #[error("event handler error: event={event}, handler={handler}")]
    Handler {
        event: String,
        handler: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("missing argument: index={index}, len={len}")]
    MissingArgument { index: usize, len: usize },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// 统一 Result 类型别名
pub type RegistryResult<T> = Result<T, RegistryError>;
