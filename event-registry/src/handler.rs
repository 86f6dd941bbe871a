//! 事件处理器（Handler）
//!
//! 处理器接收参数包并返回"有值"或"无值"；"无值" (`Ok(None)`) 是合法结果而非错误。
//! 注册表不校验处理器签名，参数还原由处理器负责。
//!
use crate::value::{Args, Value};
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// 处理器返回值：`Ok(Some(v))` 有值，`Ok(None)` 无值，`Err` 执行失败
pub type HandlerResult = anyhow::Result<Option<Value>>;

/// 事件源描述中使用的函数指针形式
pub type HandlerFn = fn(&Args) -> HandlerResult;

type DynHandlerFn = Arc<dyn Fn(&Args) -> HandlerResult + Send + Sync>;

/// 已注册的处理器（可廉价克隆）
#[derive(Clone)]
pub struct Handler {
    label: Arc<str>,
    func: DynHandlerFn,
}

impl Handler {
    /// 以闭包类型名作为标识创建处理器
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Args) -> HandlerResult + Send + Sync + 'static,
    {
        Self::named(type_name::<F>(), func)
    }

    pub fn named<F>(label: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&Args) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// 处理器标识（用于日志与重复注册判断）
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn call(&self, args: &Args) -> HandlerResult {
        (self.func)(args)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// 将标记函数的返回值统一转换为 `HandlerResult`
pub trait IntoHandlerResult {
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> HandlerResult {
        Ok(None)
    }
}

impl IntoHandlerResult for Value {
    fn into_handler_result(self) -> HandlerResult {
        Ok(Some(self))
    }
}

impl IntoHandlerResult for Option<Value> {
    fn into_handler_result(self) -> HandlerResult {
        Ok(self)
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map(|()| None).map_err(Into::into)
    }
}

impl<E> IntoHandlerResult for Result<Value, E>
where
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map(Some).map_err(Into::into)
    }
}

impl<E> IntoHandlerResult for Result<Option<Value>, E>
where
    E: Into<anyhow::Error>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(Into::into)
    }
}
