//! 处理器标记与事件源
//!
//! 事件源以显式注册表（`EventSource::handlers`）列出其函数及标记，
//! 注册表据此完成扫描注册，无需运行时反射。
//! 通常由 `#[event_source]` / `#[event_handler("Name")]` 宏生成，也可手写。
//!
use crate::handler::HandlerFn;

/// 附加在函数上的标记：声明该函数响应的事件名
///
/// 不做任何校验，空字符串同样是合法事件名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerMarker {
    event_name: &'static str,
}

impl HandlerMarker {
    pub const fn new(event_name: &'static str) -> Self {
        Self { event_name }
    }

    pub fn event_name(&self) -> &'static str {
        self.event_name
    }
}

/// 事件源上的一个函数：函数名、按声明顺序排列的标记、函数指针
#[derive(Debug, Clone)]
pub struct HandlerDescriptor {
    function: &'static str,
    markers: Vec<HandlerMarker>,
    handler: HandlerFn,
}

impl HandlerDescriptor {
    pub fn new(function: &'static str, markers: Vec<HandlerMarker>, handler: HandlerFn) -> Self {
        Self {
            function,
            markers,
            handler,
        }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn markers(&self) -> &[HandlerMarker] {
        &self.markers
    }

    pub fn handler(&self) -> HandlerFn {
        self.handler
    }
}

/// 事件源：按发现顺序列出可供注册的函数
pub trait EventSource {
    fn handlers() -> Vec<HandlerDescriptor>;
}
