//! 事件注册表（EventRegistry）
//!
//! 维护"事件名 → 处理器列表"映射：
//! - 列表按注册顺序追加，该顺序同时是调用顺序；
//! - 事件名首次注册时惰性创建列表，不提供注销；
//! - 进程级单例通过 `instance()` 惰性构造，仅构造一次。
//!
//! 映射以 `DashMap` 承载，并发读写在内存上是安全的；
//! 跨线程注册与调用之间的先后顺序由调用方自行约束。
//!
use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{RegistryError, RegistryResult};
use crate::handler::{Handler, HandlerResult};
use crate::marker::EventSource;
use crate::value::{Args, Value};
use dashmap::DashMap;
use std::any::type_name;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

static INSTANCE: OnceLock<EventRegistry> = OnceLock::new();

#[cfg(test)]
static CONSTRUCTED: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// 调用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeMode {
    /// 短路：遇到第一个有值结果立即停止并返回该值
    ShortCircuit,
    /// 广播：依次执行全部处理器，始终不返回值
    Broadcast,
}

impl From<bool> for InvokeMode {
    /// `true` 表示短路调用
    fn from(short_circuit: bool) -> Self {
        if short_circuit {
            Self::ShortCircuit
        } else {
            Self::Broadcast
        }
    }
}

/// 进程内事件注册表
/// - 以事件名为键，保存按注册顺序排列的处理器列表
/// - 支持短路与广播两种调用模式
pub struct EventRegistry {
    events: DashMap<String, Vec<Handler>>,
    config: RegistryConfig,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::with_config(RegistryConfig::default())
    }
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            events: DashMap::new(),
            config,
        }
    }

    /// 进程级单例；首次访问时构造，并发首次访问也只构造一次
    pub fn instance() -> &'static EventRegistry {
        INSTANCE.get_or_init(|| {
            #[cfg(test)]
            CONSTRUCTED.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

            debug!("event registry initialized");
            EventRegistry::new()
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// 将处理器追加到事件列表末尾，列表不存在时创建
    ///
    /// 返回是否追加成功；仅在 `DuplicatePolicy::Ignore` 下命中重复时返回 `false`。
    pub fn register_handler(&self, event_name: impl Into<String>, handler: Handler) -> bool {
        let event_name = event_name.into();
        let mut list = self.events.entry(event_name.clone()).or_default();

        if self.config.duplicates() == DuplicatePolicy::Ignore
            && list.iter().any(|h| h.label() == handler.label())
        {
            debug!(event = %event_name, handler = handler.label(), "duplicate handler ignored");
            return false;
        }

        debug!(
            event = %event_name,
            handler = handler.label(),
            position = list.len(),
            "handler registered"
        );
        list.push(handler);
        true
    }

    /// 注册闭包处理器
    pub fn register_fn<F>(&self, event_name: impl Into<String>, func: F)
    where
        F: Fn(&Args) -> HandlerResult + Send + Sync + 'static,
    {
        self.register_handler(event_name, Handler::new(func));
    }

    /// 扫描事件源并按（函数顺序, 标记顺序）逐一注册；返回新增条目数
    ///
    /// 无标记的函数被跳过；带多个标记的函数按标记各注册一次。
    pub fn scan_and_register<S: EventSource>(&self) -> usize {
        let source = type_name::<S>();
        let mut added = 0;

        for descriptor in S::handlers() {
            if descriptor.markers().is_empty() {
                trace!(source, function = descriptor.function(), "unmarked function skipped");
                continue;
            }

            let label = format!("{source}::{}", descriptor.function());
            for marker in descriptor.markers() {
                let handler = Handler::named(label.as_str(), descriptor.handler());
                if self.register_handler(marker.event_name(), handler) {
                    added += 1;
                }
            }
        }

        debug!(source, added, "event source scanned");
        added
    }

    /// 查询事件的处理器列表快照；从未注册过的事件返回 `None`
    pub fn lookup(&self, event_name: &str) -> Option<Vec<Handler>> {
        self.events.get(event_name).map(|list| list.clone())
    }

    /// 按注册顺序调用事件的处理器
    ///
    /// - 未注册的事件：不调用任何处理器，返回 `Ok(None)`；
    /// - `ShortCircuit`：返回第一个有值结果，其后的处理器不再执行；
    /// - `Broadcast`：执行全部处理器，始终返回 `Ok(None)`；
    /// - 处理器出错时立即返回错误，其后的处理器不再执行。
    pub fn invoke(
        &self,
        event_name: &str,
        mode: impl Into<InvokeMode>,
        args: &Args,
    ) -> RegistryResult<Option<Value>> {
        let mode = mode.into();
        // 先取出快照再调用，处理器内部可再次注册而不会与分片锁冲突
        let handlers = self.lookup(event_name).unwrap_or_default();

        debug!(
            event = event_name,
            ?mode,
            handlers = handlers.len(),
            args = args.len(),
            "invoking event"
        );

        for (position, handler) in handlers.iter().enumerate() {
            trace!(event = event_name, handler = handler.label(), position, "calling handler");

            let result = handler.call(args).map_err(|err| {
                warn!(event = event_name, handler = handler.label(), error = %err, "handler failed");
                RegistryError::Handler {
                    event: event_name.to_string(),
                    handler: handler.label().to_string(),
                    source: err,
                }
            })?;

            if let (InvokeMode::ShortCircuit, Some(value)) = (mode, result) {
                return Ok(Some(value));
            }
        }

        Ok(None)
    }

    /// 短路调用的便捷形式
    pub fn call_first(&self, event_name: &str, args: &Args) -> RegistryResult<Option<Value>> {
        self.invoke(event_name, InvokeMode::ShortCircuit, args)
    }

    /// 广播调用的便捷形式
    pub fn broadcast(&self, event_name: &str, args: &Args) -> RegistryResult<()> {
        self.invoke(event_name, InvokeMode::Broadcast, args).map(|_| ())
    }

    pub fn is_registered(&self, event_name: &str) -> bool {
        self.events.contains_key(event_name)
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.events.get(event_name).map(|list| list.len()).unwrap_or(0)
    }

    /// 已注册的事件名（按字典序）
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }

    /// 已注册的事件数
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
