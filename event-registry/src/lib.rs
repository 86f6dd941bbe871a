//! 进程内事件注册表（event-registry）
//!
//! 将事件名映射到按注册顺序排列的处理器列表，并按需调用：
//! - `registry`：进程级单例 `EventRegistry`，负责注册、查询与调用；
//! - `marker`：处理器标记与事件源注册表（`EventSource`），替代运行时反射；
//! - `handler`：类型擦除的处理器与返回值转换；
//! - `value`：参数包 `Args` 与返回值 `Value`；
//! - `error`：统一错误类型。
//!
//! 典型用法：
//! 1. 在 `impl` 块上使用 `#[event_source]`，并以 `#[event_handler("Name")]` 标记关联函数；
//! 2. 通过 `EventRegistry::instance().scan_and_register::<T>()` 注册；
//! 3. 通过 `invoke` 以短路或广播模式触发事件。
//!
pub mod config;
pub mod error;
pub mod handler;
pub mod marker;
pub mod registry;
pub mod value;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use handler::{Handler, HandlerFn, HandlerResult, IntoHandlerResult};
pub use marker::{EventSource, HandlerDescriptor, HandlerMarker};
pub use registry::{EventRegistry, InvokeMode};
pub use value::{Args, Value};

// 允许在本 crate 内部通过 ::event_registry 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::event_registry 路径。
extern crate self as event_registry;
