use bon::Builder;

/// 同一事件下重复注册同一处理器时的策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// 累加：重复注册产生多个条目，调用时各执行一次
    #[default]
    Append,
    /// 忽略：事件下已存在同名（label）处理器时跳过本次注册
    Ignore,
}

/// 注册表配置
#[derive(Builder, Default, Debug, Clone)]
pub struct RegistryConfig {
    #[builder(default)]
    duplicates: DuplicatePolicy,
}

impl RegistryConfig {
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }
}
