//! 参数包与返回值
//!
//! 处理器的参数与返回值均以类型擦除方式传递，由处理器自行还原：
//! - `Value`：任意 `Send + Sync` 值，并记录构造时的类型名；
//! - `Args`：有序参数包，"无参数" 即空参数包。
//!
use crate::error::{RegistryError, RegistryResult};
use std::any::{Any, type_name};
use std::fmt;

/// 类型擦除的值（参数或处理器返回的"有值"结果）
pub struct Value {
    inner: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// 构造时的具体类型名
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// 取出内部值；类型不符时返回 `TypeMismatch`
    pub fn downcast<T: Any>(self) -> RegistryResult<T> {
        let found = self.type_name;
        self.inner
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| RegistryError::TypeMismatch {
                expected: type_name::<T>(),
                found,
            })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// 有序参数包
#[derive(Debug, Default)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Value::new(value));
    }

    /// 追加一个参数并返回自身，便于链式构造
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// 按位置取出参数并还原为 `T`
    pub fn arg<T: Any>(&self, index: usize) -> RegistryResult<&T> {
        let value = self.get(index).ok_or(RegistryError::MissingArgument {
            index,
            len: self.len(),
        })?;

        value
            .downcast_ref::<T>()
            .ok_or(RegistryError::TypeMismatch {
                expected: type_name::<T>(),
                found: value.type_name(),
            })
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// 构造参数包：`args![1_i32, "name".to_string()]`
#[macro_export]
macro_rules! args {
    () => {
        $crate::value::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::value::Args::new()$(.with($value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_by_default() {
        let args = Args::default();
        assert!(args.is_empty());
        assert_eq!(args.len(), 0);
        assert!(args.get(0).is_none());
    }

    #[test]
    fn arg_by_position() {
        let args = crate::args![7_i32, String::from("seven")];
        assert_eq!(args.len(), 2);
        assert_eq!(*args.arg::<i32>(0).unwrap(), 7);
        assert_eq!(args.arg::<String>(1).unwrap(), "seven");
    }

    #[test]
    fn missing_argument_reports_len() {
        let args = crate::args![1_u8];
        match args.arg::<u8>(3).unwrap_err() {
            RegistryError::MissingArgument { index, len } => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let args = crate::args![1_u8];
        match args.arg::<String>(0).unwrap_err() {
            RegistryError::TypeMismatch { expected, found } => {
                assert!(expected.contains("String"));
                assert_eq!(found, "u8");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn value_downcast() {
        let v = Value::new(42_u64);
        assert!(v.is::<u64>());
        assert_eq!(v.downcast_ref::<u64>(), Some(&42));
        assert_eq!(v.downcast::<u64>().unwrap(), 42);

        let err = Value::new("str").downcast::<u64>().unwrap_err();
        assert!(matches!(err, RegistryError::TypeMismatch { expected: "u64", .. }));
    }
}
