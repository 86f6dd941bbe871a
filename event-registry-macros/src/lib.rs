use proc_macro::TokenStream;
use syn::{Item, parse_macro_input, spanned::Spanned};

mod event_source;

/// 事件源宏
/// - 用于 `impl T { ... }` 块，收集带 `#[event_handler("Name")]` 标记的关联函数
/// - 为 `T` 实现 `::event_registry::marker::EventSource`，按源码顺序列出函数及其标记
/// - 标记函数签名：无参数或单个 `&Args` 参数，无 `self`，返回值实现 `IntoHandlerResult`
#[proc_macro_attribute]
pub fn event_source(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::TokenStream::from(attr).span(),
            "#[event_source] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as Item);
    match input {
        Item::Impl(item_impl) => event_source::expand(item_impl)
            .unwrap_or_else(syn::Error::into_compile_error)
            .into(),
        other => syn::Error::new_spanned(other, "#[event_source] only on impl blocks")
            .to_compile_error()
            .into(),
    }
}

/// 处理器标记：`#[event_handler("EventName")]`
///
/// 仅在 `#[event_source]` 块内生效，由外层宏读取并移除。
#[proc_macro_attribute]
pub fn event_handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    let _ = attr;
    let input = parse_macro_input!(item as Item);
    let message = "#[event_handler] must be used inside an #[event_source] impl block";

    let err = match &input {
        Item::Fn(func) => syn::Error::new(func.sig.ident.span(), message),
        other => syn::Error::new_spanned(other, message),
    };
    err.to_compile_error().into()
}
