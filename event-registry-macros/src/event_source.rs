use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, LitStr, Result};

/// #[event_source] 宏实现
/// - 移除关联函数上的 `#[event_handler]` 属性并记录其事件名（保持声明顺序）
/// - 为每个标记函数生成统一签名的适配闭包
/// - 生成 `EventSource` 实现
pub(crate) fn expand(mut item_impl: ItemImpl) -> Result<TokenStream2> {
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "#[event_source] only on inherent impl blocks",
        ));
    }

    let mut descriptors = Vec::new();

    for item in item_impl.items.iter_mut() {
        let ImplItem::Fn(func) = item else {
            continue;
        };

        let markers = take_markers(func)?;
        if markers.is_empty() {
            continue;
        }

        descriptors.push(descriptor(func, &markers)?);
    }

    let self_ty = &item_impl.self_ty;
    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();

    Ok(quote! {
        #item_impl

        impl #impl_generics ::event_registry::marker::EventSource for #self_ty #where_clause {
            fn handlers() -> ::std::vec::Vec<::event_registry::marker::HandlerDescriptor> {
                ::std::vec![ #( #descriptors ),* ]
            }
        }
    })
}

// 取出并移除 `#[event_handler("...")]`，其余属性保留
fn take_markers(func: &mut ImplItemFn) -> Result<Vec<LitStr>> {
    let mut markers = Vec::new();
    let mut retained = Vec::new();

    for attr in func.attrs.drain(..) {
        if is_marker(&attr) {
            let name: LitStr = attr.parse_args().map_err(|err| {
                syn::Error::new(
                    err.span(),
                    "expected a string literal, e.g., #[event_handler(\"EventName\")]",
                )
            })?;
            markers.push(name);
        } else {
            retained.push(attr);
        }
    }

    func.attrs = retained;
    Ok(markers)
}

// 允许 `event_handler` 与 `event_registry_macros::event_handler` 两种写法
fn is_marker(attr: &syn::Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .map(|seg| seg.ident == "event_handler")
        .unwrap_or(false)
}

fn descriptor(func: &ImplItemFn, markers: &[LitStr]) -> Result<TokenStream2> {
    let sig = &func.sig;
    let ident = &sig.ident;
    let function = ident.to_string();

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics.params,
            "#[event_handler] functions cannot be generic",
        ));
    }

    if sig.asyncness.is_some() {
        return Err(syn::Error::new(
            sig.asyncness.span(),
            "#[event_handler] functions must be synchronous",
        ));
    }

    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(
            receiver,
            "#[event_handler] functions cannot take self",
        ));
    }

    let call = match sig.inputs.len() {
        0 => quote! { Self::#ident() },
        1 => quote! { Self::#ident(args) },
        _ => {
            return Err(syn::Error::new(
                ident.span(),
                "#[event_handler] functions take no parameters or a single `&Args`",
            ));
        }
    };

    Ok(quote! {
        ::event_registry::marker::HandlerDescriptor::new(
            #function,
            ::std::vec![ #( ::event_registry::marker::HandlerMarker::new(#markers) ),* ],
            |args: &::event_registry::value::Args| -> ::event_registry::handler::HandlerResult {
                let _ = args;
                ::event_registry::handler::IntoHandlerResult::into_handler_result(#call)
            },
        )
    })
}
