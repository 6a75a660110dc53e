use std::mem;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Expr, ExprLit, ItemFn, Lit, Meta, Path, parse_macro_input};

/// Register a function in `crate::TESTS`.
///
/// `///` comments become the test's docs. An optional argument names a
/// `&[TestGroup]` constant next to the function: `#[test(PARSER)]`.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let groups = match attr.is_empty() {
        true => quote!(&[]),
        false => {
            let path = parse_macro_input!(attr as Path);
            quote!(super::#path)
        }
    };

    let mut func = parse_macro_input!(item as ItemFn);
    let name = &func.sig.ident;
    let func_name_str = name.to_string();
    let name_uppercase = format_ident!("{}", func_name_str.to_uppercase());

    let mut docs = Vec::new();
    let mut ignore = false;
    let mut should_panic = false;
    let mut attrs = Vec::new();
    for attr in mem::take(&mut func.attrs) {
        let value = match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(value),
                    ..
                }) => Some(value.value()),
                _ => None,
            },
            _ => None,
        };

        if attr.path().is_ident("doc") {
            docs.extend(value);
            attrs.push(attr);
        } else if attr.path().is_ident("ignore") {
            ignore = true;
        } else if attr.path().is_ident("should_panic") {
            should_panic = true;
        } else {
            attrs.push(attr);
        }
    }
    func.attrs = attrs;

    let docs = match docs.is_empty() {
        true => quote!(None),
        false => {
            let docs = docs.join("\n");
            quote!(Some(std::borrow::Cow::Borrowed(#docs)))
        }
    };

    let expanded = quote! {
        mod #name {
            #[linkme::distributed_slice(crate::TESTS)]
            static #name_uppercase: kispec::test::Test = kispec::test::Test::new(
                kispec::test::TestFnHandle::Ptr(#name),
                kispec::test::TestMeta {
                    name: std::borrow::Cow::Borrowed(#func_name_str),
                    original_name: None,
                    docs: #docs,
                    groups: std::borrow::Cow::Borrowed(#groups),
                    ignore: #ignore,
                    should_panic: #should_panic,
                    extra: (),
                }
            );

            fn #name() -> kispec::test::TestResult {
                super::#name().into()
            }
        }

        #func
    };

    expanded.into()
}
