//! Test declaration macros for the lstest harness.
//!
//! - `#[test]`: turns a function into a registered test case
//! - `test_main!()`: generates the program entry point
//!
//! Both are re-exported from `lstest`; depend on that crate rather than this one.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, ReturnType, parse_macro_input, parse_quote};

/// Prefix of the exported symbol and registration name of every test.
const SYMBOL_PREFIX: &str = "lst_t_";

/// Name prefixes reserved for generated items.
const RESERVED_PREFIXES: &[&str] = &["lst_", "ls_"];

/// Declares a test and registers it before `main` runs.
///
/// The function takes an optional `&mut lstest::TestContext` and returns either nothing or a
/// `lstest::TestStatus`. When the return type is omitted, `TestStatus::OK` is returned after the body.
///
/// # Example
/// ```ignore
/// #[lstest::test]
/// fn adds(cx: &mut lstest::TestContext) {
///     lstest::check_eq!(cx, 1 + 2, 3);
/// }
///
/// // Generates (roughly):
/// #[unsafe(export_name = "lst_t_adds")]
/// fn adds(cx: &mut lstest::TestContext) -> lstest::TestStatus {
///     { lstest::check_eq!(cx, 1 + 2, 3); }
///     lstest::TestStatus::OK
/// }
/// lstest::__private::inventory::submit! {
///     lstest::TestCase::new("lst_t_adds", adds)
/// }
/// ```
///
/// The exported symbol makes two tests with the same name anywhere in one binary a link error.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = TokenStream2::from(attr);
    let item = parse_macro_input!(item as ItemFn);
    expand_test(attr, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates `fn main` running every registered test with the process arguments.
#[proc_macro]
pub fn test_main(input: TokenStream) -> TokenStream {
    let input = TokenStream2::from(input);
    expand_test_main(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_test(attr: TokenStream2, mut item: ItemFn) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "#[lstest::test] takes no arguments"));
    }

    let name = item.sig.ident.clone();
    let name_str = name.to_string();
    let name_str = name_str.strip_prefix("r#").unwrap_or(&name_str);
    if let Some(prefix) = RESERVED_PREFIXES.iter().find(|p| name_str.starts_with(*p)) {
        return Err(syn::Error::new_spanned(
            &name,
            format!("test names must not start with the reserved prefix `{prefix}`"),
        ));
    }
    check_signature(&item)?;

    // Inject the context parameter when the test does not use it.
    if item.sig.inputs.is_empty() {
        let cx = format_ident!("_cx", span = Span::call_site());
        item.sig.inputs.push(parse_quote!(#cx: &mut ::lstest::TestContext<'_>));
    }

    // Default the return value so plain `fn name(..) { .. }` bodies work.
    if matches!(item.sig.output, ReturnType::Default) {
        item.sig.output = parse_quote!(-> ::lstest::TestStatus);
        let body = &item.block;
        item.block = Box::new(parse_quote!({
            #body;
            ::lstest::TestStatus::OK
        }));
    }

    let symbol = format!("{SYMBOL_PREFIX}{name_str}");

    Ok(quote! {
        #[allow(unsafe_code)]
        #[unsafe(export_name = #symbol)]
        #item

        ::lstest::__private::inventory::submit! {
            ::lstest::TestCase::new(#symbol, #name)
        }
    })
}

fn check_signature(item: &ItemFn) -> syn::Result<()> {
    let sig = &item.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(asyncness, "tests cannot be async"));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(&sig.generics, "tests cannot be generic"));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new_spanned(variadic, "tests cannot be variadic"));
    }
    if sig.inputs.len() > 1 {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "tests take at most one parameter: `&mut lstest::TestContext`",
        ));
    }
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(receiver, "tests cannot take `self`"));
    }
    Ok(())
}

fn expand_test_main(input: TokenStream2) -> syn::Result<TokenStream2> {
    if !input.is_empty() {
        return Err(syn::Error::new_spanned(input, "test_main!() takes no arguments"));
    }
    Ok(quote! {
        fn main() {
            ::lstest::cli::run()
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    // A glob import would also bring in this crate's `test` attribute and make `#[test]` ambiguous.
    use super::{ItemFn, TokenStream2, expand_test, expand_test_main};
    use quote::quote;

    fn expand(attr: TokenStream2, item: TokenStream2) -> syn::Result<String> {
        let item: ItemFn = syn::parse2(item)?;
        expand_test(attr, item).map(|tokens| tokens.to_string())
    }

    fn expand_err(attr: TokenStream2, item: TokenStream2) -> String {
        match expand(attr, item) {
            Ok(tokens) => panic!("expected an error, got: {tokens}"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_exports_prefixed_symbol_and_submits_case() {
        let out = expand(
            quote!(),
            quote! {
                fn adds(cx: &mut lstest::TestContext) {
                    lstest::check_eq!(cx, 1 + 2, 3);
                }
            },
        )
        .unwrap();

        assert!(out.contains(r#"export_name = "lst_t_adds""#), "{out}");
        assert!(out.contains("inventory :: submit !"), "{out}");
        assert!(out.contains(r#":: lstest :: TestCase :: new ("lst_t_adds" , adds)"#), "{out}");
    }

    #[test]
    fn test_missing_return_type_defaults_to_ok() {
        let out = expand(quote!(), quote!(fn empty(cx: &mut lstest::TestContext) {})).unwrap();
        assert!(out.contains("-> :: lstest :: TestStatus"), "{out}");
        assert!(out.contains(":: lstest :: TestStatus :: OK"), "{out}");
    }

    #[test]
    fn test_explicit_return_type_is_kept() {
        let out = expand(
            quote!(),
            quote! {
                fn early(cx: &mut lstest::TestContext) -> lstest::TestStatus {
                    lstest::TestStatus::STOP
                }
            },
        )
        .unwrap();
        assert!(!out.contains(":: lstest :: TestStatus :: OK"), "{out}");
        assert!(out.contains("-> lstest :: TestStatus"), "{out}");
    }

    #[test]
    fn test_context_parameter_is_injected() {
        let out = expand(quote!(), quote!(fn bare() {})).unwrap();
        assert!(out.contains("_cx : & mut :: lstest :: TestContext < '_ >"), "{out}");
    }

    #[test]
    fn test_reserved_prefixes_are_rejected() {
        let err = expand_err(quote!(), quote!(fn lst_thing() {}));
        assert!(err.contains("reserved prefix `lst_`"), "{err}");

        let err = expand_err(quote!(), quote!(fn ls_thing() {}));
        assert!(err.contains("reserved prefix `ls_`"), "{err}");
    }

    #[test]
    fn test_unsupported_signatures_are_rejected() {
        assert!(expand_err(quote!(), quote!(async fn a() {})).contains("async"));
        assert!(expand_err(quote!(), quote!(fn g<T>() {})).contains("generic"));
        assert!(
            expand_err(quote!(), quote!(fn two(a: &mut lstest::TestContext, b: u8) {}))
                .contains("at most one parameter")
        );
    }

    #[test]
    fn test_attribute_arguments_are_rejected() {
        let err = expand_err(quote!(skip), quote!(fn a() {}));
        assert!(err.contains("takes no arguments"), "{err}");
    }

    #[test]
    fn test_main_expands_to_cli_entry() {
        let out = expand_test_main(quote!()).unwrap().to_string();
        assert!(out.starts_with("fn main ()"), "{out}");
        assert!(out.contains(":: lstest :: cli :: run ()"), "{out}");
        assert!(expand_test_main(quote!(x)).is_err());
    }
}
