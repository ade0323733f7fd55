//! Procedural macros for the microtest framework
//!
//! This crate provides the `#[def_test]` attribute macro for marking test
//! functions. Tests are collected through a distributed slice and can be run
//! with `microtest::test_run()`.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, ItemFn};

/// Marks a function as a registered test.
///
/// # Example
///
/// ```ignore
/// use microtest::{def_test, expect};
///
/// #[def_test]
/// fn addition() {
///     let a = 2 + 2;
///     assert_eq!(a, 4);
/// }
///
/// #[def_test]
/// async fn delayed() -> microtest::TestResult {
///     expect(async { 10 }.await).to_be(10)?;
///     Ok(())
/// }
/// ```
///
/// The function may return nothing, `Result<(), E>` for any error type, or
/// be `async`; an async body is driven to completion on the framework's
/// runtime before the test settles.
///
/// # Attributes
/// - `#[def_test]` - Normal test
/// - `#[def_test(ignore)]` - Test will be skipped
/// - `#[def_test(should_panic)]` - Test passes only if the body panics
#[proc_macro_attribute]
pub fn def_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    // Parse attributes
    let attr_str = attr.to_string();
    let ignore = attr_str.contains("ignore");
    let should_panic = attr_str.contains("should_panic");

    let fn_name = &input.sig.ident;
    let fn_attrs = &input.attrs;
    let fn_stmts = &input.block.stmts;
    let fn_output = &input.sig.output;
    let is_async = input.sig.asyncness.is_some();

    // Generate a unique identifier for the test descriptor
    let descriptor_name = format_ident!(
        "__MICROTEST_DESCRIPTOR_{}",
        fn_name.to_string().to_uppercase()
    );

    // The original body becomes an inner function so its declared return
    // type keeps driving inference (`?` still works); the outer function is
    // the uniform `fn() -> TestResult` shape the registry stores.
    let test_fn = if is_async {
        quote! {
            #(#fn_attrs)*
            fn #fn_name() -> microtest::TestResult {
                async fn __body() #fn_output {
                    #(#fn_stmts)*
                }
                microtest::IntoOutcome::into_outcome(microtest::exec::block_on(__body()))
            }
        }
    } else {
        quote! {
            #(#fn_attrs)*
            fn #fn_name() -> microtest::TestResult {
                fn __body() #fn_output {
                    #(#fn_stmts)*
                }
                microtest::IntoOutcome::into_outcome(__body())
            }
        }
    };

    let ignore_val = ignore;
    let should_panic_val = should_panic;
    let fn_name_str = fn_name.to_string();

    let output = quote! {
        #test_fn

        #[microtest::linkme::distributed_slice(microtest::TEST_CASES)]
        #[linkme(crate = microtest::linkme)]
        #[allow(non_upper_case_globals)]
        static #descriptor_name: microtest::TestDescriptor = microtest::TestDescriptor::new(
            #fn_name_str,
            module_path!(),
            #fn_name,
            #should_panic_val,
            #ignore_val,
        );
    };

    output.into()
}
