//! Procedural macros for the aoc-runner library

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    FnArg, ImplItem, ImplItemFn, ItemImpl, Lit, LitStr, Pat, ReturnType, Type, parse_macro_input,
};

/// Parameter names a part callable may declare after its input handle
const BINDABLE: &[&str] = &["args", "kwargs", "paths", "logger"];

/// Attribute turning an impl block into a registered solution class
///
/// Every associated function named `part_<n>` becomes part `n` of the class.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2015)
/// - `problem`: Required. The problem number
/// - `class`: Optional. Class name, defaults to the type name
/// - `tags`: Optional. Array of string literals for filtering
///
/// # Signatures
///
/// The first parameter receives the input handle. Other parameters are bound
/// by name (`args`, `kwargs`, `paths`, `logger`; a leading underscore is
/// ignored). A part gets a logger only if it declares a `logger` parameter.
///
/// A return type named `Result<T, E>` is fallible: `E` is converted into
/// `SolveError::Failed`. Any other return type must implement `Debug`.
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{Input, Logger, solution};
///
/// pub struct Solution;
///
/// #[solution(year = 2015, problem = 1, tags = ["easy"])]
/// impl Solution {
///     fn part_1(input: &mut Input) -> Result<i64, std::io::Error> {
///         // ...
///     }
///
///     fn part_2(input: &mut Input, logger: &Logger) -> usize {
///         // ...
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn solution(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut args = SolutionArgs::default();
    let parser = syn::meta::parser(|meta| args.parse(meta));
    parse_macro_input!(attr with parser);

    let item_impl = parse_macro_input!(item as ItemImpl);

    match expand(args, item_impl) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Default)]
struct SolutionArgs {
    year: Option<u16>,
    problem: Option<u32>,
    class: Option<LitStr>,
    tags: Vec<LitStr>,
}

impl SolutionArgs {
    fn parse(&mut self, meta: syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("year") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit) => self.year = Some(lit.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "year must be an integer")),
            }
        } else if meta.path.is_ident("problem") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit) => self.problem = Some(lit.base10_parse()?),
                other => {
                    return Err(syn::Error::new_spanned(other, "problem must be an integer"));
                }
            }
        } else if meta.path.is_ident("class") {
            self.class = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                self.tags.push(content.parse()?);
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("expected `year`, `problem`, `class` or `tags`"));
        }
        Ok(())
    }
}

/// A `part_<n>` function and how to call it
struct PartSpec {
    number: u8,
    name: String,
    wrapper: syn::Ident,
    accepts_logger: bool,
}

fn expand(args: SolutionArgs, item_impl: ItemImpl) -> syn::Result<TokenStream2> {
    let year = args
        .year
        .ok_or_else(|| syn::Error::new(Span::call_site(), "missing required `year`"))?;
    let problem = args
        .problem
        .ok_or_else(|| syn::Error::new(Span::call_site(), "missing required `problem`"))?;

    if !item_impl.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item_impl.generics,
            "solution impl blocks cannot be generic",
        ));
    }
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[solution] goes on an inherent impl block",
        ));
    }

    let self_ty = &item_impl.self_ty;
    let class = match args.class {
        Some(lit) => lit.value(),
        None => type_name(self_ty)?,
    };

    let mut parts: Vec<PartSpec> = Vec::new();
    let mut wrappers = Vec::new();
    for item in &item_impl.items {
        let ImplItem::Fn(func) = item else { continue };
        let Some(number) = part_number(&func.sig.ident.to_string()) else {
            continue;
        };
        if let Some(previous) = parts.iter().find(|p| p.number == number) {
            return Err(syn::Error::new_spanned(
                &func.sig.ident,
                format!("part {} is already defined by `{}`", number, previous.name),
            ));
        }
        let (spec, wrapper) = wrap_part(func, number)?;
        parts.push(spec);
        wrappers.push(wrapper);
    }

    if parts.is_empty() {
        return Err(syn::Error::new_spanned(
            self_ty,
            "#[solution] needs at least one `part_<n>` function",
        ));
    }
    parts.sort_by_key(|p| p.number);

    let part_entries = parts.iter().map(|p| {
        let number = p.number;
        let name = &p.name;
        let accepts_logger = p.accepts_logger;
        let wrapper = &p.wrapper;
        quote! {
            ::aoc_runner::Part {
                number: #number,
                name: #name,
                accepts_logger: #accepts_logger,
                run: <#self_ty>::#wrapper,
            }
        }
    });
    let tags = &args.tags;

    Ok(quote! {
        #item_impl

        #[doc(hidden)]
        impl #self_ty {
            #(#wrappers)*
        }

        ::aoc_runner::inventory::submit! {
            ::aoc_runner::SolutionPlugin {
                year: #year,
                problem: #problem,
                class: #class,
                parts: &[#(#part_entries),*],
                tags: &[#(#tags),*],
            }
        }
    })
}

/// `part_12` -> 12
fn part_number(ident: &str) -> Option<u8> {
    let digits = ident.strip_prefix("part_")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn type_name(ty: &Type) -> syn::Result<String> {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .ok_or_else(|| syn::Error::new_spanned(ty, "cannot name this type")),
        _ => Err(syn::Error::new_spanned(
            ty,
            "cannot derive a class name from this type, pass `class = \"...\"`",
        )),
    }
}

/// Generate the uniform-signature wrapper for one part
fn wrap_part(func: &ImplItemFn, number: u8) -> syn::Result<(PartSpec, TokenStream2)> {
    let ident = &func.sig.ident;
    let wrapper = format_ident!("__aoc_{}", ident);

    let mut inputs = func.sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Typed(_)) => {}
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new_spanned(
                receiver,
                "part functions take no `self`",
            ));
        }
        None => {
            return Err(syn::Error::new_spanned(
                &func.sig,
                "part functions take the input handle as their first parameter",
            ));
        }
    }

    let mut call_args = vec![quote! { &mut *invocation.input }];
    let mut accepts_logger = false;
    for arg in inputs {
        let FnArg::Typed(typed) = arg else {
            return Err(syn::Error::new_spanned(arg, "unexpected `self`"));
        };
        let Pat::Ident(pat) = typed.pat.as_ref() else {
            return Err(syn::Error::new_spanned(
                &typed.pat,
                "part parameters must be plain identifiers",
            ));
        };
        let name = pat.ident.to_string();
        match name.trim_start_matches('_') {
            "args" => call_args.push(quote! { invocation.args }),
            "kwargs" => call_args.push(quote! { invocation.kwargs }),
            "paths" => call_args.push(quote! { invocation.paths }),
            "logger" => {
                accepts_logger = true;
                call_args.push(quote! { logger });
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &pat.ident,
                    format!(
                        "unknown part parameter `{}`, expected one of: {}",
                        name,
                        BINDABLE.join(", ")
                    ),
                ));
            }
        }
    }

    let take_logger = accepts_logger.then(|| {
        quote! {
            let logger = match invocation.logger {
                ::core::option::Option::Some(logger) => logger,
                ::core::option::Option::None => {
                    return ::core::result::Result::Err(::aoc_runner::SolveError::MissingLogger(#number));
                }
            };
        }
    });

    let convert = if returns_result(&func.sig.output) {
        quote! {
            let value = value.map_err(::aoc_runner::SolveError::failed)?;
        }
    } else {
        quote! {}
    };

    let tokens = quote! {
        #[doc(hidden)]
        fn #wrapper(
            invocation: &mut ::aoc_runner::Invocation<'_>,
        ) -> ::core::result::Result<::aoc_runner::PartValue, ::aoc_runner::SolveError> {
            #take_logger
            let value = Self::#ident(#(#call_args),*);
            #convert
            ::core::result::Result::Ok(::std::boxed::Box::new(value))
        }
    };

    Ok((
        PartSpec {
            number,
            name: ident.to_string(),
            wrapper,
            accepts_logger,
        },
        tokens,
    ))
}

/// Whether the declared return type is spelled `...Result<...>`
fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Result"),
            _ => false,
        },
    }
}
