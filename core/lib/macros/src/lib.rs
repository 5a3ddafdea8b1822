use opcode_table_compiler::{compile, CompilerConfig, CompilerFailure, Dialect, Separators};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, LitBool, LitChar, LitInt, LitStr, Token,
};

/// Compiles an opcode specification while compiling the crate, and expands to the generated
/// lookup function and its `UnknownMnemonic` error type:
///
/// ```ignore
/// opcode_lookup!("
///     ADD  = 1
///     B_EQ = 34
/// ", width = 6, reverse = true);
///
/// lookup("B.EQ")      // => Ok(34)
/// lookup("XOR")       // => Err(UnknownMnemonic)
/// lookup_mnemonic(1)  // => Some("ADD")
/// ```
///
/// Options after the specification are `width = <int>`, `separator_from = <char>`,
/// `separator_to = <char>`, `function = <ident>`, `constants = <bool>`, `reverse = <bool>` and
/// `prefix = <string>`. Errors in the specification become compile errors.
#[proc_macro]
pub fn opcode_lookup(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LookupInput);

    let output = match compile(&input.spec.value(), &input.config) {
        Ok(o) => o,
        Err(e) => return failure_to_compile_error(&input.spec, e).into(),
    };

    match output.parse::<TokenStream2>() {
        Ok(tokens) => tokens.into(),
        Err(e) => syn::Error::new(input.spec.span(), format!("generated code did not tokenize: {e}"))
            .to_compile_error()
            .into(),
    }
}

struct LookupInput {
    spec: LitStr,
    config: CompilerConfig,
}

impl Parse for LookupInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let spec: LitStr = input.parse()?;
        let mut config = CompilerConfig::new(Dialect::Rust);
        let mut separators = Separators::default();

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            // Allow a trailing comma
            if input.is_empty() {
                break;
            }

            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match key.to_string().as_ref() {
                "width" => config.opcode_width_bits = input.parse::<LitInt>()?.base10_parse()?,
                "separator_from" => separators.from = input.parse::<LitChar>()?.value(),
                "separator_to" => separators.to = input.parse::<LitChar>()?.value(),
                "function" => config.function_name = input.parse::<Ident>()?.to_string(),
                "constants" => config.with_constants = input.parse::<LitBool>()?.value,
                "reverse" => config.with_reverse_lookup = input.parse::<LitBool>()?.value,
                "prefix" => config.constant_prefix = input.parse::<LitStr>()?.value(),
                other => return Err(syn::Error::new(key.span(), format!("unknown option `{other}`"))),
            }
        }

        config.separators = separators;
        Ok(Self { spec, config })
    }
}

/// Reports every error in the specification, each as its own compile error.
fn failure_to_compile_error(spec: &LitStr, failure: CompilerFailure) -> TokenStream2 {
    let span = spec.span();
    let errors = match failure {
        CompilerFailure::Config(e) => vec![syn::Error::new(Span::call_site(), e)],
        CompilerFailure::Compile(errors) => errors.into_iter()
            .map(|e| syn::Error::new(span, format!("line {}: {e}", e.location().line)))
            .collect(),
    };

    errors.into_iter().map(|e| e.to_compile_error()).collect()
}
