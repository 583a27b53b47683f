use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields};

const MAX_VARIANTS: usize = 64;

pub(crate) fn handle_derive_bit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Error::new_spanned(name, "Bit can be derived only for enums")
            .to_compile_error()
            .into();
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Error::new_spanned(
                variant,
                "Bit supports only fieldless enum variants",
            )
            .to_compile_error()
            .into();
        }
        variants.push(&variant.ident);
    }

    if variants.len() > MAX_VARIANTS {
        return Error::new_spanned(name, "Bit supports at most 64 variants")
            .to_compile_error()
            .into();
    }

    let count = variants.len();
    let index_arms = variants.iter().enumerate().map(|(i, v)| {
        let idx = i as u32;
        quote! { #name::#v => #idx }
    });
    let from_arms = variants.iter().enumerate().map(|(i, v)| {
        let idx = i as u32;
        quote! { #idx => ::core::option::Option::Some(#name::#v) }
    });

    let expanded = quote! {
        impl ::vremap_bit_mask::Bitable for #name {
            const COUNT: usize = #count;

            #[inline]
            fn index(&self) -> u32 {
                match self { #( #index_arms, )* }
            }

            #[inline]
            fn from_index(index: u32) -> ::core::option::Option<Self> {
                match index {
                    #( #from_arms, )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
