mod derive;

use proc_macro::TokenStream;

use crate::derive::handle_derive_bit;

/// Derives `vremap_bit_mask::Bitable` for a fieldless enum.
///
/// Variants get consecutive ordinals in declaration order, so the enum can
/// index fixed-size arrays and live inside a `Bitmask`.
#[proc_macro_derive(Bit)]
pub fn derive_bit(input: TokenStream) -> TokenStream {
    handle_derive_bit(input)
}
