use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `Message` for a type that is `PartialEq + Debug + Send + Sync`.
///
/// The trait has to be in scope at the derive site, the same way the hand
/// written impls in the core crate see it.
#[proc_macro_derive(Message)]
pub fn derive_message(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  let expanded = quote! {
      impl #impl_generics Message for #name #ty_generics #where_clause {
          fn eq_message(&self, other: &dyn Message) -> bool {
              other.as_any().downcast_ref::<Self>()
                  .map_or(false, |other| self == other)
          }

          fn as_any(&self) -> &(dyn std::any::Any + Send + Sync + 'static) {
              self
          }

          fn get_type_name(&self) -> String {
              std::any::type_name_of_val(self).to_string()
          }
      }
  };

  TokenStream::from(expanded)
}
