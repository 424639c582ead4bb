use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model struct with exactly three components.
///
/// The fields are made public, common derives are added, every type parameter
/// gets a `PhantomData` field and the model gains a `new` constructor plus
/// conversions from and to `Components` and `[Component; 3]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    });

    let mut type_params = vec![];
    for param in input.generics.params.iter() {
        match param {
            syn::GenericParam::Type(type_param) => type_params.push(type_param.ident.clone()),
            other => {
                return syn::Error::new_spanned(other, "only type parameters are supported")
                    .to_compile_error()
                    .into()
            }
        }
    }

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for ident in type_params.iter() {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            let field = match syn::Field::parse_named.parse2(quote! {
                #field_name: std::marker::PhantomData<#ident>
            }) {
                Ok(field) => field,
                Err(err) => return err.to_compile_error().into(),
            };
            named.named.push(field);
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color with the given components.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Return the components as a plain array.
            pub fn to_array(&self) -> [crate::color::Component; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<[crate::color::Component; 3]> for #struct_name #type_gen #where_clause {
            fn from(value: [crate::color::Component; 3]) -> Self {
                Self::new(value[0], value[1], value[2])
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
