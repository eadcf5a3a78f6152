use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro for chain nodes that own their successor.
///
/// The struct must have a `link` field of type `OwnedLink<Self>` and may have
/// a `data` field holding the payload.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::chain_list };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let node_attr = attr.parse_args::<NodeAttribute>()?;
            let path = node_attr.crate_path;
            crate_path = quote! { #path };
            break;
        }
    }

    let chain_path = quote! { #crate_path::linked_list::chain };

    let (link_field, data_field) = split_fields(input)?;
    check_link_type(&link_field)?;

    let link_impl = quote! {
        impl #impl_generics #chain_path::traits::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<&Self::Target> {
                #chain_path::traits::Link::next(&self.link)
            }

            #[inline]
            fn next_mut(&mut self) -> Option<&mut Self::Target> {
                #chain_path::traits::Link::next_mut(&mut self.link)
            }
        }

        impl #impl_generics #chain_path::traits::Node for #struct_name #ty_generics #where_clause {
            #[inline]
            fn link(&self) -> &#chain_path::link::OwnedLink<Self> {
                &self.link
            }

            #[inline]
            fn link_mut(&mut self) -> &mut #chain_path::link::OwnedLink<Self> {
                &mut self.link
            }
        }
    };

    // Generate `NodeWithData` trait implementation if `data` field exists
    let data_impl = if let Some(data_field) = data_field {
        let data_type = &data_field.ty;
        quote! {
            impl #impl_generics #chain_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.data
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.data
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #link_impl
        #data_impl
    })
}

fn split_fields(input: &DeriveInput) -> syn::Result<(Field, Option<Field>)> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        ));
    };

    let mut link_field = None;
    let mut data_field = None;

    for field in fields.named.iter() {
        if let Some(ident) = &field.ident {
            match ident.to_string().as_str() {
                "link" => link_field = Some(field.clone()),
                "data" => data_field = Some(field.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "Unexpected field name: expected 'link' or 'data'",
                    ));
                }
            }
        }
    }

    let link_field = link_field.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'link'")
    })?;

    Ok((link_field, data_field))
}

fn check_link_type(link_field: &Field) -> syn::Result<()> {
    let link_type = &link_field.ty;

    let Type::Path(TypePath { path, .. }) = link_type else {
        return Err(syn::Error::new_spanned(link_type, "Field 'link' must be a Link type"));
    };

    match path.segments.last() {
        Some(segment) if segment.ident == "OwnedLink" => Ok(()),
        _ => Err(syn::Error::new_spanned(
            link_type,
            "Field 'link' must be an 'OwnedLink'",
        )),
    }
}
