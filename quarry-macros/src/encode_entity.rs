use crate::{
    decode_column::{ColumnKind, DefaultDecoded},
    decode_table::TableMetadata,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

pub(crate) fn encode_entity(table: &TableMetadata) -> TokenStream {
    let name = &table.item.ident;
    let table_name = &table.name;
    let columns = table.columns.iter().filter_map(|c| {
        let ty = &c.ty;
        match c.kind {
            ColumnKind::Column => {
                let field = c.ident.unraw().to_string();
                let column = &c.name;
                let default = match &c.default {
                    DefaultDecoded::None => quote!(::quarry::DefaultValue::None),
                    DefaultDecoded::Auto => quote!(::quarry::DefaultValue::Auto),
                    DefaultDecoded::Literal(v) => quote!(::quarry::DefaultValue::Literal(#v)),
                };
                Some(quote! {
                    columns.push(::quarry::ColumnDef {
                        field: #field,
                        name: #column,
                        default: #default,
                    });
                })
            }
            ColumnKind::Flatten => Some(quote! {
                columns.extend_from_slice(<#ty as ::quarry::Entity>::columns());
            }),
            ColumnKind::Skip => None,
        }
    });
    let row = table.columns.iter().filter_map(|c| {
        let ident = &c.ident;
        match c.kind {
            ColumnKind::Column => Some(quote! {
                row.push(::quarry::AsValue::as_value(::std::clone::Clone::clone(&self.#ident)));
            }),
            ColumnKind::Flatten => Some(quote! {
                row.extend(::quarry::Entity::row(&self.#ident).into_vec());
            }),
            ColumnKind::Skip => None,
        }
    });
    let reads = table.columns.iter().map(|c| {
        let ident = &c.ident;
        let ty = &c.ty;
        let column = &c.name;
        match c.kind {
            ColumnKind::Column => quote! {
                let #ident = ::quarry::scan_column::<#ty, QuarryRowValues>(__quarry_values, #column)?;
            },
            ColumnKind::Flatten => quote! {
                let #ident = <#ty as ::quarry::Entity>::from_values(__quarry_values)?;
            },
            ColumnKind::Skip => quote! {
                let #ident: #ty = ::std::default::Default::default();
            },
        }
    });
    let idents = table.columns.iter().map(|c| &c.ident);
    quote! {
        impl ::quarry::Entity for #name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [::quarry::ColumnDef] {
                static COLUMNS: ::std::sync::LazyLock<::std::boxed::Box<[::quarry::ColumnDef]>> =
                    ::std::sync::LazyLock::new(|| {
                        #[allow(unused_mut)]
                        let mut columns = ::std::vec::Vec::new();
                        #(#columns)*
                        columns.into_boxed_slice()
                    });
                &COLUMNS
            }

            fn row(&self) -> ::quarry::Row {
                #[allow(unused_mut)]
                let mut row = ::std::vec::Vec::new();
                #(#row)*
                row.into_boxed_slice()
            }

            #[allow(unused_variables, non_snake_case)]
            fn from_values<QuarryRowValues: ::std::iter::Iterator<Item = ::quarry::Value>>(
                __quarry_values: &mut QuarryRowValues,
            ) -> ::quarry::Result<Self> {
                #(#reads)*
                ::std::result::Result::Ok(Self { #(#idents),* })
            }
        }
    }
}
