use crate::decode_column::{ColumnMetadata, decode_column};
use convert_case::{Case, Casing};
use syn::{Fields, ItemStruct, LitStr, Result, ext::IdentExt};

pub(crate) struct TableMetadata {
    pub(crate) item: ItemStruct,
    pub(crate) name: String,
    pub(crate) columns: Vec<ColumnMetadata>,
}

pub(crate) fn decode_table(item: ItemStruct) -> Result<TableMetadata> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "Entity cannot be derived on generic structs",
        ));
    }
    let Fields::Named(..) = &item.fields else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "Entity can only be derived on structs with named fields",
        ));
    };
    let columns = item
        .fields
        .iter()
        .map(decode_column)
        .collect::<Result<Vec<_>>>()?;
    let mut name = item.ident.unraw().to_string().to_case(Case::Snake);
    for attr in item.attrs.iter().filter(|a| a.path().is_ident("quarry")) {
        attr.parse_nested_meta(|arg| {
            if arg.path.is_ident("table") {
                let value: LitStr = arg.value().map_err(|_| {
                    arg.error("Error while parsing `table`, use it like: `#[quarry(table = \"my_table\")]`")
                })?.parse()?;
                name = value.value();
                Ok(())
            } else {
                Err(arg.error("Unknown attribute inside quarry macro, expected `table`"))
            }
        })?;
    }
    Ok(TableMetadata {
        item,
        name,
        columns,
    })
}
