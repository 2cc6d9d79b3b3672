use quarry_core::resolve_column_name;
use syn::{Field, Ident, LitStr, Result, Type, ext::IdentExt, spanned::Spanned};

/// How a field takes part in the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    /// Mapped onto one column.
    Column,
    /// Embedded entity, its columns are promoted into the parent.
    Flatten,
    /// Not mapped, filled with `Default::default()` when reading.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DefaultDecoded {
    None,
    Auto,
    Literal(String),
}

pub(crate) struct ColumnMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) name: String,
    pub(crate) default: DefaultDecoded,
    pub(crate) kind: ColumnKind,
}

pub(crate) fn decode_column(field: &Field) -> Result<ColumnMetadata> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new(
            field.span(),
            "Entity fields must be named, tuple structs are not supported",
        ));
    };
    let mut explicit = String::new();
    let mut default = DefaultDecoded::None;
    let mut kind = ColumnKind::Column;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("quarry")) {
        attr.parse_nested_meta(|arg| {
            if arg.path.is_ident("name") {
                let value: LitStr = arg.value().map_err(|_| {
                    arg.error("Error while parsing `name`, use it like: `#[quarry(name = \"my_column\")]`")
                })?.parse()?;
                explicit = value.value();
            } else if arg.path.is_ident("default") {
                let value: LitStr = arg.value().map_err(|_| {
                    arg.error("Error while parsing `default`, use it like: `#[quarry(default = \"now()\")]`")
                })?.parse()?;
                default = match value.value() {
                    v if v.is_empty() => DefaultDecoded::None,
                    v if v == "auto" => DefaultDecoded::Auto,
                    v => DefaultDecoded::Literal(v),
                };
            } else if arg.path.is_ident("auto") {
                default = DefaultDecoded::Auto;
            } else if arg.path.is_ident("skip") {
                kind = ColumnKind::Skip;
            } else if arg.path.is_ident("flatten") {
                kind = ColumnKind::Flatten;
            } else {
                return Err(arg.error(format!(
                    "Unknown attribute `{}` inside quarry macro",
                    arg.path.get_ident().map(Ident::to_string).unwrap_or_default()
                )));
            }
            Ok(())
        })?;
    }
    if kind != ColumnKind::Column && (!explicit.is_empty() || default != DefaultDecoded::None) {
        return Err(syn::Error::new(
            ident.span(),
            "`skip` and `flatten` fields cannot have a column name or a default",
        ));
    }
    Ok(ColumnMetadata {
        name: resolve_column_name(&ident.unraw().to_string(), &explicit),
        ident,
        ty: field.ty.clone(),
        default,
        kind,
    })
}
