mod decode_column;
mod decode_table;
mod encode_entity;

use decode_table::decode_table;
use encode_entity::encode_entity;
use proc_macro::TokenStream;
use syn::{ItemStruct, parse_macro_input};

/// Derives `quarry::Entity` for a struct with named fields.
///
/// On the struct: `#[quarry(table = "users")]` (defaults to the snake_case struct name).
/// On the fields:
/// - `#[quarry(name = "user_id")]` column name, defaults to the field name in snake_case;
/// - `#[quarry(auto)]` or `#[quarry(default = "auto")]` generated by the server, never written;
/// - `#[quarry(default = "now()")]` raw SQL written instead of the field value;
/// - `#[quarry(skip)]` not mapped, the type must implement `Default`;
/// - `#[quarry(flatten)]` embedded entity whose columns are mapped in place.
#[proc_macro_derive(Entity, attributes(quarry))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);
    match decode_table(item) {
        Ok(table) => encode_entity(&table).into(),
        Err(e) => e.to_compile_error().into(),
    }
}
