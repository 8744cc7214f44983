//! LOBSTER interchange format writer.

use std::io::Write;

use serde::Serialize;

use crate::domain::{AppError, Item, Schema};

#[derive(Serialize)]
struct Document<'a> {
    data: &'a [Item],
    generator: &'a str,
    schema: &'static str,
    version: u32,
}

/// Write `items` as one interchange document of the given schema.
///
/// Output is pretty-printed with two-space indentation and ends with a newline.
pub fn write<W: Write>(
    out: &mut W,
    schema: Schema,
    generator: &str,
    items: &[Item],
) -> Result<(), AppError> {
    if let Some(item) = items.iter().find(|item| item.schema() != schema) {
        return Err(AppError::SchemaMismatch {
            tag: item.common().tag.to_text(),
            expected: schema,
        });
    }

    let document =
        Document { data: items, generator, schema: schema.name(), version: schema.version() };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    out.write_all(b"\n")?;
    Ok(())
}
