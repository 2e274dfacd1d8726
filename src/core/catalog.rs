use crate::domain::model::{Catalog, Cookie, Price};
use crate::utils::error::{Result, ShopError};
use std::io::Read;

const FIELD_COUNT: usize = 4;

/// Parses a catalog: header line discarded, then `id,title,description,price` per line.
///
/// Fields are taken positionally and verbatim. Quotes carry no meaning, so a
/// comma inside a description splits the field and the record is rejected.
pub fn parse_catalog<R: Read>(reader: R, currency_symbol: &str) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut cookies = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        if record.len() != FIELD_COUNT {
            return Err(ShopError::MalformedRecord {
                line,
                found: record.len(),
            });
        }

        // whitespace around the whole line is dropped, inner fields stay verbatim
        let id = record[0].trim_start();
        let price = Price::parse(record[3].trim_end(), currency_symbol);
        if let Price::Unparsed(raw) = &price {
            tracing::warn!("Cookie #{} has an unparseable price '{}'", id, raw);
        }

        let cookie = Cookie {
            id: id.to_string(),
            title: record[1].to_string(),
            description: record[2].to_string(),
            price,
        };
        tracing::debug!("Parsed line {}: #{} {}", line, cookie.id, cookie.title);
        cookies.push(cookie);
    }

    Ok(Catalog::new(cookies))
}

/// Linear scan by exact id; first match wins.
pub fn find<'c>(id: &str, catalog: &'c Catalog) -> Option<&'c Cookie> {
    catalog.cookies().iter().find(|cookie| cookie.id == id)
}
