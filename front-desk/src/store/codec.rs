//! Line-oriented record codec
//!
//! Every persisted entity is a fixed-height block of consecutive lines, one
//! field per line, newline-terminated. There is no escaping: a field value
//! containing a newline would corrupt block alignment, which is a documented
//! limitation of the format.
//!
//! Decoding works on whole blocks. A block with an unparseable field is
//! discarded in its entirety and decoding resumes at the next block
//! boundary, so one bad record can never shift the records after it.

use rust_decimal::Decimal;
use shared::models::{EmployeeAccount, MenuItem, Product};
use std::str::FromStr;
use thiserror::Error;

/// Field-level decode failure. The whole containing block is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid {field}: {value:?}")]
    FieldParse { field: &'static str, value: String },
}

/// A fixed-height block of lines in a record file.
pub trait Record: Sized {
    /// Record kind, for diagnostics.
    const KIND: &'static str;
    /// Number of lines per record, the unit of skip on decode failure.
    const LINES: usize;

    /// Append this record's field lines to `out`, `Self::LINES` of them.
    fn encode(&self, out: &mut Vec<String>);

    /// Decode one block; `block.len() == Self::LINES` is guaranteed.
    fn decode(block: &[&str]) -> Result<Self, RecordError>;
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, RecordError> {
    raw.trim().parse().map_err(|_| RecordError::FieldParse {
        field,
        value: raw.to_string(),
    })
}

impl Record for MenuItem {
    const KIND: &'static str = "menu item";
    const LINES: usize = 4;

    fn encode(&self, out: &mut Vec<String>) {
        out.push(self.name.clone());
        out.push(self.ingredients.clone());
        out.push(self.price.to_string());
        out.push(self.prep_minutes.to_string());
    }

    fn decode(block: &[&str]) -> Result<Self, RecordError> {
        Ok(Self {
            name: block[0].to_string(),
            ingredients: block[1].to_string(),
            price: parse_field::<Decimal>("price", block[2])?,
            prep_minutes: parse_field("preparation time", block[3])?,
        })
    }
}

impl Record for Product {
    const KIND: &'static str = "product";
    const LINES: usize = 3;

    fn encode(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        out.push(self.name.clone());
        out.push(self.cost.to_string());
    }

    fn decode(block: &[&str]) -> Result<Self, RecordError> {
        Ok(Self {
            id: block[0].to_string(),
            name: block[1].to_string(),
            cost: parse_field::<Decimal>("cost", block[2])?,
        })
    }
}

impl Record for EmployeeAccount {
    const KIND: &'static str = "employee account";
    const LINES: usize = 2;

    fn encode(&self, out: &mut Vec<String>) {
        out.push(self.username.clone());
        out.push(self.password.clone());
    }

    fn decode(block: &[&str]) -> Result<Self, RecordError> {
        Ok(Self {
            username: block[0].to_string(),
            password: block[1].to_string(),
        })
    }
}

/// Decode a whole file's text into records, returning the records that
/// parsed and the number of discarded blocks.
pub(super) fn decode_blocks<T: Record>(text: &str) -> (Vec<T>, usize) {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    let mut records = Vec::new();
    let mut skipped = 0;

    for block in lines.chunks(T::LINES) {
        if block.len() < T::LINES {
            skipped += 1;
            tracing::warn!(
                kind = T::KIND,
                lines = block.len(),
                expected = T::LINES,
                "discarding truncated trailing record"
            );
            continue;
        }
        match T::decode(block) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                tracing::warn!(kind = T::KIND, error = %e, "discarding malformed record");
            }
        }
    }

    (records, skipped)
}

/// Encode records into the full file text, newline-terminated.
pub(super) fn encode_records<T: Record>(records: &[T]) -> String {
    let mut lines = Vec::with_capacity(records.len() * T::LINES);
    for record in records {
        record.encode(&mut lines);
    }
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn menu_records_round_trip() {
        let items = vec![
            MenuItem::new("Borscht", "beets, cabbage, beef", dec("12.5"), 40),
            MenuItem::new("Pelmeni", "dough, pork", dec("7.0"), 25),
        ];
        let text = encode_records(&items);
        let (decoded, skipped) = decode_blocks::<MenuItem>(&text);
        assert_eq!(decoded, items);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn bad_price_drops_only_its_block() {
        // Second record has a non-numeric price; the third must survive
        // because skipping happens on block boundaries.
        let text = "Soup\nwater, bones\n5.0\n15\n\
                    Bad Dish\nmystery\nnot-a-price\n10\n\
                    Tea\nleaves\n2.5\n5\n";
        let (decoded, skipped) = decode_blocks::<MenuItem>(text);
        assert_eq!(skipped, 1);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].name, "Soup");
        assert_eq!(decoded[1].name, "Tea");
        assert_eq!(decoded[1].price, dec("2.5"));
    }

    #[test]
    fn truncated_trailing_block_is_discarded() {
        let text = "p-1\nFlour\n3.20\np-2\nSugar\n";
        let (decoded, skipped) = decode_blocks::<Product>(text);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, "p-1");
        assert_eq!(decoded[0].cost, dec("3.20"));
        assert_eq!(skipped, 1);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let text = "alice\r\npw1\r\nbob\r\npw2\r\n";
        let (decoded, skipped) = decode_blocks::<EmployeeAccount>(text);
        assert_eq!(skipped, 0);
        assert_eq!(
            decoded,
            vec![
                EmployeeAccount::new("alice", "pw1"),
                EmployeeAccount::new("bob", "pw2"),
            ]
        );
    }

    #[test]
    fn empty_text_yields_no_records() {
        let (decoded, skipped) = decode_blocks::<Product>("");
        assert!(decoded.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn encode_of_nothing_is_empty() {
        assert_eq!(encode_records::<Product>(&[]), "");
    }
}
