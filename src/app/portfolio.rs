use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{Reader, Writer};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::error::{ReportError, Result};
use crate::models::{EnrichedHolding, Holding};

const EXPECTED_HEADER: [&str; 3] = ["symbol", "units", "cost"];

pub const OUTPUT_HEADER: [&str; 8] = [
    "symbol",
    "units",
    "cost",
    "latest-price",
    "book_value",
    "market_value",
    "gain_loss",
    "change",
];

/// Reads holdings from a CSV file with header `symbol,units,cost`.
/// Tolerates a UTF-8 byte-order mark at the start of the file.
pub fn read_portfolio(path: &str) -> Result<Vec<Holding>> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.to_string(),
        },
        _ => ReportError::MalformedInput {
            path: path.to_string(),
            detail: err.to_string(),
        },
    })?;
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

    let mut reader = Reader::from_reader(contents.as_bytes());

    let headers = reader.headers().map_err(|err| ReportError::MalformedInput {
        path: path.to_string(),
        detail: err.to_string(),
    })?;
    if headers.iter().ne(EXPECTED_HEADER) {
        return Err(ReportError::MalformedInput {
            path: path.to_string(),
            detail: format!(
                "expected header 'symbol,units,cost', found '{}'",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let malformed = |row_idx: usize, detail: String| ReportError::MalformedInput {
        path: path.to_string(),
        detail: format!("row {}: {}", row_idx + 1, detail),
    };

    let mut holdings = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let rec = record.map_err(|err| malformed(row_idx, err.to_string()))?;

        if rec.len() != 3 {
            return Err(malformed(
                row_idx,
                format!("expected 3 fields, found {}", rec.len()),
            ));
        }

        let symbol = rec[0].trim().to_string();
        if symbol.is_empty() {
            return Err(malformed(row_idx, String::from("empty symbol")));
        }

        let units = rec[1]
            .trim()
            .parse::<i64>()
            .map_err(|err| malformed(row_idx, format!("bad units '{}': {}", &rec[1], err)))?;
        if units <= 0 {
            return Err(malformed(row_idx, format!("units must be positive, found {}", units)));
        }

        let cost = rec[2]
            .trim()
            .parse::<Decimal>()
            .map_err(|err| malformed(row_idx, format!("bad cost '{}': {}", &rec[2], err)))?;

        holdings.push(Holding::new(symbol, units, cost));
    }

    Ok(holdings)
}

/// Writes the enriched rows to the target path. The file is written to
/// a temp file in the target's directory first and renamed into place,
/// so a failed run never leaves a partial output file behind.
pub fn save_portfolio(rows: &[EnrichedHolding], path: &str) -> Result<()> {
    let write_err = |detail: String| ReportError::OutputWrite {
        path: path.to_string(),
        detail,
    };

    let dir = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .map_err(|err| write_err(err.to_string()))?;

    let mut writer = Writer::from_writer(tmp);
    if rows.is_empty() {
        // serialize() only emits the header alongside a first row
        writer
            .write_record(OUTPUT_HEADER)
            .map_err(|err| write_err(err.to_string()))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| write_err(err.to_string()))?;
    }

    let mut tmp = writer
        .into_inner()
        .map_err(|err| write_err(err.to_string()))?;
    tmp.flush().map_err(|err| write_err(err.to_string()))?;
    tmp.persist(path).map_err(|err| write_err(err.to_string()))?;

    Ok(())
}
