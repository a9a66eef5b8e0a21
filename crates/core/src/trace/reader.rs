//! Canonical Trace Reader.
//!
//! Loads traces in the canonical two-column format produced by the trace
//! converters:
//!
//! ```text
//! page_id,is_write
//! 17,0
//! 42,1
//! ```
//!
//! Row order is logical time order. Rows with a non-integer page id, a write
//! flag other than `0`/`1`, or a missing column are skipped and counted rather
//! than aborting the load. The whole trace is materialized in memory, which
//! the offline-optimal policy needs for its future index.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::{Access, Trace};
use crate::common::{PageId, Result, SimError};

const PAGE_ID_COLUMN: &str = "page_id";
const IS_WRITE_COLUMN: &str = "is_write";

/// A loaded trace plus the number of rows that had to be skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceLoad {
    /// Accesses in logical time order.
    pub trace: Trace,
    /// Malformed rows that were dropped.
    pub skipped: usize,
}

/// Loads a canonical trace from a file.
///
/// # Errors
///
/// Returns [`SimError::TraceOpen`] if the file cannot be opened, otherwise
/// as [`read_trace`].
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<TraceLoad> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::TraceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let load = read_trace(file)?;
    debug!(
        path = %path.display(),
        accesses = load.trace.len(),
        skipped = load.skipped,
        "trace loaded"
    );
    Ok(load)
}

/// Loads a canonical trace from any reader.
///
/// # Errors
///
/// Returns [`SimError::TraceHeader`] if the header lacks a canonical column
/// and [`SimError::Csv`] if the underlying reader fails.
pub fn read_trace<R: Read>(input: R) -> Result<TraceLoad> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let (id_col, write_col) = locate_columns(&headers)?;

    let mut accesses = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match parse_row(&record, id_col, write_col) {
            Some(access) => accesses.push(access),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped malformed trace rows");
    }
    Ok(TraceLoad {
        trace: Trace::new(accesses),
        skipped,
    })
}

fn locate_columns(headers: &StringRecord) -> Result<(usize, usize)> {
    let find = |name: &str| headers.iter().position(|h| h == name);
    match (find(PAGE_ID_COLUMN), find(IS_WRITE_COLUMN)) {
        (Some(id), Some(write)) => Ok((id, write)),
        _ => Err(SimError::TraceHeader {
            found: headers.iter().map(str::to_string).collect(),
        }),
    }
}

fn parse_row(record: &StringRecord, id_col: usize, write_col: usize) -> Option<Access> {
    let page_id = record.get(id_col)?.parse::<PageId>().ok()?;
    let is_write = match record.get(write_col)? {
        "0" => false,
        "1" => true,
        _ => return None,
    };
    Some(Access { page_id, is_write })
}
