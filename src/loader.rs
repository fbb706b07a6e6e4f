//! CSV loader for raw agricultural records.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::LoadError;
use crate::record::RawRecord;

/// Reads every data row of the CSV file at `path`, in file order.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when `path` does not exist,
/// [`LoadError::Io`] when it cannot be opened or read, and
/// [`LoadError::Shape`] when a row has a different number of fields than the
/// header.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = read_records(file).map_err(|err| attach_path(err, path))?;
    debug!(path = %path.display(), rows = records.len(), "Loaded CSV records");
    Ok(records)
}

/// Reads header-keyed records from any CSV byte source.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers().map_err(shape_or_csv)?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(shape_or_csv)?;
        records.push(zip_row(&headers, &row));
    }

    Ok(records)
}

fn zip_row(headers: &StringRecord, row: &StringRecord) -> RawRecord {
    headers.iter().zip(row.iter()).collect()
}

// Read failures after a successful open surface as csv errors.
fn attach_path(err: LoadError, path: &Path) -> LoadError {
    let LoadError::Csv(err) = err else {
        return err;
    };
    if !err.is_io_error() {
        return LoadError::Csv(err);
    }
    let source = match err.into_kind() {
        ErrorKind::Io(source) => source,
        kind => io::Error::other(format!("{kind:?}")),
    };
    LoadError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn shape_or_csv(err: csv::Error) -> LoadError {
    if let ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return LoadError::Shape {
            line: pos.as_ref().map(|p| p.line()).unwrap_or_default(),
            expected: *expected_len,
            found: *len,
        };
    }
    LoadError::Csv(err)
}
