use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{LedgerError, Result};
use crate::model::data_point::DataPoint;

/// Name offered for the downloaded export.
pub const EXPORT_FILE_NAME: &str = "testing-roi-data.json";

const INDENT: &[u8] = b"  ";

/// Pretty-printed JSON array of the series, two-space indented, fields in
/// declaration order.
pub fn export_series(series: &[DataPoint]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_series(&mut out, series)?;
    Ok(out)
}

pub fn write_series<W: Write>(writer: W, series: &[DataPoint]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    series.serialize(&mut serializer)?;
    Ok(())
}

/// Reads back a document produced by [`export_series`].
pub fn parse_export(bytes: &[u8]) -> Result<Vec<DataPoint>> {
    serde_json::from_slice(bytes).map_err(LedgerError::MalformedSeries)
}
