//! Table writers for the CLI and other collaborators.

use crate::{error::GenResult, record::CallRecord};
use std::io::Write;

/// Header row plus one row per record, columns in `CALL_RECORD_COLUMNS` order.
pub fn write_csv<W: Write>(writer: W, records: &[CallRecord]) -> GenResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

/// One JSON object per line.
pub fn write_json_lines<W: Write>(mut writer: W, records: &[CallRecord]) -> GenResult<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
