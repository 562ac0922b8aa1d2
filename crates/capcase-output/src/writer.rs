//! CSV serialization of a record table.

use std::io;
use std::path::Path;
use std::time::Instant;

use csv::{Writer, WriterBuilder};
use tracing::info;

use capcase_model::RecordTable;

/// Writes the header and every row of `table` to `writer`.
///
/// The first field of each record is the row index; its header is empty.
/// Missing cells are written as empty fields.
pub fn write_records<W: io::Write>(table: &RecordTable, writer: &mut Writer<W>) -> csv::Result<()> {
    let mut header = Vec::with_capacity(table.width() + 1);
    header.push("");
    header.extend(table.columns().iter().map(String::as_str));
    writer.write_record(&header)?;

    let mut record = Vec::with_capacity(table.width() + 1);
    for row in table.rows() {
        record.clear();
        record.push(row.index.to_string());
        for column in table.columns() {
            record.push(row.get(column).to_string());
        }
        writer.write_record(&record)?;
    }
    Ok(())
}

/// Writes `table` to a CSV file at `path`, replacing any existing file.
pub fn write_record_table(table: &RecordTable, path: &Path) -> crate::Result<()> {
    let start = Instant::now();
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|source| crate::OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    write_records(table, &mut writer).map_err(|source| crate::OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| crate::OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "wrote cleaned table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use capcase_model::{CellValue, Row};

    #[test]
    fn writes_index_column_and_missing_as_empty() {
        let mut table = RecordTable::new(vec!["State".into(), "Execution Date".into()]);
        let mut row = Row::new(0);
        row.set("State", CellValue::parse("Oklahoma"));
        row.set("Execution Date", CellValue::Integer(1987));
        table.push_row(row);
        let mut row = Row::new(1);
        row.set("State", CellValue::parse("Texas, North"));
        row.set("Execution Date", CellValue::Missing);
        table.push_row(row);

        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        write_records(&table, &mut writer).unwrap();
        let bytes = writer.into_inner().unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            ",State,Execution Date\n0,Oklahoma,1987\n1,\"Texas, North\",\n"
        );
    }
}
