//! CSV file reading into a record table.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use polars::prelude::*;
use tracing::{debug, info};

use capcase_model::{CellValue, RecordTable, Row};

use crate::error::{IngestError, Result};

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check that the file exists, is non-empty and is not UTF-16 encoded.
///
/// A UTF-8 BOM is accepted.
pub fn check_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::String(s) => CellValue::parse(s),
        AnyValue::StringOwned(s) => CellValue::parse(s.as_str()),
        other => CellValue::parse(&other.to_string()),
    }
}

/// Reads the header row.
///
/// The `csv` reader strips a UTF-8 BOM from the first field.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Column names for `headers` from `start` on; a blank header becomes
/// `Unnamed: {position}`.
fn column_names(headers: &[String], start: usize) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .skip(start)
        .map(|(position, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {position}")
            } else {
                name.clone()
            }
        })
        .collect()
}

/// Row indices held by a candidate index column, if every cell is one.
fn parse_index_column(column: &Column) -> Result<Option<Vec<usize>>> {
    let mut indices = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let raw = any_to_cell(column.get(idx)?).to_string();
        match raw.trim().parse::<usize>() {
            Ok(index) => indices.push(index),
            Err(_) => return Ok(None),
        }
    }
    Ok(Some(indices))
}

/// Convert a string-typed DataFrame into a record table.
///
/// `headers` names the DataFrame columns by position. Blank headers become
/// `Unnamed: {position}`. A blank first header whose cells are all
/// non-negative integers is the row-index column the writer produces: its
/// values become the row indices instead of a column. Otherwise row indices
/// are the 0-based row positions.
pub fn dataframe_to_table(df: &DataFrame, headers: &[String]) -> Result<RecordTable> {
    if headers.len() != df.width() {
        return Err(IngestError::HeaderMismatch {
            headers: headers.len(),
            columns: df.width(),
        });
    }

    let first_is_blank = headers.first().is_some_and(|name| name.trim().is_empty());
    let index = match df.get_columns().first() {
        Some(column) if first_is_blank => parse_index_column(column)?,
        _ => None,
    };
    let data_start = usize::from(index.is_some());

    let columns = column_names(headers, data_start);
    let data = &df.get_columns()[data_start..];
    let mut table = RecordTable::new(columns.clone());

    for idx in 0..df.height() {
        let row_index = index.as_ref().map_or(idx, |indices| indices[idx]);
        let mut row = Row::new(row_index);
        for (name, column) in columns.iter().zip(data) {
            row.set(name.clone(), any_to_cell(column.get(idx)?));
        }
        table.push_row(row);
    }
    if index.is_some() {
        debug!("read leading blank-named column as row index");
    }
    Ok(table)
}

/// Reads a delimited file with a header row fully into memory.
///
/// Every column is read as text (no schema inference) so that labels keep
/// their surrounding whitespace; cells are then classified by
/// [`CellValue::parse`]. Empty fields become [`CellValue::Missing`].
pub fn read_record_table(path: &Path) -> Result<RecordTable> {
    let start = Instant::now();
    check_readable(path)?;
    let headers = read_header(path)?;
    debug!(
        path = %path.display(),
        columns = headers.len(),
        "parsed header"
    );

    // The header is parsed above; polars reads the data rows under
    // positional names so blank or repeated header names cannot clash.
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_skip_rows(1)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Ok(RecordTable::new(column_names(&headers, 0)));
    }

    let table = dataframe_to_table(&df, &headers).map_err(|e| match e {
        IngestError::HeaderMismatch { .. } => {
            IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
        other => other,
    })?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "loaded source table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_record_table_basic() {
        let file = create_temp_csv("State,Sex,Number of White Male Victims\nTexas,Male,1\nOklahoma ,Female,0\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["State", "Sex", "Number of White Male Victims"]);
        assert_eq!(table.height(), 2);
        assert_eq!(
            table.rows()[1].get("State"),
            &CellValue::Text("Oklahoma ".to_string())
        );
        assert_eq!(
            table.rows()[0].get("Number of White Male Victims"),
            &CellValue::Integer(1)
        );
    }

    #[test]
    fn test_read_record_table_keeps_leading_whitespace() {
        let file = create_temp_csv("Sex\n Male\nFemale\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(
            table.rows()[0].get("Sex"),
            &CellValue::Text(" Male".to_string())
        );
    }

    #[test]
    fn test_read_record_table_empty_fields_are_missing() {
        let file = create_temp_csv("A,B\n1,\n,x\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.rows()[0].get("B"), &CellValue::Missing);
        assert_eq!(table.rows()[1].get("A"), &CellValue::Missing);
        assert_eq!(table.rows()[1].index, 1);
    }

    #[test]
    fn test_read_record_table_with_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["A", "B"]);
    }

    #[test]
    fn test_read_record_table_quoted_fields() {
        let file = create_temp_csv("State,Execution Date\n\"Oklahoma \",\"01/01/87\"\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(
            table.rows()[0].get("State"),
            &CellValue::Text("Oklahoma ".to_string())
        );
        assert_eq!(
            table.rows()[0].get("Execution Date"),
            &CellValue::Text("01/01/87".to_string())
        );
    }

    #[test]
    fn test_blank_first_header_is_row_index() {
        let file = create_temp_csv(",State,Year\n4,Texas,1987\n9,Ohio,\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["State", "Year"]);
        let indices: Vec<usize> = table.rows().iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![4, 9]);
        assert_eq!(table.rows()[0].get("Year"), &CellValue::Integer(1987));
        assert_eq!(table.rows()[1].get("Year"), &CellValue::Missing);
    }

    #[test]
    fn test_blank_header_elsewhere_is_named_by_position() {
        let file = create_temp_csv("State,,Year\nTexas,x,1987\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["State", "Unnamed: 1", "Year"]);
        assert_eq!(
            table.rows()[0].get("Unnamed: 1"),
            &CellValue::Text("x".to_string())
        );
        assert_eq!(table.rows()[0].index, 0);
    }

    #[test]
    fn test_blank_first_header_with_text_is_a_column() {
        let file = create_temp_csv(",State,Year\n4,Texas,1987\nabc,Ohio,1999\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["Unnamed: 0", "State", "Year"]);
        let indices: Vec<usize> = table.rows().iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(
            table.rows()[1].get("Unnamed: 0"),
            &CellValue::Text("abc".to_string())
        );
    }

    #[test]
    fn test_blank_first_header_with_missing_cell_is_a_column() {
        let file = create_temp_csv(",State\n3,Texas\n,Ohio\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.columns(), ["Unnamed: 0", "State"]);
        assert_eq!(table.rows()[0].get("Unnamed: 0"), &CellValue::Integer(3));
        assert_eq!(table.rows()[1].index, 1);
    }

    #[test]
    fn test_missing_file() {
        let result = read_record_table(Path::new("does/not/exist/original_data.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_record_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_utf16_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'A', 0x00]).unwrap();
        let result = check_readable(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
