//! Record loader for delimited employee files.
//!
//! Reads each input file in order, maps columns by the header row and
//! coerces the numeric fields. Loading stops at the first failure.

use crate::error::{LoadError, RowError};
use crate::models::EmployeeRecord;
use csv::StringRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options controlling how input files are read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Extension of files picked up when an input is a directory.
    pub extension: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            extension: "csv".to_string(),
        }
    }
}

impl TryFrom<&crate::config::LoaderConfig> for LoadOptions {
    type Error = anyhow::Error;

    fn try_from(config: &crate::config::LoaderConfig) -> anyhow::Result<Self> {
        Ok(Self {
            delimiter: config.delimiter_byte()?,
            extension: config.extension.clone(),
        })
    }
}

/// Load and merge records from all `paths`, in file order then row order.
pub fn load<P: AsRef<Path>>(
    paths: &[P],
    options: &LoadOptions,
) -> Result<Vec<EmployeeRecord>, LoadError> {
    let mut records = Vec::new();

    for path in paths {
        for file in expand_input(path.as_ref(), options)? {
            records.extend(read_file(&file, options)?);
        }
    }

    Ok(records)
}

/// Resolve one input path into the files it names.
///
/// A directory expands to the files directly inside it with the configured
/// extension, sorted by file name. Anything else is returned as-is and
/// checked when opened.
pub fn expand_input(path: &Path, options: &LoadOptions) -> Result<Vec<PathBuf>, LoadError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            source: RowError::Io(io::Error::from(e)),
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), &options.extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Read all records from a single file.
pub fn read_file(path: &Path, options: &LoadOptions) -> Result<Vec<EmployeeRecord>, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Parse {
            path: path.to_path_buf(),
            source: RowError::Io(e),
        },
    })?;

    parse_records(file, options.delimiter).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse delimited text whose first row is a header.
pub fn parse_records<R: Read>(input: R, delimiter: u8) -> Result<Vec<EmployeeRecord>, RowError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let columns = Columns::from_headers(reader.headers()?);
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(columns.parse_row(&row, line)?);
    }

    Ok(records)
}

/// Header positions of the known columns.
///
/// Required columns are only enforced once a data row exists, so a
/// header-only file loads as empty regardless of its columns.
#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    position: Option<usize>,
    completed_tasks: Option<usize>,
    performance: Option<usize>,
    skills: Option<usize>,
    team: Option<usize>,
    experience_years: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);

        Self {
            name: find("name"),
            position: find("position"),
            completed_tasks: find("completed_tasks"),
            performance: find("performance"),
            skills: find("skills"),
            team: find("team"),
            experience_years: find("experience_years"),
        }
    }

    fn parse_row(&self, row: &StringRecord, line: u64) -> Result<EmployeeRecord, RowError> {
        let text = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(str::to_string)
                .unwrap_or_default()
        };

        Ok(EmployeeRecord {
            name: text(self.name),
            position: required(row, self.position, "position", line)?.to_string(),
            completed_tasks: parse_int(row, self.completed_tasks, "completed_tasks", line)?,
            performance: parse_float(row, self.performance, "performance", line)?,
            skills: text(self.skills),
            team: text(self.team),
            experience_years: parse_int(row, self.experience_years, "experience_years", line)?,
        })
    }
}

fn required<'r>(
    row: &'r StringRecord,
    idx: Option<usize>,
    field: &'static str,
    line: u64,
) -> Result<&'r str, RowError> {
    idx.and_then(|i| row.get(i))
        .ok_or(RowError::MissingField { field, line })
}

fn parse_int(
    row: &StringRecord,
    idx: Option<usize>,
    field: &'static str,
    line: u64,
) -> Result<i64, RowError> {
    let value = required(row, idx, field, line)?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RowError::InvalidInteger {
            field,
            value: value.to_string(),
            line,
        })
}

fn parse_float(
    row: &StringRecord,
    idx: Option<usize>,
    field: &'static str,
    line: u64,
) -> Result<f64, RowError> {
    let value = required(row, idx, field, line)?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| RowError::InvalidFloat {
            field,
            value: value.to_string(),
            line,
        })
}
