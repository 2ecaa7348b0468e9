use crate::{
    config::SourceConfig,
    model::{
        segment::{geometry_ops, AttributeValue, RawSegmentRecord},
        source::SourceSchema,
        RoadNetError,
    },
};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

/// a dataset of raw road segment records
pub trait SegmentSource {
    fn name(&self) -> &str;
    fn schema(&self) -> &SourceSchema;
    /// all records of the source in file order
    fn read(&self) -> Result<Vec<RawSegmentRecord>, RoadNetError>;
}

/// reads records from a CSV file (gzipped when the name ends in `.gz`) with
/// a header row and a WKT LINESTRING geometry column.
pub struct CsvSegmentSource {
    pub name: String,
    pub path: PathBuf,
    pub schema: SourceSchema,
    /// skip rows that cannot be read instead of failing the whole source
    pub ignore_row_errors: bool,
}

impl CsvSegmentSource {
    pub fn new(
        name: &str,
        path: &Path,
        schema: SourceSchema,
        ignore_row_errors: bool,
    ) -> CsvSegmentSource {
        CsvSegmentSource {
            name: String::from(name),
            path: path.to_path_buf(),
            schema,
            ignore_row_errors,
        }
    }

    pub fn from_config(conf: &SourceConfig, ignore_row_errors: bool) -> CsvSegmentSource {
        CsvSegmentSource::new(
            &conf.name,
            Path::new(&conf.path),
            conf.schema.clone(),
            ignore_row_errors,
        )
    }

    /// returns the error, or logs and swallows it when row errors are ignored
    fn row_error(&self, error: RoadNetError) -> Result<(), RoadNetError> {
        if self.ignore_row_errors {
            log::warn!("skipping row: {error}");
            Ok(())
        } else {
            Err(error)
        }
    }
}

impl SegmentSource for CsvSegmentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema(&self) -> &SourceSchema {
        &self.schema
    }

    fn read(&self) -> Result<Vec<RawSegmentRecord>, RoadNetError> {
        let filename = self.path.to_string_lossy().to_string();
        let f = File::open(&self.path).map_err(|e| RoadNetError::IoError(filename.clone(), e))?;
        let r: Box<dyn std::io::Read> = if filename.ends_with(".gz") {
            Box::new(BufReader::new(GzDecoder::new(f)))
        } else {
            Box::new(f)
        };
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(r);
        let headers = reader
            .headers()
            .map_err(|e| RoadNetError::CsvReadError(filename.clone(), e))?
            .clone();
        let geometry_field = &self.schema.fields.geometry;
        let geometry_index = headers
            .iter()
            .position(|h| h == geometry_field)
            .ok_or_else(|| {
                RoadNetError::SourceReadError(
                    self.name.clone(),
                    format!("{filename} is missing geometry column '{geometry_field}'"),
                )
            })?;

        let mut records = vec![];
        let mut skipped = 0;
        for (row, result) in reader.records().enumerate() {
            let csv_row = match result {
                Ok(r) => r,
                Err(e) => {
                    skipped += 1;
                    self.row_error(RoadNetError::CsvReadError(filename.clone(), e))?;
                    continue;
                }
            };
            let wkt = csv_row.get(geometry_index).unwrap_or_default();
            let geometry = match geometry_ops::csv_string_to_linestring(wkt) {
                Ok(g) => g,
                Err(e) => {
                    skipped += 1;
                    self.row_error(RoadNetError::InvalidRow(row, self.name.clone(), e))?;
                    continue;
                }
            };
            let attributes = headers
                .iter()
                .zip(csv_row.iter())
                .enumerate()
                .filter(|(idx, _)| *idx != geometry_index)
                .map(|(_, (h, v))| (String::from(h), AttributeValue::parse(v)))
                .collect::<HashMap<_, _>>();
            records.push(RawSegmentRecord::new(row, attributes, geometry));
        }
        if skipped > 0 {
            log::warn!(
                "source '{}': skipped {skipped} unreadable rows of {filename}",
                self.name
            );
        }
        log::info!("source '{}': read {} records", self.name, records.len());
        Ok(records)
    }
}
