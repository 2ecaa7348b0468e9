use super::PipelineOutput;
use crate::model::{
    junction::JunctionPointSerializable, segment::RoadSegmentSerializable, RoadNetError,
};
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use std::{fs::File, path::Path};

pub trait NetworkWriter {
    /// writes the network dataset files into a directory, keeping files
    /// that already exist unless `overwrite` is set.
    fn write_network(
        &self,
        output_directory: &Path,
        split_network: bool,
        overwrite: bool,
    ) -> Result<(), RoadNetError>;
}

pub mod filenames {
    pub const SEGMENTS: &str = "segments.csv.gz";
    pub const JUNCTIONS: &str = "junctions.csv.gz";
    pub const ROADS_HIGHWAY: &str = "roads-hwy.csv.gz";
    pub const ROADS_LOCAL: &str = "roads-local.csv.gz";
    pub const RUN_SUMMARY: &str = "run-summary.json";
}

impl NetworkWriter for PipelineOutput {
    fn write_network(
        &self,
        output_directory: &Path,
        split_network: bool,
        overwrite: bool,
    ) -> Result<(), RoadNetError> {
        if !output_directory.is_dir() {
            std::fs::create_dir_all(output_directory).map_err(|e| {
                let dirname = output_directory.to_string_lossy().to_string();
                RoadNetError::IoError(dirname, e)
            })?;
        }

        let mut segment_writer = create_writer(output_directory, filenames::SEGMENTS, overwrite)?;
        let (mut hwy_writer, mut local_writer) = if split_network {
            (
                create_writer(output_directory, filenames::ROADS_HIGHWAY, overwrite)?,
                create_writer(output_directory, filenames::ROADS_LOCAL, overwrite)?,
            )
        } else {
            (None, None)
        };

        let s_iter = tqdm!(
            self.segments.iter(),
            total = self.segments.len(),
            desc = "write segments"
        );
        for segment in s_iter {
            let row = RoadSegmentSerializable::from(segment);
            if let Some(ref mut writer) = segment_writer {
                writer
                    .serialize(&row)
                    .map_err(|e| RoadNetError::CsvWriteError(String::from(filenames::SEGMENTS), e))?;
            }
            let (split_writer, filename) = if segment.is_limited_access() {
                (&mut hwy_writer, filenames::ROADS_HIGHWAY)
            } else {
                (&mut local_writer, filenames::ROADS_LOCAL)
            };
            if let Some(writer) = split_writer {
                writer
                    .serialize(&row)
                    .map_err(|e| RoadNetError::CsvWriteError(String::from(filename), e))?;
            }
        }
        eprintln!();

        let mut junction_writer = create_writer(output_directory, filenames::JUNCTIONS, overwrite)?;
        if let Some(ref mut writer) = junction_writer {
            for junction in self.junctions.iter() {
                writer
                    .serialize(JunctionPointSerializable::from(junction))
                    .map_err(|e| {
                        RoadNetError::CsvWriteError(String::from(filenames::JUNCTIONS), e)
                    })?;
            }
        }

        for (writer, filename) in [
            (segment_writer, filenames::SEGMENTS),
            (hwy_writer, filenames::ROADS_HIGHWAY),
            (local_writer, filenames::ROADS_LOCAL),
            (junction_writer, filenames::JUNCTIONS),
        ] {
            if let Some(writer) = writer {
                finish(writer, filename)?;
            }
        }

        let summary_path = output_directory.join(filenames::RUN_SUMMARY);
        if overwrite || !summary_path.exists() {
            let json = serde_json::to_string_pretty(&self.summary).map_err(|e| {
                RoadNetError::InternalError(format!("failure encoding run summary: {e}"))
            })?;
            std::fs::write(&summary_path, json).map_err(|e| {
                RoadNetError::IoError(String::from(filenames::RUN_SUMMARY), e)
            })?;
        }
        Ok(())
    }
}

/// opens a .csv.gz file writer, or `None` when the file exists and may not
/// be overwritten.
fn create_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, RoadNetError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        log::warn!("{filename} exists and overwrite is not set, skipping");
        return Ok(None);
    }
    let file = File::create(filepath).map_err(|e| RoadNetError::IoError(String::from(filename), e))?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(Some(writer))
}

/// flushes the csv buffer and completes the gzip stream
fn finish(writer: csv::Writer<GzEncoder<File>>, filename: &str) -> Result<(), RoadNetError> {
    let encoder = writer.into_inner().map_err(|e| {
        RoadNetError::InternalError(format!("failure flushing {filename}: {e}"))
    })?;
    encoder
        .finish()
        .map_err(|e| RoadNetError::IoError(String::from(filename), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RunSummary;
    use crate::model::{
        feature::{JunctionType, RoadRole, SpeedSource},
        junction::JunctionPoint,
        segment::RoadSegment,
    };
    use flate2::read::GzDecoder;
    use geo::{line_string, point};
    use std::io::Read;

    fn segment(id: &str, role: RoadRole) -> RoadSegment {
        RoadSegment {
            id: String::from(id),
            source: String::from("test"),
            source_class: String::from("S1200"),
            role,
            speed_mph: 45,
            speed_source: SpeedSource::Posted,
            urban_adjusted: false,
            travel_time_per_unit_length: 0.037 / 45.0,
            length: 10.0,
            travel_time_minutes: 10.0 * 0.037 / 45.0,
            in_urban_area: false,
            geometry: line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)],
        }
    }

    fn read_gz(path: &Path) -> String {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => panic!("{e}"),
        };
        let mut out = String::new();
        if let Err(e) = GzDecoder::new(file).read_to_string(&mut out) {
            panic!("{e}");
        }
        out
    }

    fn output() -> PipelineOutput {
        PipelineOutput {
            segments: vec![
                segment("VA_1", RoadRole::Highway),
                segment("VA_2", RoadRole::Ramp),
                segment("VA_3", RoadRole::Local),
            ],
            junctions: vec![JunctionPoint {
                id: String::from("RMPHWY_1"),
                location: point!(x: 10.0, y: 0.0),
                junction_type: JunctionType::RampToHighway,
                segment_id: String::from("VA_2"),
                needs_review: false,
            }],
            summary: RunSummary::default(),
        }
    }

    #[test]
    fn test_write_network_split() {
        let dir = std::env::temp_dir().join("roadnet_network_writer_test_split");
        let _ = std::fs::remove_dir_all(&dir);
        if let Err(e) = output().write_network(&dir, true, true) {
            panic!("{e}");
        }

        let segments = read_gz(&dir.join(filenames::SEGMENTS));
        let lines = segments.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id,source,source_class,role,rmp_hwy,speed_mph"));
        assert!(lines[1].starts_with("VA_1,test,S1200,highway,2,45,posted"));
        assert!(lines[1].contains("LINESTRING"));

        let hwy = read_gz(&dir.join(filenames::ROADS_HIGHWAY));
        assert_eq!(hwy.lines().count(), 3);
        let local = read_gz(&dir.join(filenames::ROADS_LOCAL));
        assert_eq!(local.lines().count(), 2);

        let junctions = read_gz(&dir.join(filenames::JUNCTIONS));
        let lines = junctions.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "id,junction_type,segment_id,needs_review,geometry");
        assert!(lines[1].starts_with("RMPHWY_1,ramp_to_highway,VA_2,false,POINT"));

        assert!(dir.join(filenames::RUN_SUMMARY).exists());
    }

    #[test]
    fn test_existing_files_are_kept() {
        let dir = std::env::temp_dir().join("roadnet_network_writer_test_keep");
        let _ = std::fs::remove_dir_all(&dir);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            panic!("{e}");
        }
        let summary_path = dir.join(filenames::RUN_SUMMARY);
        if let Err(e) = std::fs::write(&summary_path, "previous") {
            panic!("{e}");
        }
        if let Err(e) = output().write_network(&dir, false, false) {
            panic!("{e}");
        }
        assert_eq!(std::fs::read_to_string(&summary_path).unwrap_or_default(), "previous");
        assert!(dir.join(filenames::SEGMENTS).exists());
        assert!(!dir.join(filenames::ROADS_HIGHWAY).exists());
    }
}
