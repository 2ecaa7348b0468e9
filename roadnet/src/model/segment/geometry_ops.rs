//! WKT conversion and small geometry helpers shared by ingestion, the
//! junction synthesizer and the output writers.

use geo::{Euclidean, Length, LineString, Point};
use serde::Serializer;
use wkt::ToWkt;

/// parses a WKT LINESTRING as found in a CSV cell, with or without quotes.
pub fn csv_string_to_linestring(v: &str) -> Result<LineString<f64>, String> {
    let trimmed = v.trim();
    let cleaned_v = if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() > 1 {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    let wkt: wkt::Wkt<f64> = cleaned_v
        .parse()
        .map_err(|e| format!("failed to parse WKT string: {e}"))?;
    let linestring: LineString<f64> = wkt
        .try_into()
        .map_err(|e| format!("failed to parse WKT string as LINESTRING: {e}"))?;
    Ok(linestring)
}

/// uses a WKT geometry representation to serialize geo::LineString types
pub fn serialize_linestring<S>(row: &LineString<f64>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let wkt = row.to_wkt().to_string();
    s.serialize_str(&wkt)
}

/// uses a WKT geometry representation to serialize geo::Point types
pub fn serialize_point<S>(row: &Point<f64>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let wkt = row.to_wkt().to_string();
    s.serialize_str(&wkt)
}

/// first and last vertex of a line, `None` for empty geometries.
pub fn endpoints(linestring: &LineString<f64>) -> Option<(Point<f64>, Point<f64>)> {
    match (linestring.0.first(), linestring.0.last()) {
        (Some(a), Some(b)) => Some((Point::from(*a), Point::from(*b))),
        _ => None,
    }
}

/// planar length in the units of the coordinates
pub fn planar_length(linestring: &LineString<f64>) -> f64 {
    Euclidean.length(linestring)
}

/// squared distance between two points, used against squared tolerances
pub fn distance_2(a: &Point<f64>, b: &Point<f64>) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use geo::{line_string, point};

    #[test]
    fn deserialize_csv_linestring_quoted() {
        let wkt = "\"LINESTRING (0 0, 3 4)\"";
        let expected = line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0)];
        match super::csv_string_to_linestring(wkt) {
            Ok(result) => assert_eq!(result, expected),
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn deserialize_csv_point_is_rejected() {
        let result = super::csv_string_to_linestring("POINT (1 1)");
        assert!(result.is_err(), "a point is not a road segment geometry");
    }

    #[test]
    fn test_length_and_endpoints() {
        let ls = line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0), (x: 3.0, y: 10.0)];
        assert!((super::planar_length(&ls) - 11.0).abs() < 1e-9);
        let (a, b) = super::endpoints(&ls).expect("line has endpoints");
        assert_eq!(a, point!(x: 0.0, y: 0.0));
        assert_eq!(b, point!(x: 3.0, y: 10.0));
        assert!(super::endpoints(&geo::LineString::<f64>::new(vec![])).is_none());
    }
}
