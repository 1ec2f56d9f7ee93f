use crate::core::io::traits::PositionFile;
use crate::core::models::snapshot::Snapshot;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: SnapshotParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotParseErrorKind {
    #[error("Expected 4 fields (species x y z), found {found}")]
    WrongFieldCount { found: usize },
    #[error("Invalid {field} coordinate (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Non-finite {field} coordinate (value: '{value}')")]
    NonFiniteCoordinate { field: &'static str, value: String },
}

const COORDINATE_FIELDS: [&str; 3] = ["x", "y", "z"];

/// Plain-text snapshot: one particle per line, `species x y z`.
///
/// Fields may be separated by whitespace or commas. Blank lines and everything after a `#`
/// are ignored.
pub struct SnapshotFile;

impl SnapshotFile {
    fn parse_line(
        line: &str,
        line_num: usize,
    ) -> Result<Option<(&str, Point3<f64>)>, SnapshotError> {
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 4 {
            return Err(SnapshotError::Parse {
                line: line_num,
                kind: SnapshotParseErrorKind::WrongFieldCount {
                    found: fields.len(),
                },
            });
        }

        let mut coords = [0.0; 3];
        for (i, field) in COORDINATE_FIELDS.into_iter().enumerate() {
            let value = fields[i + 1];
            let coordinate: f64 = value.parse().map_err(|_| SnapshotError::Parse {
                line: line_num,
                kind: SnapshotParseErrorKind::InvalidFloat {
                    field,
                    value: value.to_string(),
                },
            })?;
            if !coordinate.is_finite() {
                return Err(SnapshotError::Parse {
                    line: line_num,
                    kind: SnapshotParseErrorKind::NonFiniteCoordinate {
                        field,
                        value: value.to_string(),
                    },
                });
            }
            coords[i] = coordinate;
        }

        Ok(Some((fields[0], Point3::new(coords[0], coords[1], coords[2]))))
    }
}

impl PositionFile for SnapshotFile {
    type Error = SnapshotError;

    fn read_from(reader: &mut impl BufRead) -> Result<Snapshot, Self::Error> {
        let mut snapshot = Snapshot::new();
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if let Some((species, position)) = Self::parse_line(&line, line_num + 1)? {
                snapshot.add_position(species, position);
            }
        }
        Ok(snapshot)
    }

    fn write_to(snapshot: &Snapshot, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "# species x y z")?;
        for species in snapshot.species() {
            for p in &species.positions {
                writeln!(writer, "{} {} {} {}", species.name, p.x, p.y, p.z)?;
            }
        }
        Ok(())
    }
}
