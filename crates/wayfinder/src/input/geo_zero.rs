use geozero::{ColumnValue, FeatureProcessor, GeomProcessor, PropertyProcessor, error::GeozeroError};
use knn_graph::Coordinate;
use log::{debug, warn};

/// Collects `Point` features carrying a `name` property as [`Coordinate`]s.
///
/// Features without a name or without a point geometry are skipped.
#[derive(Debug, Default)]
pub struct CoordinateWriter {
    coordinates: Vec<Coordinate>,
    name: Option<String>,
    position: Option<(f64, f64)>,
    in_point: bool,
    skipped: usize,
}

impl CoordinateWriter {
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        if self.skipped > 0 {
            warn!(
                "Skipped {} features without a name or point geometry",
                self.skipped
            );
        }

        self.coordinates
    }
}

impl FeatureProcessor for CoordinateWriter {
    fn feature_begin(&mut self, _idx: u64) -> geozero::error::Result<()> {
        self.name = None;
        self.position = None;
        self.in_point = false;

        Ok(())
    }

    fn feature_end(&mut self, idx: u64) -> geozero::error::Result<()> {
        match (self.name.take(), self.position.take()) {
            (Some(name), Some((latitude, longitude))) => {
                self.coordinates
                    .push(Coordinate::new(name, latitude, longitude));
            }
            _ => {
                debug!("feature {idx} has no name or point geometry");
                self.skipped += 1;
            }
        }

        Ok(())
    }
}

impl PropertyProcessor for CoordinateWriter {
    fn property(&mut self, _idx: usize, name: &str, value: &ColumnValue) -> geozero::error::Result<bool> {
        if name == "name" {
            match value {
                ColumnValue::String(s) => self.name = Some(s.to_string()),
                other => {
                    return Err(GeozeroError::Properties(format!(
                        "'name' must be a string, found {other:?}"
                    )));
                }
            }
        }

        Ok(false) // don't abort
    }
}

impl GeomProcessor for CoordinateWriter {
    fn xy(&mut self, x: f64, y: f64, _idx: usize) -> geozero::error::Result<()> {
        if self.in_point {
            // GeoJSON positions are longitude first.
            self.position = Some((y, x));
        }

        Ok(())
    }

    fn point_begin(&mut self, _idx: usize) -> geozero::error::Result<()> {
        self.in_point = true;
        Ok(())
    }

    fn point_end(&mut self, _idx: usize) -> geozero::error::Result<()> {
        self.in_point = false;
        Ok(())
    }
}
