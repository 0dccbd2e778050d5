pub mod geo_zero;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use geozero::error::GeozeroError;
use knn_graph::Coordinate;
use log::info;
use thiserror::Error;

use geo_zero::CoordinateWriter;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid coordinate json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid geojson: {0}")]
    GeoJson(#[from] GeozeroError),
    #[error("file type '.{0}' not supported, expected '.json' or '.geojson'")]
    UnsupportedExtension(String),
}

/// Reads a JSON array of `{"name", "latitude", "longitude"}` objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Coordinate>, InputError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads the named `Point` features of a GeoJSON document.
pub fn read_geojson<R: Read>(reader: R) -> Result<Vec<Coordinate>, InputError> {
    let mut writer = CoordinateWriter::default();
    geozero::geojson::read_geojson(reader, &mut writer)?;

    Ok(writer.into_coordinates())
}

/// Loads coordinates from `path`, choosing the format by file extension.
pub fn load_coordinates(path: &Path) -> Result<Vec<Coordinate>, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let read: fn(BufReader<File>) -> Result<Vec<Coordinate>, InputError> = match extension.as_str()
    {
        "json" => read_json,
        "geojson" => read_geojson,
        ext => return Err(InputError::UnsupportedExtension(ext.to_string())),
    };

    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let coordinates = read(BufReader::new(file))?;

    info!(
        "Loaded {} coordinates from '{}'",
        coordinates.len(),
        path.display()
    );

    Ok(coordinates)
}
