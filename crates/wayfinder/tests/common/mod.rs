#![allow(dead_code)]

use std::path::PathBuf;

use knn_graph::{Coordinate, GraphBuilder, KnnGraph};
use wayfinder::input::load_coordinates;

pub fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../resources")
        .join(name)
}

pub fn cities() -> Vec<Coordinate> {
    load_coordinates(&resource("german_cities.json")).unwrap()
}

pub fn setup(neighbors: usize) -> KnnGraph {
    GraphBuilder::new()
        .coordinates(cities())
        .neighbors(neighbors)
        .build()
        .unwrap()
}
