use knn_graph::{GraphConstructionError, GraphError};
use thiserror::Error;

use input::InputError;

pub mod compare;
pub mod input;
pub mod report;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Graph(#[from] GraphConstructionError),
    #[error(transparent)]
    Lookup(#[from] GraphError),
}
