use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No valid road nodes found")]
    NoRoadNodes,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("PBF error: {0}")]
    PbfError(#[from] osmpbf::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
