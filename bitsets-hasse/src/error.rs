use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("hexagram labels need six members, {name:?} has {len}")]
    IChing { name: String, len: usize },

    #[error("cannot write or render the diagram: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
