use dom::{PropertyError, TreeError};
use dom_factory::FactoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page element #{0} is missing")]
    MissingElement(String),
    #[error("no click handler is wired to #{0}")]
    NoHandler(String),
    #[error("there is no player {0}")]
    NoSuchPlayer(u32),
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}
