use crate::tree::ControlId;
use crate::types::{ConfigError, ControlKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("bind error: {0}")]
    Bind(#[from] BindError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("unknown control: {0:?}")]
    UnknownControl(ControlId),

    #[error("control already attached: {0:?}")]
    AlreadyAttached(ControlId),

    #[error("control not attached: {0:?}")]
    NotAttached(ControlId),

    #[error("cannot attach {child:?} beneath itself")]
    Cycle { parent: ControlId, child: ControlId },

    #[error("the root control cannot be attached, detached or destroyed")]
    Root,
}

#[derive(Error, Debug)]
pub enum BindError {
    #[error("control kind is excluded from interception: {0}")]
    Excluded(ControlKind),

    #[error("control has no native handle")]
    NullHandle,

    #[error("native binding failed: {0}")]
    Native(String),
}
