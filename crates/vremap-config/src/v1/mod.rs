mod parse;
mod profile;

use thiserror::Error;

pub(crate) use profile::BindingsV1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid menu action: {0}")]
    InvalidMenuAction(String),
}
