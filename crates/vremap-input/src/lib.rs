mod backend;
mod catalog;
mod error;
mod null;
mod platform;
mod resolver;
mod types;
mod virtual_platform;

pub use crate::backend::{Backend, BackendDevices};
pub use crate::catalog::{
    controller_characteristics, descriptor, resolve, ButtonDescriptor,
};
pub use crate::error::{InputError, Result};
pub use crate::null::NullPlatform;
pub use crate::platform::{DeviceHandle, InputPlatform};
pub use crate::resolver::DeviceResolver;
pub use crate::types::{
    Characteristic, Characteristics, Feature, Hand, LogicalButton, XrNode,
};
pub use crate::virtual_platform::VirtualPlatform;

/// Set of logical buttons packed into a single word.
pub type ButtonSet = vremap_bit_mask::Bitmask<LogicalButton>;
