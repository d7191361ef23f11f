pub mod error;
pub mod ledger;
pub mod notification;
pub mod properties;

pub use crate::{
    error::Error,
    notification::{Direction, Notification, ResourceType, State},
    properties::HasAdditionalProperties,
};
