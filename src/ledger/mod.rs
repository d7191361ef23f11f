pub mod address;
pub mod hash;
pub mod index;
pub mod result_code;
pub mod timestamp;

pub use self::{address::AccountAddress, hash::Hash256, result_code::ResultCode};
