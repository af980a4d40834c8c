//! The stylized node tree and its rendering pass.

mod nesting;
mod node;

pub use nesting::{NestGuard, Nesting};
pub use node::{StringifyOptions, Stylized};
