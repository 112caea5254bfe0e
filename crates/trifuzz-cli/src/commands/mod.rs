//! Command implementations.

pub mod arithmetic;
pub mod compare;
pub mod config;
pub mod mean;
pub mod sort;

pub use self::arithmetic::{execute_arithmetic, Operation};
pub use self::compare::execute_compare;
pub use self::config::execute_config;
pub use self::mean::execute_mean;
pub use self::sort::execute_sort;
