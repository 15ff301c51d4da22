pub mod entities;
pub mod errors;
pub mod transaction;

pub use entities::*;
pub use errors::*;
pub use transaction::*;
