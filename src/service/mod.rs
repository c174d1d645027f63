//! CrudService: generic CRUD using the safe SQL builder, plus request validation and password hashing.

mod crud;
pub mod password;
mod validation;
pub use crud::{CrudService, DUPLICATE_RECORD};
pub use validation::RequestValidator;
