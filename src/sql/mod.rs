//! Safe SQL building for the entity tables: quoted identifiers, positional parameters.

mod builder;
mod params;
pub use builder::*;
pub use params::SqlValue;
