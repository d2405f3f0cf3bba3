//! Pure data structures: the [`Cliente`] entity, its request DTOs and its key.

pub mod cliente;
pub mod dni;

pub use cliente::*;
pub use dni::*;
