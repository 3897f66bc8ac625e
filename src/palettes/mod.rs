//!
//! The built-in deluxe palettes.
//!
//! Each module has the single colors as constants and the
//! complete palette as `DELUXE<n>`.
//!
pub mod deluxe08;
pub mod deluxe16;
pub mod deluxe32;
pub mod deluxe48;
pub mod deluxe64;

pub use deluxe08::DELUXE08;
pub use deluxe16::DELUXE16;
pub use deluxe32::DELUXE32;
pub use deluxe48::DELUXE48;
pub use deluxe64::DELUXE64;
