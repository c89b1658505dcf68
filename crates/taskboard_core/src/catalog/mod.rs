//! Static lookup tables backing the demo screens.

pub mod months;
pub mod users;
