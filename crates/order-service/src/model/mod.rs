//! Pure data structures: the menu [`Catalog`] and the [`Order`] entity managed by the order
//! actor.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
