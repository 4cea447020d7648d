pub mod card;
pub mod cardvector;
pub mod hand;
pub mod stich;

pub use self::{card::*, cardvector::*, hand::*, stich::*};
