pub mod honor;
pub mod player;

pub use honor::HonorEntry;
pub use player::{AwardHonor, Designation, Player, SelectionHonor};
