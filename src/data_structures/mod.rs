pub mod frontier;
pub mod weight_set;

pub use frontier::Frontier;
pub use weight_set::WeightSet;
