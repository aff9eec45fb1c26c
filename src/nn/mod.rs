// src/nn/mod.rs
// Loss abstractions and the concrete losses shipped with the crate.

pub mod loss; // Trait Loss + constructor alias
pub mod losses; // Declare losses module

// Re-export common items
pub use loss::{BuildFn, Loss};
pub use losses::l1::L1Loss;
pub use losses::mse::MseLoss;
pub use losses::weighted::WeightedSquaredError;
