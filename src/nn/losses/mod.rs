// src/nn/losses/mod.rs

pub mod l1;
pub mod mse;
pub mod weighted;

pub use l1::L1Loss;
pub use mse::{MseLoss, Reduction};
pub use weighted::WeightedSquaredError;
