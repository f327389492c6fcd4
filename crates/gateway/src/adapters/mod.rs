//! Exchange adapters
//!
//! Adapters normalize exchange responses into the canonical kestrel-core
//! model. Transport, signing and pacing live with the caller.

pub mod independent_reserve;

pub use independent_reserve::IndependentReserveAdapter;
