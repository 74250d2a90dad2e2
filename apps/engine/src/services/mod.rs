//! Service layer: the engine facade driven by a presentation layer.

pub mod round_engine;

pub use round_engine::RoundEngine;
