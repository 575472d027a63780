// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod point;
    pub mod variant;
    pub mod collection;
    pub mod traits;
}
