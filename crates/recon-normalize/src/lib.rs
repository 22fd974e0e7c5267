//! Naming-convention normalization for configuration trees
//!
//! A desired-state tree is written in the caller's convention (snake_case
//! keys and values). Before it is compared with, or submitted to, a system
//! that speaks camelCase, the tree is run through normalization passes: a
//! path plus one of five transforms (camelize, map, upper, rename, expand).
//!
//! All transforms mutate the tree in place through `&mut ConfigTree`.

pub mod choices;
pub mod error;
pub mod keys;
pub mod plan;
pub mod transform;

pub use choices::ChoiceTables;
pub use error::{Error, Result};
pub use keys::keys_to_snake;
pub use plan::{NormalizationPass, Normalizer, PassSpec, TransformSpec};
pub use transform::{Transform, camelize, expand, map_values, rename, upper};
