//! Turning a transcript into an [`Intent`].
//!
//! The pipeline is `normalize` → `classify`, with `classify` delegating move-shaped text to
//! `extract`. Everything here is a pure function of the input string.

pub mod classify;
pub mod extract;
pub mod intent;
pub mod normalize;

pub use classify::{classify, matching_rule, Rule, RULES};
pub use extract::{coordinate_tokens, extract_move};
pub use intent::{ColorQuery, Intent};
pub use normalize::{normalize, Normalizer, HOMOPHONES};
