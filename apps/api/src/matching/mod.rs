//! Skill matching: normalization, alias families, per-posting scoring,
//! title-based adjustment and catalog ranking.

pub mod aliases;
pub mod handlers;
pub mod matcher;
pub mod normalize;
pub mod ranking;
pub mod scorer;
pub mod title_adjust;
