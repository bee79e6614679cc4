//! Detection-accuracy evaluation engine for a visual-regression benchmark:
//! extracts structured defect candidates from free-text detector reports,
//! matches them against a ground-truth catalog, and scores precision and
//! recall per detector and rendering context.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod evaluate;
pub mod extract;
pub mod matching;
pub mod metrics;
pub mod model;
pub mod score;
pub mod util;
