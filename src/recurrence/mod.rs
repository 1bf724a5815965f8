//! Recurrence plots and their quantification.

pub mod binarize;
pub mod rqa;

pub use binarize::{binarize, recurrence_eps, RecurrenceMatrix};
pub use rqa::{compute_rqa, diagonal_lines, vertical_lines, LineStatistics, RqaMetrics};

#[cfg(test)]
mod tests;
