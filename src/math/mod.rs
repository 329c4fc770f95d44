//! Dense matrix and vector helpers built on `ndarray`.
//!
//! Shape validation, augmentation and inverse-block extraction live in
//! `matrix`; norms and change measures live in `vector`.
pub mod matrix;
pub mod vector;

pub use matrix::{augment_column, ensure_len, ensure_square, extract_inv, make_aug, swap_rows};
pub use vector::{abs_diff_sum, norm_l2, residual_norm};
