//! Energy/gradient kernels.
//!
//! Every kernel reads atom-major flat coordinates (`3 * n_atoms` values),
//! returns the term energy, and when handed a gradient buffer of the same
//! layout adds its contribution into it. Buffers are never cleared, so several
//! terms can share one buffer. Concurrent calls must not share a gradient
//! buffer; accumulate into separate buffers and sum them instead.
//!
//! Kernels do not validate their inputs. See [`crate::core::validation`].

pub mod bonds;
pub mod distance_matrix;

pub use bonds::{bond_hyper, bond_quad};
pub use distance_matrix::{dm_quad, dm_reci};
