//! TT Kernel Driver
//!
//! Builds the bundled sample kernels, prints their text and optionally
//! stores them in the kernel cache.

pub mod driver;
pub mod kernels;

pub use driver::{run, DriverError, Options};
pub use kernels::{sample, AnyKernel, Sample, SAMPLES};
