//! Hardware roles a kernel can target.
//!
//! Every kernel runs on exactly one of the three RISC-V cores of a Tensix
//! tile. The role is a type parameter on contexts, handles, statements and
//! kernels, so mixing roles is a compile error.

use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoleClass {
    DataMovement,
    Compute,
}

pub trait Role: sealed::Sealed + Copy + Debug + Default + 'static {
    /// Lower-case core name, used in cache file names and logs.
    const NAME: &'static str;
    const CLASS: RoleClass;
}

/// First data-movement core.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Brisc;

/// Second data-movement core.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ncrisc;

/// Compute core.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Crisc;

impl sealed::Sealed for Brisc {}
impl sealed::Sealed for Ncrisc {}
impl sealed::Sealed for Crisc {}

impl Role for Brisc {
    const NAME: &'static str = "brisc";
    const CLASS: RoleClass = RoleClass::DataMovement;
}

impl Role for Ncrisc {
    const NAME: &'static str = "ncrisc";
    const CLASS: RoleClass = RoleClass::DataMovement;
}

impl Role for Crisc {
    const NAME: &'static str = "crisc";
    const CLASS: RoleClass = RoleClass::Compute;
}
