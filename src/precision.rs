// MIT/Apache2 License

use core::{fmt, hash::Hash};

mod private {
    pub trait Sealed {}

    impl Sealed for super::HighP {}
    impl Sealed for super::MediumP {}
    impl Sealed for super::LowP {}
}

/// A storage qualifier carried alongside an [`Angle`](crate::Angle).
///
/// Angles never look at this parameter. It exists so that vector and matrix types that tune their
/// layout by precision can accept angles tagged the same way they are.
pub trait Precision:
    Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static + private::Sealed
{
}

/// High precision storage.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HighP;

/// Medium precision storage.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MediumP;

/// Low precision storage.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LowP;

impl Precision for HighP {}
impl Precision for MediumP {}
impl Precision for LowP {}

/// The precision used when none is specified.
pub type DefaultP = HighP;
