use core::fmt;
use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Stable index of a node slot inside an [`Arena`](super::arena::Arena).
///
/// Stored off-by-one in a `NonZero` so `Option<Handle>` (the absent child / absent parent link)
/// costs nothing extra. Handles order by slot, which lets callers sort and deduplicate sets of
/// nodes without touching the elements.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// Largest slot index a handle can address.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// The handle for `slot`, or `None` once `slot` is past [`Handle::MAX`].
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn try_new(slot: usize) -> Option<Self> {
        if slot > Self::MAX {
            return None;
        }
        match NonZero::new((slot + 1) as RawHandle) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.slot())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
impl Handle {
    pub(crate) fn new(slot: usize) -> Self {
        Self::try_new(slot).expect("`Handle::new()` - `slot` > `Handle::MAX`!")
    }
}
