//! Call-local scratch memory for [`PrimeFixed`](crate::PrimeFixed).
//!
//! A [`ScratchOwned`] is allocated by the operation that needs it and dropped
//! when that operation returns; nothing is shared between calls. Typed
//! sub-buffers are carved from the front with [`ScratchOwned::take_slice`].
//! Batch inversion and FFT twiddle tables allocate here.
//!
//! [`FieldConfig::initial_memory`] is advisory: requests above it are served
//! anyway, logged and flagged by [`ScratchOwned::over_budget`].

use fieldkit_hal::config::FieldConfig;

pub(crate) struct ScratchOwned<const L: usize> {
    data: Vec<[u64; L]>,
    over_budget: bool,
}

impl<const L: usize> ScratchOwned<L> {
    /// Bytes taken by `len` elements.
    #[inline]
    pub(crate) fn bytes_of(len: usize) -> usize {
        len * std::mem::size_of::<[u64; L]>()
    }

    /// Zero-initialized room for `len` elements.
    pub(crate) fn alloc(config: &FieldConfig, len: usize) -> Self {
        let size: usize = Self::bytes_of(len);
        let over_budget: bool = size > config.initial_memory;
        if over_budget {
            tracing::debug!(
                requested = size,
                budget = config.initial_memory,
                "scratch request exceeds the configured working memory"
            );
        }
        Self {
            data: vec![[0u64; L]; len],
            over_budget,
        }
    }

    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.data.len()
    }

    /// Whether the allocation exceeded the configured budget.
    #[inline]
    pub(crate) fn over_budget(&self) -> bool {
        self.over_budget
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[[u64; L]] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [[u64; L]] {
        &mut self.data
    }

    /// Splits off the first `len` elements; the remainder stays available for
    /// further carving.
    pub(crate) fn take_slice(&mut self, len: usize) -> (&mut [[u64; L]], &mut [[u64; L]]) {
        assert!(
            len <= self.available(),
            "take_slice: requested {len} elements, {} available",
            self.available()
        );
        self.data.split_at_mut(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carve() {
        let mut scratch: ScratchOwned<2> = ScratchOwned::alloc(&FieldConfig::default(), 5);
        assert_eq!(scratch.available(), 5);
        assert_eq!(ScratchOwned::<2>::bytes_of(5), 80);
        let (a, rest) = scratch.take_slice(3);
        assert_eq!((a.len(), rest.len()), (3, 2));
        a[0] = [1, 2];
        rest[1] = [3, 4];
        assert!(a[1..].iter().all(|x| *x == [0, 0]));
        assert!(!scratch.over_budget());
    }

    #[test]
    fn budget_is_advisory() {
        let config: FieldConfig = FieldConfig::default().with_initial_memory(64 << 10);
        let scratch: ScratchOwned<4> = ScratchOwned::alloc(&config, 2048);
        assert!(!scratch.over_budget());
        let mut scratch: ScratchOwned<4> = ScratchOwned::alloc(&config, 2049);
        assert!(scratch.over_budget());
        assert_eq!(scratch.as_mut_slice().len(), 2049);
        assert!(scratch.as_slice().iter().all(|x| *x == [0u64; 4]));
    }

    #[test]
    #[should_panic]
    fn take_too_much() {
        let mut scratch: ScratchOwned<1> = ScratchOwned::alloc(&FieldConfig::default(), 2);
        let _ = scratch.take_slice(3);
    }
}
