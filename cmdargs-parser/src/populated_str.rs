use core::mem;

/// A string slice that is statically guaranteed to hold at least one `char`
#[derive(Debug)]
#[repr(transparent)]
pub struct PopulatedStr(str);

impl PopulatedStr {
    /// SAFETY: the string must not be empty
    #[inline(always)]
    pub unsafe fn new_unchecked(s: &str) -> &Self {
        debug_assert!(!s.is_empty());

        unsafe { mem::transmute(s) }
    }

    #[inline]
    pub fn new(s: &str) -> Option<&Self> {
        match s.is_empty() {
            true => None,
            // Safety: we just confirmed that the string isn't empty
            false => Some(unsafe { Self::new_unchecked(s) }),
        }
    }

    /// Split off the first `char`, returned as its own (non-empty) `str` so
    /// that it can be looked up alongside long names.
    #[inline]
    pub fn split_first(&self) -> (&str, &str) {
        match self.0.char_indices().nth(1) {
            Some((index, _)) => self.0.split_at(index),
            None => (&self.0, ""),
        }
    }
}
