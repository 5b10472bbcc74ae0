use std::fmt;

/// Set of cities still to visit, drawn from `1..n`.
///
/// City `c` lives in bit `c - 1`, so the raw bits of a set over `n` cities are
/// a dense index in `0..2^(n-1)` and can address a table column directly.
/// City 0 is never a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CitySet(u32);

impl CitySet {
    pub const EMPTY: CitySet = CitySet(0);

    /// Every city except the start: `{1, ..., n-1}`.
    #[inline]
    pub fn all(n: usize) -> Self {
        debug_assert!(n <= u32::BITS as usize + 1);
        if n <= 1 {
            return Self::EMPTY;
        }
        CitySet(u32::MAX >> (u32::BITS as usize - (n - 1)))
    }

    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        CitySet(bits)
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Column index of this set in a `[city][set]` table.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of distinct sets over `n` cities, i.e. the width of a table row.
    #[inline]
    pub fn count(n: usize) -> usize {
        if n <= 1 {
            1
        } else {
            1usize << (n - 1)
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub fn contains(self, city: usize) -> bool {
        city != 0 && city <= u32::BITS as usize && self.0 & Self::bit(city) != 0
    }

    #[inline(always)]
    pub fn with(self, city: usize) -> Self {
        CitySet(self.0 | Self::bit(city))
    }

    #[inline(always)]
    pub fn without(self, city: usize) -> Self {
        CitySet(self.0 & !Self::bit(city))
    }

    /// Members in ascending city order.
    pub fn iter(self) -> Cities {
        Cities(self.0)
    }

    #[inline(always)]
    fn bit(city: usize) -> u32 {
        debug_assert!(city >= 1 && city <= u32::BITS as usize);
        1 << (city - 1)
    }
}

impl fmt::Debug for CitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for CitySet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(CitySet::EMPTY, CitySet::with)
    }
}

impl IntoIterator for CitySet {
    type Item = usize;
    type IntoIter = Cities;

    fn into_iter(self) -> Cities {
        self.iter()
    }
}

/// Ascending iterator over the members of a [`CitySet`].
#[derive(Clone, Debug)]
pub struct Cities(u32);

impl Iterator for Cities {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let low = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(low + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cities {}
