//! Growable bit-level storage for unsigned binary values.
//!
//! The store is a little-endian vector of 64-bit words: bit `i` lives in
//! word `i / 64` at position `i % 64`, so word 0 holds the least significant
//! bits. Trailing all-zero words are permitted and never affect semantics;
//! any bit beyond the allocated words reads as zero.

/// Width in bits of a single storage word.
pub(crate) const WORD_BITS: usize = 64;

/// A dynamically growing vector of bits, least significant first.
///
/// The arithmetic engine addresses values exclusively through this
/// interface; it never touches raw words apart from the named low-word
/// accessor.
#[derive(Clone, Debug)]
pub(crate) struct BitArray {
    words: Vec<u64>,
}

impl BitArray {
    /// Creates an all-zero store holding a single word.
    pub(crate) fn new() -> Self {
        BitArray { words: vec![0] }
    }

    /// Creates a store whose value is the given machine word.
    pub(crate) fn from_word(word: u64) -> Self {
        BitArray { words: vec![word] }
    }

    /// Grows the store so that word index `w` is addressable, doubling the
    /// allocation or satisfying the request, whichever is larger.
    fn grow(&mut self, w: usize) {
        let new_len = usize::max(self.words.len() * 2, w + 1);
        self.words.resize(new_len, 0);
    }

    /// Significant length: index of the highest set bit plus one, or 0 for
    /// the all-zero value.
    ///
    /// Recomputed on every call by scanning from the most significant stored
    /// word downward; mutation happens through bit writes, so nothing is
    /// cached.
    pub(crate) fn length(&self) -> usize {
        for (i, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                return (i + 1) * WORD_BITS - word.leading_zeros() as usize;
            }
        }
        0
    }

    /// Reads bit `i`; bits beyond the allocated words are zero. Never grows
    /// the store.
    pub(crate) fn get(&self, i: usize) -> bool {
        let w = i / WORD_BITS;
        match self.words.get(w) {
            Some(&word) => word & (1 << (i % WORD_BITS)) != 0,
            None => false,
        }
    }

    /// Writes bit `i`, growing the store if the index falls outside the
    /// current allocation. No other bit changes.
    pub(crate) fn set(&mut self, i: usize, bit: bool) {
        let w = i / WORD_BITS;
        if w >= self.words.len() {
            self.grow(w);
        }
        if bit {
            self.words[w] |= 1 << (i % WORD_BITS);
        } else {
            self.words[w] &= !(1 << (i % WORD_BITS));
        }
    }

    /// Shifts the whole value left by one bit (doubles it), carrying the
    /// overflow bit of each word into the next. Grows by one word when the
    /// top word's overflow bit would otherwise be lost.
    pub(crate) fn shift_left(&mut self) {
        let mut carry = 0u64;
        for word in &mut self.words {
            let next = *word >> (WORD_BITS - 1);
            *word = (*word << 1) | carry;
            carry = next;
        }
        if carry != 0 {
            self.words.push(carry);
        }
    }

    /// Shifts left by a full word width. Bit-identical to calling
    /// [`shift_left`](Self::shift_left) 64 times, in one move.
    pub(crate) fn shift_left_by_word(&mut self) {
        self.words.insert(0, 0);
    }

    /// Shifts left by `n` bits, taking word-sized strides while possible.
    pub(crate) fn shift_left_by(&mut self, n: usize) {
        let mut remaining = n;
        while remaining >= WORD_BITS {
            self.shift_left_by_word();
            remaining -= WORD_BITS;
        }
        for _ in 0..remaining {
            self.shift_left();
        }
    }

    /// Shifts the whole value right by one bit (halves it), carrying the
    /// low bit of each word into the high bit of the word below it.
    pub(crate) fn shift_right(&mut self) {
        let n = self.words.len();
        for i in 0..n {
            let carry = if i + 1 < n { self.words[i + 1] & 1 } else { 0 };
            self.words[i] = (self.words[i] >> 1) | (carry << (WORD_BITS - 1));
        }
    }

    /// Zeroes every word in place without reallocating.
    #[allow(dead_code)] // part of the store's contract; the engine builds fresh results instead
    pub(crate) fn clear(&mut self) {
        for word in &mut self.words {
            *word = 0;
        }
    }

    /// The lowest word, reinterpreted as a machine integer. Truncates: the
    /// caller must have established that the value fits in 64 bits.
    pub(crate) fn low_word(&self) -> u64 {
        self.words[0]
    }
}
