use crate::error::{KeyGaError, KgResult};
use crate::geometry::{Geometry, Position, ALPHABET_LEN, LETTERS};
use strum_macros::{Display, EnumIter, EnumString};

/// Rank of an ASCII lowercase letter (`a` = 0), or `None` outside the alphabet.
#[inline(always)]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// A bijection from the 26 letters to the 26 catalog slots.
///
/// `slots[i]` is the catalog index holding letter `LETTERS[i]`. Every value in
/// `0..26` appears exactly once; constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    slots: [u8; ALPHABET_LEN],
}

impl Layout {
    /// `a` on slot 0, `b` on slot 1, ...
    pub fn identity() -> Self {
        let mut slots = [0u8; ALPHABET_LEN];
        for (i, s) in slots.iter_mut().enumerate() {
            *s = i as u8;
        }
        Self { slots }
    }

    pub fn from_slots(slots: [u8; ALPHABET_LEN]) -> KgResult<Self> {
        if !is_permutation(&slots) {
            return Err(KeyGaError::Layout(format!(
                "Slot sequence {:?} is not a permutation of 0..{}",
                slots, ALPHABET_LEN
            )));
        }
        Ok(Self { slots })
    }

    /// Operators that provably preserve the permutation build through here.
    pub(crate) fn from_slots_unchecked(slots: [u8; ALPHABET_LEN]) -> Self {
        debug_assert!(is_permutation(&slots));
        Self { slots }
    }

    /// Parses 26 letters given in catalog order (the letter printed on slot 0
    /// first), e.g. `"qwertyuiopasdfghjklzxcvbnm"` on the standard catalog.
    pub fn from_slot_letters(s: &str) -> KgResult<Self> {
        let chars: Vec<char> = s.trim().to_lowercase().chars().collect();
        if chars.len() != ALPHABET_LEN {
            return Err(KeyGaError::Layout(format!(
                "Expected {} letters, got {}",
                ALPHABET_LEN,
                chars.len()
            )));
        }

        let mut slots = [u8::MAX; ALPHABET_LEN];
        for (slot, &c) in chars.iter().enumerate() {
            let idx = letter_index(c)
                .ok_or_else(|| KeyGaError::Layout(format!("'{}' is not a letter a-z", c)))?;
            if slots[idx] != u8::MAX {
                return Err(KeyGaError::Layout(format!("Letter '{}' appears twice", c)));
            }
            slots[idx] = slot as u8;
        }
        Ok(Self { slots })
    }

    /// Inverse of [`Layout::from_slot_letters`].
    pub fn to_slot_letters(&self) -> String {
        let mut by_slot = [b' '; ALPHABET_LEN];
        for (letter, &slot) in self.slots.iter().enumerate() {
            by_slot[slot as usize] = LETTERS[letter];
        }
        by_slot.iter().map(|&b| b as char).collect()
    }

    #[inline(always)]
    pub fn slots(&self) -> &[u8; ALPHABET_LEN] {
        &self.slots
    }

    #[inline(always)]
    pub fn slot_of(&self, letter: usize) -> u8 {
        self.slots[letter]
    }

    pub fn position_of(&self, letter: usize, geom: &Geometry) -> Position {
        geom.position(self.slots[letter])
    }

    /// Returns a copy with the positions of two letters exchanged.
    pub fn with_swapped(&self, a: usize, b: usize) -> Self {
        let mut slots = self.slots;
        slots.swap(a, b);
        Self { slots }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::identity()
    }
}

pub fn is_permutation(slots: &[u8]) -> bool {
    if slots.len() != ALPHABET_LEN {
        return false;
    }
    let mut seen = [false; ALPHABET_LEN];
    for &s in slots {
        let s = s as usize;
        if s >= ALPHABET_LEN || seen[s] {
            return false;
        }
        seen[s] = true;
    }
    true
}

/// Reference layouts expressible on the 10/9/7 letter-only catalog.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Qwertz,
    Alphabetical,
}

impl KnownLayout {
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjklzxcvbnm",
            Self::Qwertz => "qwertzuiopasdfghjklyxcvbnm",
            Self::Alphabetical => "abcdefghijklmnopqrstuvwxyz",
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_slot_letters(self.get_str())
            .unwrap_or_else(|e| unreachable!("built-in layout {} is invalid: {}", self, e))
    }
}

pub fn get_all_layouts() -> Vec<(KnownLayout, Layout)> {
    use strum::IntoEnumIterator;
    KnownLayout::iter().map(|k| (k, k.layout())).collect()
}
