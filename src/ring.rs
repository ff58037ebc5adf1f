//! Circular prize sequence with O(1) slot recycling.
//!
//! The ring owns every prize. During rotation the only mutation is moving
//! the front prize to the back ("recycling"), which preserves the prize
//! count, the identity set, and the cyclic order. Lookups by stable index
//! or by content are O(n).

use std::collections::VecDeque;

use crate::types::Prize;

/// Ordered, wrap-around sequence of prizes.
///
/// Invariant: never empty. The engine builder refuses zero-item sources, and
/// recycling neither creates nor destroys prizes.
#[derive(Debug)]
pub struct PrizeRing<T> {
    prizes: VecDeque<Prize<T>>,
}

impl<T> PrizeRing<T> {
    /// Build a ring from prizes in display order. Returns `None` when the
    /// input is empty so the non-empty invariant holds from birth.
    pub fn new(prizes: Vec<Prize<T>>) -> Option<Self> {
        if prizes.is_empty() {
            return None;
        }
        Some(Self {
            prizes: prizes.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// The prize currently occupying the front display slot.
    pub fn front(&self) -> &Prize<T> {
        &self.prizes[0]
    }

    /// The prize currently occupying the last display slot.
    pub fn back(&self) -> &Prize<T> {
        &self.prizes[self.prizes.len() - 1]
    }

    /// The prize at display position `pos` (0 = front).
    pub fn display(&self, pos: usize) -> &Prize<T> {
        &self.prizes[pos]
    }

    /// Prizes in current display order, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Prize<T>> {
        self.prizes.iter()
    }

    /// Current offset of the front prize (always `<= 0` during rotation).
    pub fn front_offset(&self) -> f64 {
        self.prizes[0].offset
    }

    /// Set the front prize's displacement from its nominal slot position.
    pub fn set_front_offset(&mut self, offset: f64) {
        self.prizes[0].offset = offset;
    }

    /// Move the front prize to the back and reset its offset to zero.
    ///
    /// The sole ring mutation during rotation.
    pub fn recycle_front(&mut self) {
        if let Some(mut prize) = self.prizes.pop_front() {
            prize.offset = 0.0;
            self.prizes.push_back(prize);
        }
    }

    /// Find a prize by its stable index.
    pub fn by_index(&self, index: usize) -> Option<&Prize<T>> {
        self.prizes.iter().find(|p| p.index == index)
    }

    /// Find a prize by content identity.
    pub fn by_content(&self, content: &T) -> Option<&Prize<T>>
    where
        T: PartialEq,
    {
        self.prizes.iter().find(|p| p.content == *content)
    }
}
