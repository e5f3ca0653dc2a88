//! Letter bag and player racks

use crate::field::Color;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Tile counts of a fresh bag, weighted by English letter frequency
pub static LETTER_DISTRIBUTION: [(char, usize); 26] = [
    ('E', 12), ('A', 9), ('I', 9), ('O', 8), ('N', 6), ('R', 6), ('T', 6),
    ('L', 4), ('S', 4), ('U', 4), ('D', 4),
    ('G', 3),
    ('B', 2), ('C', 2), ('M', 2), ('P', 2), ('F', 2), ('H', 2), ('V', 2), ('W', 2), ('Y', 2),
    ('K', 1), ('J', 1), ('X', 1), ('Q', 1), ('Z', 1),
];

/// Number of tiles in the game
pub const TOTAL_LETTERS: usize = 98;

/// Shared bag plus one rack per player.
///
/// Every tile is always in exactly one place: the bag, a rack, or (outside
/// this type) on the board.
#[derive(Clone, Debug)]
pub struct LetterPool {
    bag: Vec<char>,
    rack_black: Vec<char>,
    rack_white: Vec<char>,
    target_rack_size: usize,
    rng: ChaCha8Rng,
}

/// Serializable view of the racks and bag
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LetterSnapshot {
    pub black: Vec<char>,
    pub white: Vec<char>,
    pub bag: usize,
    pub rack_size: usize,
}

impl LetterPool {
    /// Full bag, empty racks, random seed
    pub fn new(target_rack_size: usize) -> Self {
        Self::with_rng(target_rack_size, ChaCha8Rng::from_entropy())
    }

    /// Full bag, empty racks, reproducible draws
    pub fn with_seed(target_rack_size: usize, seed: u64) -> Self {
        Self::with_rng(target_rack_size, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(target_rack_size: usize, rng: ChaCha8Rng) -> Self {
        let bag = LETTER_DISTRIBUTION
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count))
            .collect();
        Self {
            bag,
            rack_black: Vec::new(),
            rack_white: Vec::new(),
            target_rack_size,
            rng,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn rack(&self, color: Color) -> &[char] {
        match color {
            Color::Black => &self.rack_black,
            Color::White => &self.rack_white,
        }
    }

    fn rack_mut(&mut self, color: Color) -> &mut Vec<char> {
        match color {
            Color::Black => &mut self.rack_black,
            Color::White => &mut self.rack_white,
        }
    }

    pub fn bag(&self) -> &[char] {
        &self.bag
    }

    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    pub fn target_rack_size(&self) -> usize {
        self.target_rack_size
    }

    pub fn set_target_rack_size(&mut self, size: usize) {
        self.target_rack_size = size;
    }

    /// Tiles held by the bag and both racks
    pub fn total(&self) -> usize {
        self.bag.len() + self.rack_black.len() + self.rack_white.len()
    }

    pub fn rack_contains(&self, color: Color, letter: char) -> bool {
        self.rack(color).contains(&letter)
    }

    pub fn snapshot(&self) -> LetterSnapshot {
        LetterSnapshot {
            black: self.rack_black.clone(),
            white: self.rack_white.clone(),
            bag: self.bag.len(),
            rack_size: self.target_rack_size,
        }
    }

    // ========================================================================
    // DRAWING AND RETURNING
    // ========================================================================

    /// Move random tiles from the bag to a rack until it holds `target_size`
    /// tiles or the bag is empty. Returns how many were drawn.
    pub fn draw_to(&mut self, color: Color, target_size: usize) -> usize {
        let mut drawn = 0;
        while !self.bag.is_empty() && self.rack(color).len() < target_size {
            let index = self.rng.gen_range(0..self.bag.len());
            let letter = self.bag.swap_remove(index);
            self.rack_mut(color).push(letter);
            drawn += 1;
        }
        drawn
    }

    /// Fill a rack up to the configured size
    pub fn refill(&mut self, color: Color) -> usize {
        self.draw_to(color, self.target_rack_size)
    }

    pub fn return_to_bag(&mut self, letter: char) {
        self.bag.push(letter);
    }

    pub fn return_to_rack(&mut self, color: Color, letter: char) {
        self.rack_mut(color).push(letter);
    }

    /// Take one tile showing `letter` out of a rack. Tiles of the same letter
    /// are interchangeable, so the first match is taken.
    pub fn remove_from_rack(&mut self, color: Color, letter: char) -> bool {
        let rack = self.rack_mut(color);
        match rack.iter().position(|&l| l == letter) {
            Some(index) => {
                rack.remove(index);
                true
            }
            None => false,
        }
    }
}
