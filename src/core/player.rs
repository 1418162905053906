//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! A session seats exactly two players. Seat 0 plays Red and moves first,
//! seat 1 plays Black.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;

/// One of the two seats at a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The seat that moves first (Red).
    pub const FIRST: Seat = Seat(0);
    /// The seat that moves second (Black).
    pub const SECOND: Seat = Seat(1);

    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::FIRST, Seat::SECOND];

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent's seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        Seat(1 - self.0)
    }

    /// The color played from this seat.
    #[must_use]
    pub const fn color(self) -> Color {
        match self.0 {
            0 => Color::Red,
            _ => Color::Black,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::{Seat, SeatMap};
///
/// let mut names = SeatMap::new(["alice", "bob"]);
/// assert_eq!(names[Seat::FIRST], "alice");
///
/// names[Seat::SECOND] = "carol";
/// assert_eq!(names[Seat::FIRST.other()], "carol");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create from values in seating order.
    pub fn new(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::FIRST), factory(Seat::SECOND)],
        }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Borrow both entries mutably, the given seat's first.
    pub fn pair_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if seat == Seat::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Consume the map, returning values in seating order.
    pub fn into_inner(self) -> [T; 2] {
        self.data
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
