use serde::{Deserialize, Serialize};

/// Every event uses the same fixed seating chart: 50 S, 150 A, 300 B and
/// 500 C seats, numbered contiguously into sheet ids 1..=1000.
pub const TOTAL_SHEETS: i64 = 1000;

// Ord follows declaration order, so rank maps and sorted listings come out
// S, A, B, C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SheetRank {
    S,
    A,
    B,
    C,
}

impl SheetRank {
    /// Ranks in display order (best first).
    pub const ALL: [SheetRank; 4] = [SheetRank::S, SheetRank::A, SheetRank::B, SheetRank::C];

    /// Number of seats in this rank.
    pub fn capacity(&self) -> i64 {
        match self {
            SheetRank::S => 50,
            SheetRank::A => 150,
            SheetRank::B => 300,
            SheetRank::C => 500,
        }
    }

    /// Per-seat surcharge added on top of the event's base price.
    pub fn seat_price(&self) -> i64 {
        match self {
            SheetRank::S => 5000,
            SheetRank::A => 3000,
            SheetRank::B => 1000,
            SheetRank::C => 0,
        }
    }

    /// Sheet id of seat number 1 in this rank.
    pub fn first_id(&self) -> i64 {
        match self {
            SheetRank::S => 1,
            SheetRank::A => 51,
            SheetRank::B => 201,
            SheetRank::C => 501,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetRank::S => "S",
            SheetRank::A => "A",
            SheetRank::B => "B",
            SheetRank::C => "C",
        }
    }
}

impl std::fmt::Display for SheetRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SheetRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(SheetRank::S),
            "A" => Ok(SheetRank::A),
            "B" => Ok(SheetRank::B),
            "C" => Ok(SheetRank::C),
            _ => Err(format!("Invalid sheet rank: {}", s)),
        }
    }
}

/// A single seat, identified either by its global sheet id or by
/// (rank, seat number within the rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: i64,
    pub rank: SheetRank,
    pub num: i64,
}

impl Sheet {
    /// Resolve a global sheet id (1..=1000) to its rank and seat number.
    pub fn from_id(id: i64) -> Option<Sheet> {
        for rank in SheetRank::ALL {
            let first = rank.first_id();
            if id >= first && id < first + rank.capacity() {
                return Some(Sheet {
                    id,
                    rank,
                    num: id - first + 1,
                });
            }
        }
        None
    }

    /// Resolve a rank and 1-based seat number to the global sheet id.
    pub fn from_rank_num(rank: SheetRank, num: i64) -> Option<Sheet> {
        if num < 1 || num > rank.capacity() {
            return None;
        }
        Some(Sheet {
            id: rank.first_id() + num - 1,
            rank,
            num,
        })
    }
}
