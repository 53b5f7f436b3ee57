//! Seats, teams, and per-seat data storage.
//!
//! ## PlayerId
//!
//! One of the four seats `A`, `B`, `C`, `D`, in turn order. Partners sit
//! opposite each other: `A`/`C` form team AC and `B`/`D` form team BD.
//!
//! ## Player
//!
//! A seat's hand plus the strategy currently driving it. The strategy tag
//! can change mid-match (see the Win hand-off in the turn state machine).
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` for O(1) access, indexable by
//! `PlayerId`. A `PlayerMap<Player>` is the arena strategies read from
//! instead of holding references to each other.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Index, IndexMut};

use super::hand::Hand;
use crate::strategy::StrategyKind;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// Seat identifier, 0-based in turn order.
///
/// Serializes as the seat letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const A: PlayerId = PlayerId(0);
    pub const B: PlayerId = PlayerId(1);
    pub const C: PlayerId = PlayerId(2);
    pub const D: PlayerId = PlayerId(3);

    /// Seat from a 0-based index. Returns `None` past the fourth seat.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PLAYER_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Seat from its letter (`'A'..='D'`, case-insensitive).
    #[must_use]
    pub fn from_name(name: char) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Self::from_index((upper as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat letter.
    #[must_use]
    pub const fn name(self) -> char {
        (b'A' + self.0) as char
    }

    #[must_use]
    pub const fn team(self) -> Team {
        if self.0 % 2 == 0 {
            Team::AC
        } else {
            Team::BD
        }
    }

    /// The partner sitting opposite.
    #[must_use]
    pub const fn teammate(self) -> Self {
        Self((self.0 + 2) % PLAYER_COUNT as u8)
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Both members of the other team, in turn order after this seat.
    #[must_use]
    pub const fn opponents(self) -> [Self; 2] {
        [self.next(), self.next().teammate()]
    }

    /// Iterate over all seats in turn order.
    ///
    /// ```
    /// use domino_engine::core::PlayerId;
    ///
    /// let names: String = PlayerId::all().map(PlayerId::name).collect();
    /// assert_eq!(names, "ABCD");
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.name())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = char::deserialize(deserializer)?;
        Self::from_name(name).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Char(name), &"a seat letter A-D")
        })
    }
}

/// Team partition used for scoring and partner-aware strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Seats A and C.
    AC,
    /// Seats B and D.
    BD,
}

impl Team {
    /// Both members of the team.
    #[must_use]
    pub const fn members(self) -> [PlayerId; 2] {
        match self {
            Team::AC => [PlayerId::A, PlayerId::C],
            Team::BD => [PlayerId::B, PlayerId::D],
        }
    }

    /// The seat credited with a team victory on a locked table.
    #[must_use]
    pub const fn representative(self) -> PlayerId {
        self.members()[0]
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::AC => write!(f, "AC"),
            Team::BD => write!(f, "BD"),
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    strategy: StrategyKind,
    hand: Hand,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, strategy: StrategyKind, hand: Hand) -> Self {
        Self { id, strategy, hand }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn team(&self) -> Team {
        self.id.team()
    }

    #[must_use]
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub(crate) fn set_strategy(&mut self, strategy: StrategyKind) {
        self.strategy = strategy;
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// Per-seat data storage with O(1) access.
///
/// Serializes as a plain list in seat order; deserializing anything other
/// than four entries is an error.
///
/// ## Example
///
/// ```
/// use domino_engine::core::{PlayerId, PlayerMap};
///
/// let mut passes: PlayerMap<u32> = PlayerMap::with_value(0);
/// passes[PlayerId::C] += 1;
/// assert_eq!(passes[PlayerId::C], 1);
/// assert_eq!(passes[PlayerId::A], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Build from exactly one value per seat, in turn order.
    ///
    /// Returns `None` if `values` does not hold four entries.
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        (values.len() == PLAYER_COUNT).then_some(Self { data: values })
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T: Serialize> Serialize for PlayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        let len = data.len();
        Self::from_vec(data).ok_or_else(|| de::Error::invalid_length(len, &"one entry per seat"))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_names_and_order() {
        assert_eq!(PlayerId::A.name(), 'A');
        assert_eq!(PlayerId::D.name(), 'D');
        assert_eq!(format!("{}", PlayerId::B), "B");
        assert_eq!(PlayerId::D.next(), PlayerId::A);
        assert_eq!(PlayerId::from_index(2), Some(PlayerId::C));
        assert_eq!(PlayerId::from_index(4), None);
        assert_eq!(PlayerId::from_name('d'), Some(PlayerId::D));
        assert_eq!(PlayerId::from_name('E'), None);
        assert_eq!(PlayerId::from_name('1'), None);
    }

    #[test]
    fn test_player_id_serde() {
        assert_eq!(serde_json::to_string(&PlayerId::C).unwrap(), "\"C\"");
        let seat: PlayerId = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(seat, PlayerId::B);
        assert!(serde_json::from_str::<PlayerId>("\"Z\"").is_err());
    }

    #[test]
    fn test_teams() {
        assert_eq!(PlayerId::A.team(), Team::AC);
        assert_eq!(PlayerId::C.team(), Team::AC);
        assert_eq!(PlayerId::B.team(), Team::BD);
        assert_eq!(PlayerId::D.team(), Team::BD);

        assert_eq!(PlayerId::A.teammate(), PlayerId::C);
        assert_eq!(PlayerId::D.teammate(), PlayerId::B);
        assert_eq!(PlayerId::A.opponents(), [PlayerId::B, PlayerId::D]);
        assert_eq!(PlayerId::D.opponents(), [PlayerId::A, PlayerId::C]);

        assert_eq!(Team::BD.representative(), PlayerId::B);
    }

    #[test]
    fn test_player_map_new_and_index() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[PlayerId::A], 0);
        assert_eq!(map[PlayerId::D], 30);
    }

    #[test]
    fn test_player_map_from_vec() {
        assert!(PlayerMap::from_vec(vec![1, 2, 3]).is_none());
        let map = PlayerMap::from_vec(vec![1, 2, 3, 4]).unwrap();
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[3], (PlayerId::D, &4));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        assert_eq!(map, deserialized);

        assert!(serde_json::from_str::<PlayerMap<u32>>("[1,2]").is_err());
    }

    #[test]
    fn test_player_accessors() {
        let hand = Hand::new(vec![crate::core::Tile::new(1, 2)]);
        let mut player = Player::new(PlayerId::D, StrategyKind::Block, hand);

        assert_eq!(player.id(), PlayerId::D);
        assert_eq!(player.team(), Team::BD);
        assert_eq!(player.strategy(), StrategyKind::Block);
        assert_eq!(player.hand().len(), 1);

        player.set_strategy(StrategyKind::Win);
        assert_eq!(player.strategy(), StrategyKind::Win);
        player.hand_mut().remove(0).unwrap();
        assert!(player.hand().is_empty());
    }
}
