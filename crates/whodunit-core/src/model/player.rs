use core::fmt;
use serde::{Deserialize, Serialize};

/// A stable position in turn order, fixed at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    pub const fn new(position: u8) -> Self {
        Self(position)
    }

    pub const fn from_index(index: usize) -> Self {
        Self(index as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// How the driver obtains reveal facts for a player.
///
/// The engine itself never dispatches on this: a `Local` player's reveals
/// arrive with the card identity attached, an `Observed` player's reveals
/// arrive as "showed one of". Both land in the same recording operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseSource {
    Local,
    Observed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    name: String,
    source: ResponseSource,
}

impl Player {
    pub fn local(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            source: ResponseSource::Local,
        }
    }

    pub fn observed(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            source: ResponseSource::Observed,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> ResponseSource {
        self.source
    }

    pub fn is_local(&self) -> bool {
        self.source == ResponseSource::Local
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    TooFewPlayers { count: usize },
    MisplacedSeat { expected: Seat, actual: Seat },
    DuplicateName(String),
    NoLocalPlayer,
    MultipleLocalPlayers,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::TooFewPlayers { count } => {
                write!(f, "a session needs at least two players, got {count}")
            }
            RosterError::MisplacedSeat { expected, actual } => {
                write!(f, "expected {expected} at this turn-order position, got {actual}")
            }
            RosterError::DuplicateName(name) => {
                write!(f, "player name '{name}' is used more than once")
            }
            RosterError::NoLocalPlayer => write!(f, "no player is marked as the local observer"),
            RosterError::MultipleLocalPlayers => {
                write!(f, "more than one player is marked as the local observer")
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// The turn-ordered player list, validated once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        if players.len() < 2 {
            return Err(RosterError::TooFewPlayers {
                count: players.len(),
            });
        }
        for (index, player) in players.iter().enumerate() {
            let expected = Seat::from_index(index);
            if player.seat() != expected {
                return Err(RosterError::MisplacedSeat {
                    expected,
                    actual: player.seat(),
                });
            }
            if players[..index].iter().any(|other| other.name() == player.name()) {
                return Err(RosterError::DuplicateName(player.name().to_string()));
            }
        }
        match players.iter().filter(|player| player.is_local()).count() {
            0 => Err(RosterError::NoLocalPlayer),
            1 => Ok(Self { players }),
            _ => Err(RosterError::MultipleLocalPlayers),
        }
    }

    /// Builds a roster from names in turn order, marking one as local.
    pub fn from_names(names: &[&str], local_index: usize) -> Result<Self, RosterError> {
        let players = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let seat = Seat::from_index(index);
                if index == local_index {
                    Player::local(seat, *name)
                } else {
                    Player::observed(seat, *name)
                }
            })
            .collect();
        Self::new(players)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat.index())
    }

    pub fn contains(&self, seat: Seat) -> bool {
        seat.index() < self.players.len()
    }

    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        (0..self.players.len()).map(Seat::from_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn local_seat(&self) -> Seat {
        self.players
            .iter()
            .find(|player| player.is_local())
            .map(Player::seat)
            .unwrap_or(Seat::new(0))
    }
}
