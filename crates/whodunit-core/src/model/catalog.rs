use crate::model::card::Card;
use crate::model::cardset::CardSet;
use crate::model::category::Category;
use core::fmt;

/// Immutable partition of the session's cards into the three categories.
///
/// Card ids are dense: suspects occupy the low ids, weapons follow, locations
/// come last. The catalog never changes after construction; every recording
/// operation validates its cards against it. Persistence goes through the
/// snapshot layer, which re-validates on the way back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCatalog {
    names: Vec<String>,
    // First id of the weapon block and of the location block.
    category_starts: [u8; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    EmptyCategory(Category),
    DuplicateCard(String),
    TooManyCards { count: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyCategory(category) => {
                write!(f, "the {category} category has no cards")
            }
            SetupError::DuplicateCard(name) => {
                write!(f, "card '{name}' appears more than once in the configuration")
            }
            SetupError::TooManyCards { count } => {
                write!(
                    f,
                    "configuration has {count} cards, more than the supported {}",
                    CardSet::MAX_CARDS
                )
            }
        }
    }
}

impl std::error::Error for SetupError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    UnknownCard(Card),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownCard(card) => {
                write!(f, "card {card} is not part of the configured deck")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl CardCatalog {
    pub fn new(
        suspects: &[&str],
        weapons: &[&str],
        locations: &[&str],
    ) -> Result<Self, SetupError> {
        if suspects.is_empty() {
            return Err(SetupError::EmptyCategory(Category::Suspect));
        }
        if weapons.is_empty() {
            return Err(SetupError::EmptyCategory(Category::Weapon));
        }
        if locations.is_empty() {
            return Err(SetupError::EmptyCategory(Category::Location));
        }

        let count = suspects.len() + weapons.len() + locations.len();
        if count > CardSet::MAX_CARDS {
            return Err(SetupError::TooManyCards { count });
        }

        let mut names = Vec::with_capacity(count);
        for name in suspects.iter().chain(weapons).chain(locations) {
            if names.iter().any(|existing| existing == name) {
                return Err(SetupError::DuplicateCard((*name).to_string()));
            }
            names.push((*name).to_string());
        }

        let category_starts = [
            suspects.len() as u8,
            (suspects.len() + weapons.len()) as u8,
        ];
        Ok(Self {
            names,
            category_starts,
        })
    }

    /// The classic configuration: six suspects, six weapons, nine locations.
    pub fn standard() -> Self {
        Self::new(
            &["Scarlett", "Mustard", "White", "Green", "Peacock", "Plum"],
            &["Candlestick", "Dagger", "Lead Pipe", "Revolver", "Rope", "Wrench"],
            &[
                "Ballroom",
                "Billiard Room",
                "Conservatory",
                "Dining Room",
                "Hall",
                "Kitchen",
                "Library",
                "Lounge",
                "Study",
            ],
        )
        .expect("standard configuration is valid")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        (card.id() as usize) < self.names.len()
    }

    pub fn category_of(&self, card: Card) -> Result<Category, CatalogError> {
        if !self.contains(card) {
            return Err(CatalogError::UnknownCard(card));
        }
        if card.id() < self.category_starts[0] {
            Ok(Category::Suspect)
        } else if card.id() < self.category_starts[1] {
            Ok(Category::Weapon)
        } else {
            Ok(Category::Location)
        }
    }

    pub fn name(&self, card: Card) -> Option<&str> {
        self.names.get(card.id() as usize).map(String::as_str)
    }

    pub fn card_named(&self, name: &str) -> Option<Card> {
        self.names
            .iter()
            .position(|existing| existing == name)
            .map(|index| Card::from_id(index as u8))
    }

    pub fn cards_in(&self, category: Category) -> CardSet {
        let (start, end) = self.category_bounds(category);
        (start..end).map(Card::from_id).collect()
    }

    pub fn all_cards(&self) -> CardSet {
        (0..self.names.len() as u8).map(Card::from_id).collect()
    }

    /// Display names of one category's cards, in id order.
    pub fn names_in(&self, category: Category) -> &[String] {
        let (start, end) = self.category_bounds(category);
        &self.names[start as usize..end as usize]
    }

    fn category_bounds(&self, category: Category) -> (u8, u8) {
        match category {
            Category::Suspect => (0, self.category_starts[0]),
            Category::Weapon => (self.category_starts[0], self.category_starts[1]),
            Category::Location => (self.category_starts[1], self.names.len() as u8),
        }
    }
}
