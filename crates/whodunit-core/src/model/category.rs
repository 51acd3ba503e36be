use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Category {
    Suspect = 0,
    Weapon = 1,
    Location = 2,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Location];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Category::Suspect),
            1 => Some(Category::Weapon),
            2 => Some(Category::Location),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Location => "location",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn display_uses_lowercase_labels() {
        assert_eq!(Category::Suspect.to_string(), "suspect");
        assert_eq!(Category::Location.to_string(), "location");
    }

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Category::from_index(1), Some(Category::Weapon));
        assert_eq!(Category::from_index(3), None);
    }

    #[test]
    fn index_roundtrip() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(Category::from_index(i), Some(*category));
            assert_eq!(category.index(), i);
        }
    }
}
