pub mod card;
pub mod cardset;
pub mod catalog;
pub mod category;
pub mod player;
pub mod suggestion;
