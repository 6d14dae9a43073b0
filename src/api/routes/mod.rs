pub mod brawlers;
pub mod clubs;
pub mod events;
pub mod health;
pub mod players;
pub mod rankings;
pub mod search;
