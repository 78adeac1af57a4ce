pub mod add_player;
pub mod remove_player;
pub mod transfer;
