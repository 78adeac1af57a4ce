pub mod entity;
pub mod ids;
pub mod ledger;
pub mod player;
pub mod transaction;
