// Draft domain: players, snake order, lineups, and the draft ledger.

pub mod ledger;
pub mod lineup;
pub mod order;
pub mod player;
