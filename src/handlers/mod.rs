pub mod announce_winner;
pub mod create_hackathon;
pub mod deposit;
pub mod init_registry;
pub mod register;
pub mod set_winner_prize;

#[cfg(test)]
pub(crate) mod fixtures;
