//! Account images and instruction encoders shared by the unit tests.

use crate::{
    anchor_compat::instruction_discriminator,
    layouts::{
        HackathonView, ParticipantView, RegistryView, WinnerPrizeView, HACKATHON_ACCOUNT_LEN,
        PARTICIPANT_ACCOUNT_LEN, REGISTRY_ACCOUNT_LEN, WINNER_PRIZE_ACCOUNT_LEN,
    },
};

pub const OWNER: [u8; 32] = [7u8; 32];
pub const MANAGER: [u8; 32] = [8u8; 32];
pub const ALICE: [u8; 32] = [10u8; 32];
pub const BOB: [u8; 32] = [11u8; 32];

pub fn registry_data(min_duration: u32, last_hackathon_id: u32, single_payout: bool) -> Vec<u8> {
    registry_data_with_bump(min_duration, last_hackathon_id, single_payout, 255)
}

pub fn registry_data_with_bump(
    min_duration: u32,
    last_hackathon_id: u32,
    single_payout: bool,
    bump: u8,
) -> Vec<u8> {
    let mut data = vec![0u8; REGISTRY_ACCOUNT_LEN];
    RegistryView {
        owner: OWNER,
        min_duration,
        last_hackathon_id,
        single_payout,
        bump,
        rent_reserve: 1_000_000_000,
        reserved: [0u8; 16],
    }
    .write_to_account_data(&mut data)
    .unwrap();
    data
}

pub fn hackathon_data(id: u32, manager: [u8; 32], deadline: u64, prize_amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; HACKATHON_ACCOUNT_LEN];
    HackathonView::new(id, "Jam", prize_amount, manager, deadline, 254)
        .unwrap()
        .write_to_account_data(&mut data)
        .unwrap();
    data
}

pub fn participant_data(hackathon_id: u32, participant: [u8; 32]) -> Vec<u8> {
    let mut data = vec![0u8; PARTICIPANT_ACCOUNT_LEN];
    ParticipantView {
        hackathon_id,
        participant,
        registered: true,
        bump: 253,
    }
    .write_to_account_data(&mut data)
    .unwrap();
    data
}

pub fn prize_data(hackathon_id: u32, rank: u32, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; WINNER_PRIZE_ACCOUNT_LEN];
    WinnerPrizeView {
        hackathon_id,
        rank,
        amount,
        paid: false,
        payouts: 0,
        bump: 252,
    }
    .write_to_account_data(&mut data)
    .unwrap();
    data
}

pub fn init_registry_ix(min_duration: u32, single_payout: bool) -> Vec<u8> {
    let mut ix = Vec::new();
    ix.extend_from_slice(&instruction_discriminator("init_registry"));
    ix.extend_from_slice(&min_duration.to_le_bytes());
    ix.push(u8::from(single_payout));
    ix
}

pub fn create_hackathon_ix(title: &str, duration: u32, manager: [u8; 32], value: u64) -> Vec<u8> {
    let mut ix = Vec::new();
    ix.extend_from_slice(&instruction_discriminator("create_hackathon"));
    ix.extend_from_slice(&(title.len() as u32).to_le_bytes());
    ix.extend_from_slice(title.as_bytes());
    ix.extend_from_slice(&duration.to_le_bytes());
    ix.extend_from_slice(&manager);
    ix.extend_from_slice(&value.to_le_bytes());
    ix
}

pub fn set_winner_prize_ix(hackathon_id: u32, rank: u32, amount: u64, value: u64) -> Vec<u8> {
    let mut ix = Vec::new();
    ix.extend_from_slice(&instruction_discriminator("set_winner_prize"));
    ix.extend_from_slice(&hackathon_id.to_le_bytes());
    ix.extend_from_slice(&rank.to_le_bytes());
    ix.extend_from_slice(&amount.to_le_bytes());
    ix.extend_from_slice(&value.to_le_bytes());
    ix
}

pub fn register_ix(hackathon_id: u32, value: u64) -> Vec<u8> {
    let mut ix = Vec::new();
    ix.extend_from_slice(&instruction_discriminator("register"));
    ix.extend_from_slice(&hackathon_id.to_le_bytes());
    ix.extend_from_slice(&value.to_le_bytes());
    ix
}

pub fn announce_winner_ix(hackathon_id: u32, rank: u32, winner: [u8; 32], value: u64) -> Vec<u8> {
    let mut ix = Vec::new();
    ix.extend_from_slice(&instruction_discriminator("announce_winner"));
    ix.extend_from_slice(&hackathon_id.to_le_bytes());
    ix.extend_from_slice(&rank.to_le_bytes());
    ix.extend_from_slice(&winner);
    ix.extend_from_slice(&value.to_le_bytes());
    ix
}

pub fn deposit_ix(value: u64) -> Vec<u8> {
    let mut ix = Vec::new();
    ix.extend_from_slice(&instruction_discriminator("deposit"));
    ix.extend_from_slice(&value.to_le_bytes());
    ix
}
