use pinocchio::error::ProgramError;

use crate::{
    anchor_compat::instruction_discriminator,
    events::RegistryEvent,
    handlers,
};

/// Routes the manager-only instructions that configure and release prizes.
pub struct PrizeProcessor<'a> {
    pub caller_pubkey: [u8; 32],
    pub custody_balance: u64,
    pub prize_bump: u8,
    pub registry_account_data: &'a [u8],
    pub hackathon_account_data: &'a [u8],
    pub participant_account_data: &'a [u8],
    pub prize_account_data: &'a mut [u8],
}

impl<'a> PrizeProcessor<'a> {
    pub fn process(&mut self, ix_data: &[u8]) -> Result<Option<RegistryEvent>, ProgramError> {
        let discriminator = ix_data
            .get(..8)
            .ok_or(ProgramError::InvalidInstructionData)?;

        if discriminator == instruction_discriminator("set_winner_prize") {
            handlers::set_winner_prize::process_anchor_bytes(
                self.caller_pubkey,
                self.prize_bump,
                self.hackathon_account_data,
                self.prize_account_data,
                ix_data,
            )?;
            return Ok(None);
        }
        if discriminator == instruction_discriminator("announce_winner") {
            return handlers::announce_winner::process_anchor_bytes(
                self.caller_pubkey,
                self.custody_balance,
                self.registry_account_data,
                self.hackathon_account_data,
                self.participant_account_data,
                self.prize_account_data,
                ix_data,
            )
            .map(Some);
        }

        Err(ProgramError::InvalidInstructionData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::fixtures::{
            announce_winner_ix, hackathon_data, participant_data, registry_data,
            set_winner_prize_ix, ALICE, MANAGER,
        },
        layouts::WINNER_PRIZE_ACCOUNT_LEN,
    };

    #[test]
    fn set_prize_then_announce_winner() {
        let registry = registry_data(10, 2, false);
        let hackathon = hackathon_data(1, MANAGER, 5_100, 1_000);
        let participant = participant_data(1, ALICE);
        let mut prize = vec![0u8; WINNER_PRIZE_ACCOUNT_LEN];

        let mut processor = PrizeProcessor {
            caller_pubkey: MANAGER,
            custody_balance: 1_000,
            prize_bump: 7,
            registry_account_data: &registry,
            hackathon_account_data: &hackathon,
            participant_account_data: &participant,
            prize_account_data: &mut prize,
        };

        assert_eq!(processor.process(&set_winner_prize_ix(1, 1, 600, 0)).unwrap(), None);
        assert_eq!(
            processor.process(&announce_winner_ix(1, 1, ALICE, 0)).unwrap(),
            Some(RegistryEvent::WinnerPrizePaid { hackathon_id: 1, winner: ALICE, rank: 1, amount: 600 })
        );
    }
}
