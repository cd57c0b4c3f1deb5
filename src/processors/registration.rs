use pinocchio::error::ProgramError;

use crate::{
    anchor_compat::instruction_discriminator,
    events::RegistryEvent,
    handlers,
};

pub struct RegistrationProcessor<'a> {
    pub caller_pubkey: [u8; 32],
    pub current_slot: u64,
    pub participant_bump: u8,
    pub hackathon_account_data: &'a [u8],
    pub participant_account_data: &'a mut [u8],
}

impl<'a> RegistrationProcessor<'a> {
    pub fn process(&mut self, ix_data: &[u8]) -> Result<Option<RegistryEvent>, ProgramError> {
        let discriminator = ix_data
            .get(..8)
            .ok_or(ProgramError::InvalidInstructionData)?;

        if discriminator == instruction_discriminator("register") {
            return handlers::register::process_anchor_bytes(
                self.caller_pubkey,
                self.current_slot,
                self.participant_bump,
                self.hackathon_account_data,
                self.participant_account_data,
                ix_data,
            )
            .map(Some);
        }

        Err(ProgramError::InvalidInstructionData)
    }
}
