use pinocchio::error::ProgramError;

use crate::{
    anchor_compat::instruction_discriminator,
    events::RegistryEvent,
    handlers,
};

/// Routes the instructions that act on the registry singleton itself.
pub struct RegistryProcessor<'a> {
    pub caller_pubkey: [u8; 32],
    pub current_slot: u64,
    pub registry_bump: u8,
    pub rent_reserve: u64,
    pub registry_account_data: &'a mut [u8],
    pub hackathon_bump: u8,
    pub hackathon_account_data: Option<&'a mut [u8]>,
}

impl<'a> RegistryProcessor<'a> {
    pub fn process(&mut self, ix_data: &[u8]) -> Result<Option<RegistryEvent>, ProgramError> {
        let discriminator = ix_data
            .get(..8)
            .ok_or(ProgramError::InvalidInstructionData)?;

        if discriminator == instruction_discriminator("init_registry") {
            handlers::init_registry::process_anchor_bytes(
                self.caller_pubkey,
                self.registry_bump,
                self.rent_reserve,
                self.registry_account_data,
                ix_data,
            )?;
            return Ok(None);
        }
        if discriminator == instruction_discriminator("create_hackathon") {
            let hackathon_account_data = self
                .hackathon_account_data
                .as_deref_mut()
                .ok_or(ProgramError::NotEnoughAccountKeys)?;
            let hackathon = handlers::create_hackathon::process_anchor_bytes(
                self.caller_pubkey,
                self.current_slot,
                self.hackathon_bump,
                self.registry_account_data,
                hackathon_account_data,
                ix_data,
            )?;
            return Ok(Some(RegistryEvent::HackathonCreated(hackathon)));
        }
        if discriminator == instruction_discriminator("deposit") {
            return handlers::deposit::process_anchor_bytes(self.caller_pubkey, ix_data).map(Some);
        }

        Err(ProgramError::InvalidInstructionData)
    }
}
