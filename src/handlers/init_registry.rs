use pinocchio::error::ProgramError;

use crate::{
    instruction_layouts::InitRegistryArgs,
    layouts::{is_zeroed, RegistryView, FIRST_HACKATHON_ID, PUBKEY_LEN, REGISTRY_ACCOUNT_LEN},
};

pub fn process_anchor_bytes(
    owner_pubkey: [u8; PUBKEY_LEN],
    registry_bump: u8,
    rent_reserve: u64,
    registry_account_data: &mut [u8],
    ix_data: &[u8],
) -> Result<(), ProgramError> {
    let args = InitRegistryArgs::parse(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    if registry_account_data.len() != REGISTRY_ACCOUNT_LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    if !is_zeroed(registry_account_data) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    RegistryView {
        owner: owner_pubkey,
        min_duration: args.min_duration,
        last_hackathon_id: FIRST_HACKATHON_ID,
        single_payout: args.single_payout,
        bump: registry_bump,
        rent_reserve,
        reserved: [0u8; 16],
    }
    .write_to_account_data(registry_account_data)
    .map_err(|_| ProgramError::InvalidAccountData)?;

    Ok(())
}
