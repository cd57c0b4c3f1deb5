use pinocchio::error::ProgramError;

use crate::{
    errors::HackathonError,
    instruction_layouts::CreateHackathonArgs,
    layouts::{
        has_account_discriminator, is_zeroed, HackathonView, RegistryView,
        HACKATHON_ACCOUNT_LEN, PUBKEY_LEN, TITLE_MAX_CHARS,
    },
};

/// Stores a new hackathon under the registry's next id and advances the
/// counter. The attached value becomes the escrowed prize.
pub fn process_anchor_bytes(
    caller_pubkey: [u8; PUBKEY_LEN],
    current_slot: u64,
    hackathon_bump: u8,
    registry_account_data: &mut [u8],
    hackathon_account_data: &mut [u8],
    ix_data: &[u8],
) -> Result<HackathonView, ProgramError> {
    let args = CreateHackathonArgs::parse(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    if !has_account_discriminator(registry_account_data, "Registry") {
        return Err(ProgramError::InvalidAccountData);
    }
    let mut registry = RegistryView::read_from_account_data(registry_account_data)
        .map_err(|_| ProgramError::InvalidAccountData)?;

    if caller_pubkey != registry.owner {
        return Err(HackathonError::OwnerOnly.into());
    }
    if args.duration < registry.min_duration {
        return Err(HackathonError::DurationTooShort.into());
    }
    if args.title.chars().count() > TITLE_MAX_CHARS {
        return Err(HackathonError::TitleTooLong.into());
    }
    if hackathon_account_data.len() != HACKATHON_ACCOUNT_LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    if !is_zeroed(hackathon_account_data) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    let id = registry.last_hackathon_id;
    let deadline = u64::from(args.duration)
        .checked_add(current_slot)
        .ok_or(HackathonError::DeadlineOverflow)?;
    let next_id = id.checked_add(1).ok_or(HackathonError::IdSpaceExhausted)?;

    let hackathon = HackathonView::new(
        id,
        args.title,
        args.attached_lamports,
        args.hackathon_manager,
        deadline,
        hackathon_bump,
    )
    .map_err(|_| ProgramError::InvalidInstructionData)?;
    hackathon
        .write_to_account_data(hackathon_account_data)
        .map_err(|_| ProgramError::InvalidAccountData)?;

    registry.last_hackathon_id = next_id;
    registry
        .write_to_account_data(registry_account_data)
        .map_err(|_| ProgramError::InvalidAccountData)?;

    Ok(hackathon)
}
