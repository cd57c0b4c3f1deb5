use pinocchio::error::ProgramError;

use crate::{
    accessors::{get_deadline, is_participant},
    errors::HackathonError,
    events::RegistryEvent,
    instruction_layouts::RegisterArgs,
    layouts::{ParticipantView, PARTICIPANT_ACCOUNT_LEN, PUBKEY_LEN},
};

pub fn process_anchor_bytes(
    caller_pubkey: [u8; PUBKEY_LEN],
    current_slot: u64,
    participant_bump: u8,
    hackathon_account_data: &[u8],
    participant_account_data: &mut [u8],
    ix_data: &[u8],
) -> Result<RegistryEvent, ProgramError> {
    let args = RegisterArgs::parse(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    // A missing hackathon has deadline 0 and is therefore always closed.
    let deadline = get_deadline(hackathon_account_data).map_err(|_| ProgramError::InvalidAccountData)?;
    if current_slot >= deadline {
        return Err(HackathonError::EventCompleted.into());
    }
    if participant_account_data.len() != PARTICIPANT_ACCOUNT_LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    if is_participant(participant_account_data).map_err(|_| ProgramError::InvalidAccountData)? {
        return Err(HackathonError::AlreadyRegistered.into());
    }

    ParticipantView {
        hackathon_id: args.hackathon_id,
        participant: caller_pubkey,
        registered: true,
        bump: participant_bump,
    }
    .write_to_account_data(participant_account_data)
    .map_err(|_| ProgramError::InvalidAccountData)?;

    Ok(RegistryEvent::ParticipantRegistered {
        hackathon_id: args.hackathon_id,
        participant: caller_pubkey,
    })
}
