use pinocchio::{
    AccountView, Address, ProgramResult,
    error::ProgramError,
};

use crate::{
    anchor_compat::instruction_discriminator,
    instruction_layouts::RegisterArgs,
    layouts::{PARTICIPANT_ACCOUNT_LEN, SEED_HACKATHON, SEED_PARTICIPANT},
    processors::registration::RegistrationProcessor,
    runtime::{
        accounts::{
            current_slot, prepare_pda_init_if_needed, require_pda_address, require_registry_pda,
            require_signer, require_writable, transfer_into_custody,
        },
        log::emit_event,
    },
};

pub fn process_instruction(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let discriminator = instruction_data
        .get(..8)
        .ok_or(ProgramError::InvalidInstructionData)?;

    if discriminator == instruction_discriminator("register") {
        return process_register(program_id, accounts, instruction_data);
    }

    Err(ProgramError::InvalidInstructionData)
}

fn process_register(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [caller, registry, hackathon, participant, system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(caller)?;
    require_writable(caller)?;
    require_writable(registry)?;
    let _registry = require_registry_pda(registry, program_id)?;
    let args = RegisterArgs::parse(instruction_data).map_err(|_| ProgramError::InvalidInstructionData)?;
    let hackathon_id = args.hackathon_id.to_le_bytes();
    require_pda_address(hackathon, program_id, &[SEED_HACKATHON, &hackathon_id])?;
    require_writable(participant)?;
    let participant_bump = prepare_pda_init_if_needed(
        participant,
        caller,
        system_program,
        program_id,
        &[SEED_PARTICIPANT, &hackathon_id, caller.address().as_ref()],
        PARTICIPANT_ACCOUNT_LEN,
        "Participant",
    )?;

    transfer_into_custody(caller, registry, args.attached_lamports)?;

    let event = {
        let hackathon_data = hackathon.try_borrow()?;
        let hackathon_record: &[u8] = if hackathon.owned_by(program_id) { &hackathon_data } else { &[] };
        let mut participant_data = participant.try_borrow_mut()?;
        RegistrationProcessor {
            caller_pubkey: caller.address().to_bytes(),
            current_slot: current_slot()?,
            participant_bump,
            hackathon_account_data: hackathon_record,
            participant_account_data: &mut participant_data[..],
        }
        .process(instruction_data)?
    };

    if let Some(event) = event {
        emit_event(&event)?;
    }
    Ok(())
}
