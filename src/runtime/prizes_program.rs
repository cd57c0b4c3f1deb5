use pinocchio::{
    AccountView, Address, ProgramResult,
    error::ProgramError,
};

use crate::{
    anchor_compat::instruction_discriminator,
    events::RegistryEvent,
    instruction_layouts::{AnnounceWinnerArgs, SetWinnerPrizeArgs},
    layouts::{SEED_HACKATHON, SEED_PARTICIPANT, SEED_PRIZE, WINNER_PRIZE_ACCOUNT_LEN},
    processors::prizes::PrizeProcessor,
    runtime::{
        accounts::{
            custody_balance, pay_out, prepare_pda_init_if_needed, require_pda_address,
            require_registry_pda, require_signer, require_writable, transfer_into_custody,
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

    if discriminator == instruction_discriminator("set_winner_prize") {
        return process_set_winner_prize(program_id, accounts, instruction_data);
    }
    if discriminator == instruction_discriminator("announce_winner") {
        return process_announce_winner(program_id, accounts, instruction_data);
    }

    Err(ProgramError::InvalidInstructionData)
}

fn process_set_winner_prize(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [manager, registry, hackathon, prize, system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(manager)?;
    require_writable(manager)?;
    let _registry = require_registry_pda(registry, program_id)?;
    let args = SetWinnerPrizeArgs::parse(instruction_data).map_err(|_| ProgramError::InvalidInstructionData)?;
    let hackathon_id = args.hackathon_id.to_le_bytes();
    let rank = args.rank.to_le_bytes();
    require_pda_address(hackathon, program_id, &[SEED_HACKATHON, &hackathon_id])?;
    require_writable(prize)?;
    let prize_bump = prepare_pda_init_if_needed(
        prize,
        manager,
        system_program,
        program_id,
        &[SEED_PRIZE, &hackathon_id, &rank],
        WINNER_PRIZE_ACCOUNT_LEN,
        "WinnerPrize",
    )?;

    let registry_data = registry.try_borrow()?;
    let hackathon_data = hackathon.try_borrow()?;
    let hackathon_record: &[u8] = if hackathon.owned_by(program_id) { &hackathon_data } else { &[] };
    let mut prize_data = prize.try_borrow_mut()?;

    PrizeProcessor {
        caller_pubkey: manager.address().to_bytes(),
        custody_balance: 0,
        prize_bump,
        registry_account_data: &registry_data,
        hackathon_account_data: hackathon_record,
        participant_account_data: &[],
        prize_account_data: &mut prize_data[..],
    }
    .process(instruction_data)?;

    Ok(())
}

fn process_announce_winner(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [manager, registry, hackathon, participant, prize, winner, _system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(manager)?;
    require_writable(manager)?;
    require_writable(registry)?;
    let registry_view = require_registry_pda(registry, program_id)?;
    let args = AnnounceWinnerArgs::parse(instruction_data).map_err(|_| ProgramError::InvalidInstructionData)?;
    let hackathon_id = args.hackathon_id.to_le_bytes();
    let rank = args.rank.to_le_bytes();
    require_pda_address(hackathon, program_id, &[SEED_HACKATHON, &hackathon_id])?;
    require_pda_address(participant, program_id, &[SEED_PARTICIPANT, &hackathon_id, &args.winner])?;
    require_pda_address(prize, program_id, &[SEED_PRIZE, &hackathon_id, &rank])?;
    if winner.address().to_bytes() != args.winner {
        return Err(ProgramError::InvalidArgument);
    }

    transfer_into_custody(manager, registry, args.attached_lamports)?;
    let custody = custody_balance(registry, &registry_view);

    let event = {
        let registry_data = registry.try_borrow()?;
        let hackathon_data = hackathon.try_borrow()?;
        let hackathon_record: &[u8] = if hackathon.owned_by(program_id) { &hackathon_data } else { &[] };
        let participant_data = participant.try_borrow()?;
        let participant_record: &[u8] = if participant.owned_by(program_id) { &participant_data } else { &[] };

        if prize.owned_by(program_id) {
            require_writable(prize)?;
            let mut prize_data = prize.try_borrow_mut()?;
            PrizeProcessor {
                caller_pubkey: manager.address().to_bytes(),
                custody_balance: custody,
                prize_bump: 0,
                registry_account_data: &registry_data,
                hackathon_account_data: hackathon_record,
                participant_account_data: participant_record,
                prize_account_data: &mut prize_data[..],
            }
            .process(instruction_data)?
        } else {
            let mut unset_prize = [0u8; WINNER_PRIZE_ACCOUNT_LEN];
            PrizeProcessor {
                caller_pubkey: manager.address().to_bytes(),
                custody_balance: custody,
                prize_bump: 0,
                registry_account_data: &registry_data,
                hackathon_account_data: hackathon_record,
                participant_account_data: participant_record,
                prize_account_data: &mut unset_prize,
            }
            .process(instruction_data)?
        }
    };

    if let Some(event) = event {
        if let RegistryEvent::WinnerPrizePaid { amount, .. } = event {
            pay_out(registry, winner, amount)?;
        }
        emit_event(&event)?;
    }
    Ok(())
}
