use pinocchio::{
    AccountView, Address, ProgramResult,
    error::ProgramError,
};

use crate::{
    anchor_compat::instruction_discriminator,
    events::RegistryEvent,
    instruction_layouts::{CreateHackathonArgs, DepositArgs},
    layouts::{HACKATHON_ACCOUNT_LEN, REGISTRY_ACCOUNT_LEN, SEED_HACKATHON, SEED_REGISTRY},
    processors::registry::RegistryProcessor,
    runtime::{
        accounts::{
            current_slot, prepare_pda_init_if_needed, require_registry_pda, require_signer,
            require_writable, transfer_into_custody,
        },
        log::{emit_event, publish_hackathon_id},
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

    if discriminator == instruction_discriminator("init_registry") {
        return process_init_registry(program_id, accounts, instruction_data);
    }
    if discriminator == instruction_discriminator("create_hackathon") {
        return process_create_hackathon(program_id, accounts, instruction_data);
    }
    if discriminator == instruction_discriminator("deposit") {
        return process_deposit(program_id, accounts, instruction_data);
    }

    Err(ProgramError::InvalidInstructionData)
}

fn process_init_registry(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [owner, registry, system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(owner)?;
    require_writable(owner)?;
    require_writable(registry)?;
    let registry_bump = prepare_pda_init_if_needed(
        registry,
        owner,
        system_program,
        program_id,
        &[SEED_REGISTRY],
        REGISTRY_ACCOUNT_LEN,
        "Registry",
    )?;
    let rent_reserve = registry.lamports();

    let mut registry_data = registry.try_borrow_mut()?;
    RegistryProcessor {
        caller_pubkey: owner.address().to_bytes(),
        current_slot: 0,
        registry_bump,
        rent_reserve,
        registry_account_data: &mut registry_data[..],
        hackathon_bump: 0,
        hackathon_account_data: None,
    }
    .process(instruction_data)?;

    Ok(())
}

fn process_create_hackathon(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [owner, registry, hackathon, system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(owner)?;
    require_writable(owner)?;
    require_writable(registry)?;
    let registry_view = require_registry_pda(registry, program_id)?;
    let args = CreateHackathonArgs::parse(instruction_data).map_err(|_| ProgramError::InvalidInstructionData)?;
    require_writable(hackathon)?;
    let hackathon_id = registry_view.last_hackathon_id.to_le_bytes();
    let hackathon_bump = prepare_pda_init_if_needed(
        hackathon,
        owner,
        system_program,
        program_id,
        &[SEED_HACKATHON, &hackathon_id],
        HACKATHON_ACCOUNT_LEN,
        "Hackathon",
    )?;

    transfer_into_custody(owner, registry, args.attached_lamports)?;

    let event = {
        let mut registry_data = registry.try_borrow_mut()?;
        let mut hackathon_data = hackathon.try_borrow_mut()?;
        RegistryProcessor {
            caller_pubkey: owner.address().to_bytes(),
            current_slot: current_slot()?,
            registry_bump: registry_view.bump,
            rent_reserve: registry_view.rent_reserve,
            registry_account_data: &mut registry_data[..],
            hackathon_bump,
            hackathon_account_data: Some(&mut hackathon_data[..]),
        }
        .process(instruction_data)?
    };

    if let Some(event) = event {
        if let RegistryEvent::HackathonCreated(created) = &event {
            publish_hackathon_id(created.id);
        }
        emit_event(&event)?;
    }
    Ok(())
}

fn process_deposit(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [sender, registry, _system_program, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(sender)?;
    require_writable(sender)?;
    require_writable(registry)?;
    let registry_view = require_registry_pda(registry, program_id)?;
    let args = DepositArgs::parse(instruction_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    transfer_into_custody(sender, registry, args.attached_lamports)?;

    let event = {
        let mut registry_data = registry.try_borrow_mut()?;
        RegistryProcessor {
            caller_pubkey: sender.address().to_bytes(),
            current_slot: 0,
            registry_bump: registry_view.bump,
            rent_reserve: registry_view.rent_reserve,
            registry_account_data: &mut registry_data[..],
            hackathon_bump: 0,
            hackathon_account_data: None,
        }
        .process(instruction_data)?
    };

    if let Some(event) = event {
        emit_event(&event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::Ordering;

    use super::*;
    use crate::{
        errors::HackathonError,
        handlers::fixtures::{create_hackathon_ix, deposit_ix, init_registry_ix, MANAGER, OWNER},
        layouts::{HackathonView, RegistryView},
        runtime::{
            accounts::{SYSTEM_PROGRAM_ID, TEST_SLOT},
            log::{take_logged_data, take_return_data},
            test_support::{TestAccount, PROGRAM_ID, TEST_GUARD},
        },
    };

    fn registry_pda() -> Address {
        Address::find_program_address(&[SEED_REGISTRY], &PROGRAM_ID).0
    }

    fn hackathon_pda(id: u32) -> Address {
        Address::find_program_address(&[SEED_HACKATHON, &id.to_le_bytes()], &PROGRAM_ID).0
    }

    fn fresh_pda(address: Address, capacity: usize) -> TestAccount {
        TestAccount::new_with_capacity(address.to_bytes(), SYSTEM_PROGRAM_ID, false, true, 0, &[], capacity)
    }

    fn system_program() -> TestAccount {
        TestAccount::new(SYSTEM_PROGRAM_ID.to_bytes(), SYSTEM_PROGRAM_ID, false, false, 1, &[])
    }

    #[test]
    fn init_then_create_escrows_prize_and_publishes_id() {
        let _guard = TEST_GUARD.lock().unwrap();
        TEST_SLOT.store(5_000, Ordering::Relaxed);
        take_logged_data();

        let mut owner = TestAccount::new(OWNER, SYSTEM_PROGRAM_ID, true, true, 10_000, &[]);
        let mut registry = fresh_pda(registry_pda(), REGISTRY_ACCOUNT_LEN);
        let mut system = system_program();

        process_instruction(
            &PROGRAM_ID,
            &[owner.view(), registry.view(), system.view()],
            &init_registry_ix(10, false),
        )
        .unwrap();
        assert!(registry.is_owned_by(&PROGRAM_ID));

        let mut hackathon = fresh_pda(hackathon_pda(1), HACKATHON_ACCOUNT_LEN);
        process_instruction(
            &PROGRAM_ID,
            &[owner.view(), registry.view(), hackathon.view(), system.view()],
            &create_hackathon_ix("Jam", 100, MANAGER, 1_000),
        )
        .unwrap();

        let stored = HackathonView::read_from_account_data(hackathon.data()).unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.deadline, 5_100);
        assert_eq!(stored.prize_amount, 1_000);
        assert_eq!(owner.lamports(), 9_000);
        assert_eq!(registry.lamports(), 1_000);
        assert_eq!(RegistryView::read_from_account_data(registry.data()).unwrap().last_hackathon_id, 2);
        assert_eq!(take_return_data(), Some(1u32.to_le_bytes().to_vec()));
        assert_eq!(take_logged_data().len(), 1);
    }

    #[test]
    fn create_with_wrong_id_pda_is_rejected() {
        let _guard = TEST_GUARD.lock().unwrap();
        TEST_SLOT.store(0, Ordering::Relaxed);

        let mut owner = TestAccount::new(OWNER, SYSTEM_PROGRAM_ID, true, true, 10_000, &[]);
        let mut registry = fresh_pda(registry_pda(), REGISTRY_ACCOUNT_LEN);
        let mut system = system_program();
        process_instruction(
            &PROGRAM_ID,
            &[owner.view(), registry.view(), system.view()],
            &init_registry_ix(10, false),
        )
        .unwrap();

        let mut hackathon = fresh_pda(hackathon_pda(2), HACKATHON_ACCOUNT_LEN);
        let err = process_instruction(
            &PROGRAM_ID,
            &[owner.view(), registry.view(), hackathon.view(), system.view()],
            &create_hackathon_ix("Jam", 100, MANAGER, 0),
        )
        .unwrap_err();

        assert_eq!(err, ProgramError::InvalidSeeds);
    }

    #[test]
    fn non_owner_cannot_create() {
        let _guard = TEST_GUARD.lock().unwrap();
        TEST_SLOT.store(0, Ordering::Relaxed);

        let mut owner = TestAccount::new(OWNER, SYSTEM_PROGRAM_ID, true, true, 10_000, &[]);
        let mut intruder = TestAccount::new(MANAGER, SYSTEM_PROGRAM_ID, true, true, 10_000, &[]);
        let mut registry = fresh_pda(registry_pda(), REGISTRY_ACCOUNT_LEN);
        let mut hackathon = fresh_pda(hackathon_pda(1), HACKATHON_ACCOUNT_LEN);
        let mut system = system_program();
        process_instruction(
            &PROGRAM_ID,
            &[owner.view(), registry.view(), system.view()],
            &init_registry_ix(10, false),
        )
        .unwrap();

        let err = process_instruction(
            &PROGRAM_ID,
            &[intruder.view(), registry.view(), hackathon.view(), system.view()],
            &create_hackathon_ix("Jam", 100, MANAGER, 0),
        )
        .unwrap_err();

        assert_eq!(err, HackathonError::OwnerOnly.into());
    }

    #[test]
    fn deposit_tops_up_custody() {
        let _guard = TEST_GUARD.lock().unwrap();
        take_logged_data();

        let mut owner = TestAccount::new(OWNER, SYSTEM_PROGRAM_ID, true, true, 10_000, &[]);
        let mut sender = TestAccount::new(MANAGER, SYSTEM_PROGRAM_ID, true, true, 5_000, &[]);
        let mut registry = fresh_pda(registry_pda(), REGISTRY_ACCOUNT_LEN);
        let mut system = system_program();
        process_instruction(
            &PROGRAM_ID,
            &[owner.view(), registry.view(), system.view()],
            &init_registry_ix(10, false),
        )
        .unwrap();

        process_instruction(
            &PROGRAM_ID,
            &[sender.view(), registry.view(), system.view()],
            &deposit_ix(2_000),
        )
        .unwrap();

        assert_eq!(sender.lamports(), 3_000);
        assert_eq!(registry.lamports(), 2_000);
        assert_eq!(take_logged_data().len(), 1);
    }
}
