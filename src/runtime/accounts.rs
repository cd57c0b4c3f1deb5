use pinocchio::{
    AccountView, Address, ProgramResult,
    error::ProgramError,
};
#[cfg(not(test))]
use pinocchio::cpi::{Seed, Signer};
#[cfg(not(test))]
use pinocchio::sysvars::{Sysvar, clock::Clock};
#[cfg(not(test))]
use pinocchio_system::{create_account_with_minimum_balance_signed, instructions::Transfer};

#[cfg(test)]
use core::sync::atomic::{AtomicU64, Ordering};

use solana_address::address;

use crate::{
    errors::HackathonError,
    layouts::{
        has_account_discriminator, is_zeroed, RegistryView, REGISTRY_ACCOUNT_LEN, SEED_REGISTRY,
    },
};

pub const SYSTEM_PROGRAM_ID: Address = address!("11111111111111111111111111111111");

/// Longest seed list used by any record, without the bump.
#[cfg(not(test))]
const MAX_RECORD_SEEDS: usize = 3;

#[cfg(test)]
pub(crate) static TEST_SLOT: AtomicU64 = AtomicU64::new(0);

/// Block height used for deadlines.
pub fn current_slot() -> Result<u64, ProgramError> {
    #[cfg(test)]
    {
        return Ok(TEST_SLOT.load(Ordering::Relaxed));
    }

    #[cfg(not(test))]
    {
        Ok(Clock::get()?.slot)
    }
}

pub fn require_signer(account: &AccountView) -> ProgramResult {
    if account.is_signer() { Ok(()) } else { Err(ProgramError::MissingRequiredSignature) }
}

pub fn require_writable(account: &AccountView) -> ProgramResult {
    if account.is_writable() { Ok(()) } else { Err(ProgramError::Immutable) }
}

pub fn require_owned_by(account: &AccountView, owner: &Address) -> ProgramResult {
    if account.owned_by(owner) { Ok(()) } else { Err(ProgramError::IncorrectProgramId) }
}

pub fn require_address(account: &AccountView, address: &Address) -> ProgramResult {
    if account.address() == address { Ok(()) } else { Err(ProgramError::IncorrectProgramId) }
}

/// Checks that `account` sits at the PDA for `seeds` and returns its bump.
/// The account itself may not exist yet.
pub fn require_pda_address(
    account: &AccountView,
    program_id: &Address,
    seeds: &[&[u8]],
) -> Result<u8, ProgramError> {
    let (expected_address, bump) = Address::find_program_address(seeds, program_id);
    if account.address() != &expected_address {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(bump)
}

pub fn require_registry_pda(account: &AccountView, program_id: &Address) -> Result<RegistryView, ProgramError> {
    require_owned_by(account, program_id)?;
    let bump = require_pda_address(account, program_id, &[SEED_REGISTRY])?;
    let data = account.try_borrow()?;
    if data.len() != REGISTRY_ACCOUNT_LEN || !has_account_discriminator(&data, "Registry") {
        return Err(ProgramError::InvalidAccountData);
    }
    let registry = RegistryView::read_from_account_data(&data).map_err(|_| ProgramError::InvalidAccountData)?;
    if registry.bump != bump {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(registry)
}

/// Creates the PDA for `seeds` when it does not exist yet, paid by `payer`,
/// and returns its bump. An existing account must be a `space`-sized record of
/// `account_name` or still zeroed.
pub fn prepare_pda_init_if_needed(
    account: &AccountView,
    payer: &AccountView,
    system_program: &AccountView,
    program_id: &Address,
    seeds: &[&[u8]],
    space: usize,
    account_name: &str,
) -> Result<u8, ProgramError> {
    let bump = require_pda_address(account, program_id, seeds)?;

    if !account.owned_by(program_id) {
        require_address(system_program, &SYSTEM_PROGRAM_ID)?;
        require_owned_by(account, &SYSTEM_PROGRAM_ID)?;
        create_pda_account(account, payer, program_id, space, seeds, bump)?;
    }

    let data = account.try_borrow()?;
    if data.len() != space {
        return Err(ProgramError::InvalidAccountData);
    }
    if !is_zeroed(&data) && !has_account_discriminator(&data, account_name) {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(bump)
}

#[cfg(not(test))]
fn create_pda_account(
    account: &AccountView,
    payer: &AccountView,
    program_id: &Address,
    space: usize,
    seeds: &[&[u8]],
    bump: u8,
) -> ProgramResult {
    if seeds.len() > MAX_RECORD_SEEDS {
        return Err(ProgramError::MaxSeedLengthExceeded);
    }
    let bump_seed = [bump];
    let signer_seeds: [Seed; MAX_RECORD_SEEDS + 1] = core::array::from_fn(|index| match seeds.get(index) {
        Some(seed) => Seed::from(*seed),
        None => Seed::from(&bump_seed[..]),
    });
    let signer = Signer::from(&signer_seeds[..seeds.len() + 1]);
    create_account_with_minimum_balance_signed(account, space, program_id, payer, None, &[signer])
}

#[cfg(test)]
fn create_pda_account(
    account: &AccountView,
    _payer: &AccountView,
    program_id: &Address,
    space: usize,
    _seeds: &[&[u8]],
    _bump: u8,
) -> ProgramResult {
    unsafe {
        account.assign(program_id);
        account.resize_unchecked(space)?;
    }
    Ok(())
}

/// Lamports the registry holds on behalf of hackathons.
pub fn custody_balance(registry: &AccountView, registry_view: &RegistryView) -> u64 {
    registry.lamports().saturating_sub(registry_view.rent_reserve)
}

/// Moves the value attached to a call from the caller into registry custody.
#[cfg(not(test))]
pub fn transfer_into_custody(from: &AccountView, registry: &AccountView, lamports: u64) -> ProgramResult {
    if lamports == 0 {
        return Ok(());
    }
    Transfer {
        from,
        to: registry,
        lamports,
    }
    .invoke()
}

#[cfg(test)]
pub fn transfer_into_custody(from: &AccountView, registry: &AccountView, lamports: u64) -> ProgramResult {
    if lamports == 0 {
        return Ok(());
    }
    let next_from = from
        .lamports()
        .checked_sub(lamports)
        .ok_or(ProgramError::InsufficientFunds)?;
    let next_registry = registry
        .lamports()
        .checked_add(lamports)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    from.set_lamports(next_from);
    registry.set_lamports(next_registry);
    Ok(())
}

/// Releases `lamports` from registry custody to `recipient`.
pub fn pay_out(registry: &AccountView, recipient: &AccountView, lamports: u64) -> ProgramResult {
    if lamports == 0 {
        return Ok(());
    }
    if !recipient.is_writable() {
        return Err(HackathonError::TransferFailed.into());
    }
    let remaining = registry
        .lamports()
        .checked_sub(lamports)
        .ok_or(HackathonError::TransferFailed)?;
    let credited = recipient
        .lamports()
        .checked_add(lamports)
        .ok_or(HackathonError::TransferFailed)?;
    registry.set_lamports(remaining);
    recipient.set_lamports(credited);
    Ok(())
}
