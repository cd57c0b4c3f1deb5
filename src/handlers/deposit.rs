use pinocchio::error::ProgramError;

use crate::{
    errors::HackathonError,
    events::RegistryEvent,
    instruction_layouts::DepositArgs,
    layouts::PUBKEY_LEN,
};

pub fn process_anchor_bytes(
    sender_pubkey: [u8; PUBKEY_LEN],
    ix_data: &[u8],
) -> Result<RegistryEvent, ProgramError> {
    let args = DepositArgs::parse(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    if args.attached_lamports == 0 {
        return Err(HackathonError::ZeroDeposit.into());
    }

    Ok(RegistryEvent::CustodyDeposited {
        sender: sender_pubkey,
        amount: args.attached_lamports,
    })
}
