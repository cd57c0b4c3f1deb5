use pinocchio::error::ProgramError;

use crate::{
    accessors::{get_hackathon, get_winner_prize},
    errors::HackathonError,
    instruction_layouts::SetWinnerPrizeArgs,
    layouts::{WinnerPrizeView, PUBKEY_LEN, WINNER_PRIZE_ACCOUNT_LEN},
};

/// Records the prize for one rank. Later calls overwrite the amount but keep
/// the payout history of the rank.
pub fn process_anchor_bytes(
    caller_pubkey: [u8; PUBKEY_LEN],
    prize_bump: u8,
    hackathon_account_data: &[u8],
    prize_account_data: &mut [u8],
    ix_data: &[u8],
) -> Result<(), ProgramError> {
    let args = SetWinnerPrizeArgs::parse(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;

    if args.attached_lamports != 0 {
        return Err(HackathonError::NotPayable.into());
    }
    let hackathon = get_hackathon(hackathon_account_data)
        .map_err(|_| ProgramError::InvalidAccountData)?
        .ok_or(HackathonError::HackathonNotFound)?;
    if hackathon.id != args.hackathon_id {
        return Err(ProgramError::InvalidArgument);
    }
    if caller_pubkey != hackathon.hackathon_manager {
        return Err(HackathonError::ManagerOnly.into());
    }
    if prize_account_data.len() != WINNER_PRIZE_ACCOUNT_LEN {
        return Err(ProgramError::InvalidAccountData);
    }

    let existing = get_winner_prize(prize_account_data).map_err(|_| ProgramError::InvalidAccountData)?;
    let prize = match existing {
        Some(prize) => WinnerPrizeView {
            amount: args.amount,
            ..prize
        },
        None => WinnerPrizeView {
            hackathon_id: args.hackathon_id,
            rank: args.rank,
            amount: args.amount,
            paid: false,
            payouts: 0,
            bump: prize_bump,
        },
    };
    prize
        .write_to_account_data(prize_account_data)
        .map_err(|_| ProgramError::InvalidAccountData)?;

    Ok(())
}
