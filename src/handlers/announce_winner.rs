use pinocchio::error::ProgramError;

use crate::{
    accessors::{get_hackathon, get_participant, get_winner_prize},
    errors::HackathonError,
    events::RegistryEvent,
    instruction_layouts::AnnounceWinnerArgs,
    layouts::{RegistryView, PUBKEY_LEN},
};

/// Validates a payout and marks the rank as paid. The returned event carries
/// the amount the caller must move from custody to the winner.
pub fn process_anchor_bytes(
    caller_pubkey: [u8; PUBKEY_LEN],
    custody_balance: u64,
    registry_account_data: &[u8],
    hackathon_account_data: &[u8],
    participant_account_data: &[u8],
    prize_account_data: &mut [u8],
    ix_data: &[u8],
) -> Result<RegistryEvent, ProgramError> {
    let args = AnnounceWinnerArgs::parse(ix_data).map_err(|_| ProgramError::InvalidInstructionData)?;
    let registry = RegistryView::read_from_account_data(registry_account_data)
        .map_err(|_| ProgramError::InvalidAccountData)?;

    let hackathon = get_hackathon(hackathon_account_data).map_err(|_| ProgramError::InvalidAccountData)?;
    match hackathon {
        Some(hackathon) if hackathon.hackathon_manager == caller_pubkey => {
            if hackathon.id != args.hackathon_id {
                return Err(ProgramError::InvalidArgument);
            }
        }
        _ => return Err(HackathonError::ManagerOnly.into()),
    }

    let participant = get_participant(participant_account_data).map_err(|_| ProgramError::InvalidAccountData)?;
    let registered = participant.is_some_and(|participant| {
        participant.registered
            && participant.participant == args.winner
            && participant.hackathon_id == args.hackathon_id
    });
    if !registered {
        return Err(HackathonError::NotAParticipant.into());
    }

    let prize = get_winner_prize(prize_account_data).map_err(|_| ProgramError::InvalidAccountData)?;
    let amount = prize.map_or(0, |prize| prize.amount);
    if amount > custody_balance {
        return Err(HackathonError::InsufficientBalance.into());
    }

    if let Some(mut prize) = prize {
        if registry.single_payout && prize.paid {
            return Err(HackathonError::PrizeAlreadyPaid.into());
        }
        prize.paid = true;
        prize.payouts = prize.payouts.saturating_add(1);
        prize
            .write_to_account_data(prize_account_data)
            .map_err(|_| ProgramError::InvalidAccountData)?;
    }

    Ok(RegistryEvent::WinnerPrizePaid {
        hackathon_id: args.hackathon_id,
        winner: args.winner,
        rank: args.rank,
        amount,
    })
}
