//! Typed lookups over raw account data.
//!
//! An empty or never-written account reads as "absent" instead of a
//! zero-valued record, so callers must handle the missing case explicitly.

use crate::layouts::{
    has_account_discriminator, is_zeroed, HackathonView, LayoutError, ParticipantView,
    WinnerPrizeView,
};

pub fn get_hackathon(data: &[u8]) -> Result<Option<HackathonView>, LayoutError> {
    read_record(data, "Hackathon", HackathonView::read_from_account_data)
}

/// Registration cutoff of a hackathon, or 0 when it does not exist.
pub fn get_deadline(data: &[u8]) -> Result<u64, LayoutError> {
    Ok(get_hackathon(data)?.map_or(0, |hackathon| hackathon.deadline))
}

pub fn get_participant(data: &[u8]) -> Result<Option<ParticipantView>, LayoutError> {
    read_record(data, "Participant", ParticipantView::read_from_account_data)
}

pub fn is_participant(data: &[u8]) -> Result<bool, LayoutError> {
    Ok(get_participant(data)?.is_some_and(|participant| participant.registered))
}

pub fn get_winner_prize(data: &[u8]) -> Result<Option<WinnerPrizeView>, LayoutError> {
    read_record(data, "WinnerPrize", WinnerPrizeView::read_from_account_data)
}

/// Prize configured for a rank, or 0 when none was set.
pub fn winner_prize_amount(data: &[u8]) -> Result<u64, LayoutError> {
    Ok(get_winner_prize(data)?.map_or(0, |prize| prize.amount))
}

fn read_record<T>(
    data: &[u8],
    account_name: &str,
    read: fn(&[u8]) -> Result<T, LayoutError>,
) -> Result<Option<T>, LayoutError> {
    if is_zeroed(data) {
        return Ok(None);
    }
    if !has_account_discriminator(data, account_name) {
        return Err(LayoutError::WrongAccountKind);
    }
    read(data).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{HACKATHON_ACCOUNT_LEN, PARTICIPANT_ACCOUNT_LEN, WINNER_PRIZE_ACCOUNT_LEN};

    #[test]
    fn missing_hackathon_reads_as_none_with_zero_deadline() {
        assert_eq!(get_hackathon(&[]), Ok(None));
        assert_eq!(get_hackathon(&[0u8; HACKATHON_ACCOUNT_LEN]), Ok(None));
        assert_eq!(get_deadline(&[]), Ok(0));
    }

    #[test]
    fn stored_hackathon_exposes_deadline() {
        let mut data = vec![0u8; HACKATHON_ACCOUNT_LEN];
        HackathonView::new(1, "Jam", 1_000, [2u8; 32], 5_100, 255)
            .unwrap()
            .write_to_account_data(&mut data)
            .unwrap();

        let hackathon = get_hackathon(&data).unwrap().unwrap();
        assert_eq!(hackathon.id, 1);
        assert_eq!(get_deadline(&data), Ok(5_100));
    }

    #[test]
    fn foreign_account_kind_is_rejected() {
        let mut data = [0u8; PARTICIPANT_ACCOUNT_LEN];
        ParticipantView {
            hackathon_id: 1,
            participant: [1u8; 32],
            registered: true,
            bump: 1,
        }
        .write_to_account_data(&mut data)
        .unwrap();

        assert_eq!(get_winner_prize(&data), Err(LayoutError::WrongAccountKind));
        assert_eq!(is_participant(&data), Ok(true));
    }

    #[test]
    fn unset_prize_defaults_to_zero() {
        assert_eq!(winner_prize_amount(&[0u8; WINNER_PRIZE_ACCOUNT_LEN]), Ok(0));

        let mut data = [0u8; WINNER_PRIZE_ACCOUNT_LEN];
        WinnerPrizeView {
            hackathon_id: 1,
            rank: 1,
            amount: 600,
            paid: false,
            payouts: 0,
            bump: 3,
        }
        .write_to_account_data(&mut data)
        .unwrap();
        assert_eq!(winner_prize_amount(&data), Ok(600));
    }
}
