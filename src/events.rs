use crate::{
    anchor_compat::{event_discriminator, ANCHOR_DISCRIMINATOR_LEN},
    layouts::{HackathonView, LayoutError, PUBKEY_LEN, TITLE_MAX_BYTES},
};

/// Largest encoded event: `HackathonCreated` with a full title.
pub const EVENT_MAX_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + 4 + 4 + TITLE_MAX_BYTES + 8 + PUBKEY_LEN + 8;

/// Events appended to the ledger log, one per successful operation.
///
/// Encoded the way Anchor's `emit!` does: the 8-byte `event:<Name>`
/// discriminator followed by the borsh body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    HackathonCreated(HackathonView),
    ParticipantRegistered {
        hackathon_id: u32,
        participant: [u8; PUBKEY_LEN],
    },
    WinnerPrizePaid {
        hackathon_id: u32,
        winner: [u8; PUBKEY_LEN],
        rank: u32,
        amount: u64,
    },
    CustodyDeposited {
        sender: [u8; PUBKEY_LEN],
        amount: u64,
    },
}

impl RegistryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HackathonCreated(_) => "HackathonCreated",
            Self::ParticipantRegistered { .. } => "ParticipantRegistered",
            Self::WinnerPrizePaid { .. } => "WinnerPrizePaid",
            Self::CustodyDeposited { .. } => "CustodyDeposited",
        }
    }

    /// Writes the encoded event into `out` and returns the number of bytes used.
    pub fn write_to(&self, out: &mut [u8]) -> Result<usize, LayoutError> {
        let mut writer = EventWriter { out, offset: 0 };
        writer.put(&event_discriminator(self.name()))?;

        match self {
            Self::HackathonCreated(hackathon) => {
                let title = hackathon.title()?;
                writer.put(&hackathon.id.to_le_bytes())?;
                writer.put(&(title.len() as u32).to_le_bytes())?;
                writer.put(title.as_bytes())?;
                writer.put(&hackathon.prize_amount.to_le_bytes())?;
                writer.put(&hackathon.hackathon_manager)?;
                writer.put(&hackathon.deadline.to_le_bytes())?;
            }
            Self::ParticipantRegistered { hackathon_id, participant } => {
                writer.put(&hackathon_id.to_le_bytes())?;
                writer.put(participant)?;
            }
            Self::WinnerPrizePaid { hackathon_id, winner, rank, amount } => {
                writer.put(&hackathon_id.to_le_bytes())?;
                writer.put(winner)?;
                writer.put(&rank.to_le_bytes())?;
                writer.put(&amount.to_le_bytes())?;
            }
            Self::CustodyDeposited { sender, amount } => {
                writer.put(sender)?;
                writer.put(&amount.to_le_bytes())?;
            }
        }

        Ok(writer.offset)
    }
}

struct EventWriter<'a> {
    out: &'a mut [u8],
    offset: usize,
}

impl EventWriter<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), LayoutError> {
        let end = self.offset + bytes.len();
        self.out
            .get_mut(self.offset..end)
            .ok_or(LayoutError::SliceTooShort)?
            .copy_from_slice(bytes);
        self.offset = end;
        Ok(())
    }
}
