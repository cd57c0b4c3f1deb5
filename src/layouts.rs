use crate::anchor_compat::{account_discriminator, ANCHOR_DISCRIMINATOR_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    SliceTooShort,
    InvalidBool,
    InvalidUtf8,
    TitleTooLarge,
    WrongAccountKind,
}

pub const PUBKEY_LEN: usize = 32;
pub const TITLE_MAX_CHARS: usize = 200;
pub const TITLE_MAX_BYTES: usize = TITLE_MAX_CHARS * 4;

pub const REGISTRY_BODY_LEN: usize = 66;
pub const REGISTRY_ACCOUNT_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + REGISTRY_BODY_LEN;
pub const HACKATHON_BODY_LEN: usize = 55 + TITLE_MAX_BYTES;
pub const HACKATHON_ACCOUNT_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + HACKATHON_BODY_LEN;
pub const PARTICIPANT_BODY_LEN: usize = 38;
pub const PARTICIPANT_ACCOUNT_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + PARTICIPANT_BODY_LEN;
pub const WINNER_PRIZE_BODY_LEN: usize = 22;
pub const WINNER_PRIZE_ACCOUNT_LEN: usize = ANCHOR_DISCRIMINATOR_LEN + WINNER_PRIZE_BODY_LEN;

/// Id handed to the first hackathon; 0 stays reserved.
pub const FIRST_HACKATHON_ID: u32 = 1;

pub const SEED_REGISTRY: &[u8] = b"registry";
pub const SEED_HACKATHON: &[u8] = b"hackathon";
pub const SEED_PARTICIPANT: &[u8] = b"participant";
pub const SEED_PRIZE: &[u8] = b"prize";

/// True when the account has been allocated but never written.
pub fn is_zeroed(data: &[u8]) -> bool {
    data.iter().all(|byte| *byte == 0)
}

pub fn has_account_discriminator(data: &[u8], name: &str) -> bool {
    data.get(..ANCHOR_DISCRIMINATOR_LEN) == Some(&account_discriminator(name)[..])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryView {
    pub owner: [u8; PUBKEY_LEN],
    pub min_duration: u32,
    pub last_hackathon_id: u32,
    pub single_payout: bool,
    pub bump: u8,
    pub rent_reserve: u64,
    pub reserved: [u8; 16],
}

impl RegistryView {
    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < REGISTRY_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        Self::read_body(&data[ANCHOR_DISCRIMINATOR_LEN..REGISTRY_ACCOUNT_LEN])
    }

    pub fn write_to_account_data(&self, data: &mut [u8]) -> Result<(), LayoutError> {
        if data.len() < REGISTRY_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        data[..ANCHOR_DISCRIMINATOR_LEN].copy_from_slice(&account_discriminator("Registry"));
        self.write_body(&mut data[ANCHOR_DISCRIMINATOR_LEN..REGISTRY_ACCOUNT_LEN]);
        Ok(())
    }

    pub fn read_body(body: &[u8]) -> Result<Self, LayoutError> {
        if body.len() < REGISTRY_BODY_LEN {
            return Err(LayoutError::SliceTooShort);
        }

        let mut offset = 0usize;
        Ok(Self {
            owner: read_fixed(body, &mut offset)?,
            min_duration: read_u32(body, &mut offset)?,
            last_hackathon_id: read_u32(body, &mut offset)?,
            single_payout: read_bool(body, &mut offset)?,
            bump: read_u8(body, &mut offset)?,
            rent_reserve: read_u64(body, &mut offset)?,
            reserved: read_fixed(body, &mut offset)?,
        })
    }

    pub fn write_body(&self, body: &mut [u8]) {
        let mut offset = 0usize;
        write_bytes(body, &mut offset, &self.owner);
        write_u32(body, &mut offset, self.min_duration);
        write_u32(body, &mut offset, self.last_hackathon_id);
        write_u8(body, &mut offset, self.single_payout as u8);
        write_u8(body, &mut offset, self.bump);
        write_u64(body, &mut offset, self.rent_reserve);
        write_bytes(body, &mut offset, &self.reserved);
    }
}

/// A stored hackathon. The title lives in a fixed buffer sized for
/// `TITLE_MAX_CHARS` four-byte characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HackathonView {
    pub id: u32,
    pub prize_amount: u64,
    pub hackathon_manager: [u8; PUBKEY_LEN],
    pub deadline: u64,
    pub bump: u8,
    title_len: u16,
    title_bytes: [u8; TITLE_MAX_BYTES],
}

impl HackathonView {
    pub fn new(
        id: u32,
        title: &str,
        prize_amount: u64,
        hackathon_manager: [u8; PUBKEY_LEN],
        deadline: u64,
        bump: u8,
    ) -> Result<Self, LayoutError> {
        let mut view = Self {
            id,
            prize_amount,
            hackathon_manager,
            deadline,
            bump,
            title_len: 0,
            title_bytes: [0u8; TITLE_MAX_BYTES],
        };
        view.set_title(title)?;
        Ok(view)
    }

    pub fn title(&self) -> Result<&str, LayoutError> {
        core::str::from_utf8(&self.title_bytes[..self.title_len as usize])
            .map_err(|_| LayoutError::InvalidUtf8)
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), LayoutError> {
        let bytes = title.as_bytes();
        if bytes.len() > TITLE_MAX_BYTES {
            return Err(LayoutError::TitleTooLarge);
        }
        self.title_bytes = [0u8; TITLE_MAX_BYTES];
        self.title_bytes[..bytes.len()].copy_from_slice(bytes);
        self.title_len = bytes.len() as u16;
        Ok(())
    }

    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < HACKATHON_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        Self::read_body(&data[ANCHOR_DISCRIMINATOR_LEN..HACKATHON_ACCOUNT_LEN])
    }

    pub fn write_to_account_data(&self, data: &mut [u8]) -> Result<(), LayoutError> {
        if data.len() < HACKATHON_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        data[..ANCHOR_DISCRIMINATOR_LEN].copy_from_slice(&account_discriminator("Hackathon"));
        self.write_body(&mut data[ANCHOR_DISCRIMINATOR_LEN..HACKATHON_ACCOUNT_LEN]);
        Ok(())
    }

    pub fn read_body(body: &[u8]) -> Result<Self, LayoutError> {
        if body.len() < HACKATHON_BODY_LEN {
            return Err(LayoutError::SliceTooShort);
        }

        let mut offset = 0usize;
        let id = read_u32(body, &mut offset)?;
        let prize_amount = read_u64(body, &mut offset)?;
        let hackathon_manager = read_fixed(body, &mut offset)?;
        let deadline = read_u64(body, &mut offset)?;
        let bump = read_u8(body, &mut offset)?;
        let title_len = read_u16(body, &mut offset)?;
        let title_bytes = read_fixed(body, &mut offset)?;
        if title_len as usize > TITLE_MAX_BYTES {
            return Err(LayoutError::TitleTooLarge);
        }

        let view = Self {
            id,
            prize_amount,
            hackathon_manager,
            deadline,
            bump,
            title_len,
            title_bytes,
        };
        view.title()?;
        Ok(view)
    }

    pub fn write_body(&self, body: &mut [u8]) {
        let mut offset = 0usize;
        write_u32(body, &mut offset, self.id);
        write_u64(body, &mut offset, self.prize_amount);
        write_bytes(body, &mut offset, &self.hackathon_manager);
        write_u64(body, &mut offset, self.deadline);
        write_u8(body, &mut offset, self.bump);
        write_u16(body, &mut offset, self.title_len);
        write_bytes(body, &mut offset, &self.title_bytes);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantView {
    pub hackathon_id: u32,
    pub participant: [u8; PUBKEY_LEN],
    pub registered: bool,
    pub bump: u8,
}

impl ParticipantView {
    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < PARTICIPANT_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        let body = &data[ANCHOR_DISCRIMINATOR_LEN..PARTICIPANT_ACCOUNT_LEN];
        let mut offset = 0usize;
        Ok(Self {
            hackathon_id: read_u32(body, &mut offset)?,
            participant: read_fixed(body, &mut offset)?,
            registered: read_bool(body, &mut offset)?,
            bump: read_u8(body, &mut offset)?,
        })
    }

    pub fn write_to_account_data(&self, data: &mut [u8]) -> Result<(), LayoutError> {
        if data.len() < PARTICIPANT_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        data[..ANCHOR_DISCRIMINATOR_LEN].copy_from_slice(&account_discriminator("Participant"));
        let body = &mut data[ANCHOR_DISCRIMINATOR_LEN..PARTICIPANT_ACCOUNT_LEN];
        let mut offset = 0usize;
        write_u32(body, &mut offset, self.hackathon_id);
        write_bytes(body, &mut offset, &self.participant);
        write_u8(body, &mut offset, self.registered as u8);
        write_u8(body, &mut offset, self.bump);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinnerPrizeView {
    pub hackathon_id: u32,
    pub rank: u32,
    pub amount: u64,
    pub paid: bool,
    pub payouts: u32,
    pub bump: u8,
}

impl WinnerPrizeView {
    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < WINNER_PRIZE_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        let body = &data[ANCHOR_DISCRIMINATOR_LEN..WINNER_PRIZE_ACCOUNT_LEN];
        let mut offset = 0usize;
        Ok(Self {
            hackathon_id: read_u32(body, &mut offset)?,
            rank: read_u32(body, &mut offset)?,
            amount: read_u64(body, &mut offset)?,
            paid: read_bool(body, &mut offset)?,
            payouts: read_u32(body, &mut offset)?,
            bump: read_u8(body, &mut offset)?,
        })
    }

    pub fn write_to_account_data(&self, data: &mut [u8]) -> Result<(), LayoutError> {
        if data.len() < WINNER_PRIZE_ACCOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        data[..ANCHOR_DISCRIMINATOR_LEN].copy_from_slice(&account_discriminator("WinnerPrize"));
        let body = &mut data[ANCHOR_DISCRIMINATOR_LEN..WINNER_PRIZE_ACCOUNT_LEN];
        let mut offset = 0usize;
        write_u32(body, &mut offset, self.hackathon_id);
        write_u32(body, &mut offset, self.rank);
        write_u64(body, &mut offset, self.amount);
        write_u8(body, &mut offset, self.paid as u8);
        write_u32(body, &mut offset, self.payouts);
        write_u8(body, &mut offset, self.bump);
        Ok(())
    }
}

fn read_fixed<const N: usize>(data: &[u8], offset: &mut usize) -> Result<[u8; N], LayoutError> {
    if data.len() < *offset + N {
        return Err(LayoutError::SliceTooShort);
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&data[*offset..*offset + N]);
    *offset += N;
    Ok(out)
}

fn read_u8(data: &[u8], offset: &mut usize) -> Result<u8, LayoutError> {
    let [out] = read_fixed::<1>(data, offset)?;
    Ok(out)
}

fn read_bool(data: &[u8], offset: &mut usize) -> Result<bool, LayoutError> {
    match read_u8(data, offset)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(LayoutError::InvalidBool),
    }
}

fn read_u16(data: &[u8], offset: &mut usize) -> Result<u16, LayoutError> {
    Ok(u16::from_le_bytes(read_fixed(data, offset)?))
}

fn read_u32(data: &[u8], offset: &mut usize) -> Result<u32, LayoutError> {
    Ok(u32::from_le_bytes(read_fixed(data, offset)?))
}

fn read_u64(data: &[u8], offset: &mut usize) -> Result<u64, LayoutError> {
    Ok(u64::from_le_bytes(read_fixed(data, offset)?))
}

fn write_bytes<const N: usize>(data: &mut [u8], offset: &mut usize, value: &[u8; N]) {
    data[*offset..*offset + N].copy_from_slice(value);
    *offset += N;
}

fn write_u8(data: &mut [u8], offset: &mut usize, value: u8) {
    data[*offset] = value;
    *offset += 1;
}

fn write_u16(data: &mut [u8], offset: &mut usize, value: u16) {
    write_bytes(data, offset, &value.to_le_bytes());
}

fn write_u32(data: &mut [u8], offset: &mut usize, value: u32) {
    write_bytes(data, offset, &value.to_le_bytes());
}

fn write_u64(data: &mut [u8], offset: &mut usize, value: u64) {
    write_bytes(data, offset, &value.to_le_bytes());
}
