use crate::{anchor_compat::instruction_discriminator, layouts::PUBKEY_LEN};

pub const INIT_REGISTRY_IX_LEN: usize = 8 + 4 + 1;
/// Fixed part of `create_hackathon`; the borsh title bytes come on top.
pub const CREATE_HACKATHON_IX_MIN_LEN: usize = 8 + 4 + 4 + PUBKEY_LEN + 8;
pub const SET_WINNER_PRIZE_IX_LEN: usize = 8 + 4 + 4 + 8 + 8;
pub const REGISTER_IX_LEN: usize = 8 + 4 + 8;
pub const ANNOUNCE_WINNER_IX_LEN: usize = 8 + 4 + 4 + PUBKEY_LEN + 8;
pub const DEPOSIT_IX_LEN: usize = 8 + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionLayoutError {
    SliceTooShort,
    WrongDiscriminator,
    InvalidBool,
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitRegistryArgs {
    pub min_duration: u32,
    pub single_payout: bool,
}

impl InitRegistryArgs {
    pub fn parse(ix_data: &[u8]) -> Result<Self, InstructionLayoutError> {
        let mut offset = check_header(ix_data, "init_registry", INIT_REGISTRY_IX_LEN)?;
        Ok(Self {
            min_duration: read_u32(ix_data, &mut offset)?,
            single_payout: read_bool(ix_data, &mut offset)?,
        })
    }
}

/// Arguments of `create_hackathon`. The title borrows from the instruction
/// data, so no allocation is needed on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateHackathonArgs<'a> {
    pub title: &'a str,
    pub duration: u32,
    pub hackathon_manager: [u8; PUBKEY_LEN],
    pub attached_lamports: u64,
}

impl<'a> CreateHackathonArgs<'a> {
    pub fn parse(ix_data: &'a [u8]) -> Result<Self, InstructionLayoutError> {
        let mut offset = check_header(ix_data, "create_hackathon", CREATE_HACKATHON_IX_MIN_LEN)?;
        let title = read_string(ix_data, &mut offset)?;
        Ok(Self {
            title,
            duration: read_u32(ix_data, &mut offset)?,
            hackathon_manager: read_fixed(ix_data, &mut offset)?,
            attached_lamports: read_u64(ix_data, &mut offset)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetWinnerPrizeArgs {
    pub hackathon_id: u32,
    pub rank: u32,
    pub amount: u64,
    pub attached_lamports: u64,
}

impl SetWinnerPrizeArgs {
    pub fn parse(ix_data: &[u8]) -> Result<Self, InstructionLayoutError> {
        let mut offset = check_header(ix_data, "set_winner_prize", SET_WINNER_PRIZE_IX_LEN)?;
        Ok(Self {
            hackathon_id: read_u32(ix_data, &mut offset)?,
            rank: read_u32(ix_data, &mut offset)?,
            amount: read_u64(ix_data, &mut offset)?,
            attached_lamports: read_u64(ix_data, &mut offset)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterArgs {
    pub hackathon_id: u32,
    pub attached_lamports: u64,
}

impl RegisterArgs {
    pub fn parse(ix_data: &[u8]) -> Result<Self, InstructionLayoutError> {
        let mut offset = check_header(ix_data, "register", REGISTER_IX_LEN)?;
        Ok(Self {
            hackathon_id: read_u32(ix_data, &mut offset)?,
            attached_lamports: read_u64(ix_data, &mut offset)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceWinnerArgs {
    pub hackathon_id: u32,
    pub rank: u32,
    pub winner: [u8; PUBKEY_LEN],
    pub attached_lamports: u64,
}

impl AnnounceWinnerArgs {
    pub fn parse(ix_data: &[u8]) -> Result<Self, InstructionLayoutError> {
        let mut offset = check_header(ix_data, "announce_winner", ANNOUNCE_WINNER_IX_LEN)?;
        Ok(Self {
            hackathon_id: read_u32(ix_data, &mut offset)?,
            rank: read_u32(ix_data, &mut offset)?,
            winner: read_fixed(ix_data, &mut offset)?,
            attached_lamports: read_u64(ix_data, &mut offset)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositArgs {
    pub attached_lamports: u64,
}

impl DepositArgs {
    pub fn parse(ix_data: &[u8]) -> Result<Self, InstructionLayoutError> {
        let mut offset = check_header(ix_data, "deposit", DEPOSIT_IX_LEN)?;
        Ok(Self {
            attached_lamports: read_u64(ix_data, &mut offset)?,
        })
    }
}

fn check_header(ix_data: &[u8], ix_name: &str, min_len: usize) -> Result<usize, InstructionLayoutError> {
    if ix_data.len() < min_len {
        return Err(InstructionLayoutError::SliceTooShort);
    }
    if ix_data[..8] != instruction_discriminator(ix_name) {
        return Err(InstructionLayoutError::WrongDiscriminator);
    }
    Ok(8)
}

fn read_fixed<const N: usize>(data: &[u8], offset: &mut usize) -> Result<[u8; N], InstructionLayoutError> {
    let end = offset.checked_add(N).ok_or(InstructionLayoutError::SliceTooShort)?;
    let bytes = data.get(*offset..end).ok_or(InstructionLayoutError::SliceTooShort)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    *offset = end;
    Ok(out)
}

fn read_bool(data: &[u8], offset: &mut usize) -> Result<bool, InstructionLayoutError> {
    match read_fixed::<1>(data, offset)? {
        [0] => Ok(false),
        [1] => Ok(true),
        _ => Err(InstructionLayoutError::InvalidBool),
    }
}

fn read_u32(data: &[u8], offset: &mut usize) -> Result<u32, InstructionLayoutError> {
    Ok(u32::from_le_bytes(read_fixed(data, offset)?))
}

fn read_u64(data: &[u8], offset: &mut usize) -> Result<u64, InstructionLayoutError> {
    Ok(u64::from_le_bytes(read_fixed(data, offset)?))
}

fn read_string<'a>(data: &'a [u8], offset: &mut usize) -> Result<&'a str, InstructionLayoutError> {
    let len = read_u32(data, offset)? as usize;
    let end = offset.checked_add(len).ok_or(InstructionLayoutError::SliceTooShort)?;
    let bytes = data.get(*offset..end).ok_or(InstructionLayoutError::SliceTooShort)?;
    let text = core::str::from_utf8(bytes).map_err(|_| InstructionLayoutError::InvalidUtf8)?;
    *offset = end;
    Ok(text)
}
