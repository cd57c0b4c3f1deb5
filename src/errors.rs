use pinocchio::error::ProgramError;

/// Anchor-style custom error codes surfaced as `ProgramError::Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum HackathonError {
    OwnerOnly = 6000,
    NotPayable = 6001,
    DurationTooShort = 6002,
    TitleTooLong = 6003,
    DeadlineOverflow = 6004,
    IdSpaceExhausted = 6005,
    HackathonNotFound = 6006,
    ManagerOnly = 6007,
    EventCompleted = 6008,
    AlreadyRegistered = 6009,
    NotAParticipant = 6010,
    InsufficientBalance = 6011,
    TransferFailed = 6012,
    PrizeAlreadyPaid = 6013,
    ZeroDeposit = 6014,
}

impl HackathonError {
    pub const ALL: [HackathonError; 15] = [
        Self::OwnerOnly,
        Self::NotPayable,
        Self::DurationTooShort,
        Self::TitleTooLong,
        Self::DeadlineOverflow,
        Self::IdSpaceExhausted,
        Self::HackathonNotFound,
        Self::ManagerOnly,
        Self::EventCompleted,
        Self::AlreadyRegistered,
        Self::NotAParticipant,
        Self::InsufficientBalance,
        Self::TransferFailed,
        Self::PrizeAlreadyPaid,
        Self::ZeroDeposit,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|err| *err as u32 == code)
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::OwnerOnly => "The method is owner only.",
            Self::NotPayable => "The method is not payable.",
            Self::DurationTooShort => "Hackathon duration should be higher than min duration.",
            Self::TitleTooLong => "The title length can be up to 200 characters.",
            Self::DeadlineOverflow => "Hackathon deadline overflows block height.",
            Self::IdSpaceExhausted => "No hackathon ids left to assign.",
            Self::HackathonNotFound => "Hackathon with provided index is not found.",
            Self::ManagerOnly => "Only Hackathon manager can perform this action.",
            Self::EventCompleted => "Hackathon is completed.",
            Self::AlreadyRegistered => "Already Registered.",
            Self::NotAParticipant => "Winner address is not valid Participant.",
            Self::InsufficientBalance => "Insufficient balance.",
            Self::TransferFailed => "Transfer failed.",
            Self::PrizeAlreadyPaid => "Prize for this rank is already paid.",
            Self::ZeroDeposit => "Deposit amount must be positive.",
        }
    }
}

impl From<HackathonError> for ProgramError {
    fn from(value: HackathonError) -> Self {
        ProgramError::Custom(value as u32)
    }
}
