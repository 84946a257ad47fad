use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    NotFound = 2,
    InvalidAmount = 3,
    AlreadyVoted = 4,
    InsufficientVotes = 5,
    TimelockNotElapsed = 6,
    TransferFailed = 7,
}
