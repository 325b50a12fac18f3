use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // -----------------
    // Entry
    // -----------------
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,
    #[msg("Raffle is not open")]
    RoundNotOpen,
    #[msg("Raffle is full")]
    RaffleFull,

    // -----------------
    // Upkeep
    // -----------------
    #[msg("Upkeep not needed")]
    UpkeepNotReady,

    // -----------------
    // Fulfillment
    // -----------------
    #[msg("Only the configured coordinator can fulfill")]
    UnauthorizedCoordinator,
    #[msg("Request id does not match the pending request")]
    RequestMismatch,
    #[msg("No random words delivered")]
    EmptyRandomWords,
    #[msg("Prize transfer to winner failed")]
    PayoutTransferFailed,
    #[msg("Winner account not supplied")]
    WinnerAccountMissing,
    #[msg("Winner account must be writable")]
    WinnerAccountNotWritable,

    // -----------------
    // Config
    // -----------------
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Callback gas limit must be greater than zero")]
    InvalidCallbackGasLimit,
    #[msg("Coordinator pubkey not set")]
    CoordinatorNotSet,

    // -----------------
    // Misc
    // -----------------
    #[msg("Player index out of range")]
    PlayerIndexOutOfRange,
    #[msg("Math overflow")]
    MathOverflow,
}
