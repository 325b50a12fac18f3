// Centralized Program Constants

// Randomness Request Parameters
// =============================

/// Block confirmations the coordinator waits before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per round. Winner selection only consumes the first.
pub const NUM_WORDS: u32 = 1;

// Account Bounds
// ==============

/// Upper bound on players per round. Keeps the raffle account size deterministic;
/// 128 * 32 bytes stays well under the 10 KiB CPI allocation limit.
pub const MAX_PLAYERS: usize = 128;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
