use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::errors::RaffleError;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    /// Accepting entries.
    Open,
    /// Randomness requested, waiting for the coordinator callback.
    Calculating,
}

/// The one live raffle. Reused in place across rounds, never closed.
#[account]
#[derive(InitSpace)]
pub struct Raffle {
    pub admin: Pubkey,
    pub bump: u8,

    // System-owned PDA vault (holds lamports, no data)
    pub vault: Pubkey,
    pub vault_bump: u8,

    // fixed at initialize
    pub entrance_fee: u64,
    pub interval: u64,

    // oracle routing, fixed at initialize
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub coordinator: Pubkey,

    // round
    pub state: RaffleState,
    pub last_timestamp: i64,
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
    /// Lamports paid in by the current players. The vault's rent reserve is not part of it.
    pub pool_lamports: u64,

    // Some(id) iff state == Calculating
    pub pending_request: Option<u64>,
    pub request_nonce: u64,

    pub recent_winner: Pubkey,
    pub completed_rounds: u64,

    pub version: u16,
}

/// Copy of every field settlement mutates, taken before the payout leg.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundCheckpoint {
    state: RaffleState,
    last_timestamp: i64,
    players: Vec<Pubkey>,
    pool_lamports: u64,
    pending_request: Option<u64>,
    recent_winner: Pubkey,
    completed_rounds: u64,
}

impl Raffle {
    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }

    pub fn players_count(&self) -> u64 {
        self.players.len() as u64
    }

    /// OPEN -> CALCULATING. The caller has already obtained `request_id` from the coordinator.
    pub(crate) fn begin_calculating(&mut self, request_id: u64) -> Result<()> {
        require!(self.is_open(), RaffleError::RoundNotOpen);
        let next_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        self.state = RaffleState::Calculating;
        self.pending_request = Some(request_id);
        self.request_nonce = next_nonce;

        Ok(())
    }

    /// CALCULATING -> OPEN. Starts the next round with an empty player list;
    /// returns the pool that is now owed to `winner`.
    pub(crate) fn reopen_with_winner(&mut self, winner: Pubkey, now: i64) -> Result<u64> {
        let prize = self.pool_lamports;
        let rounds = self
            .completed_rounds
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        self.state = RaffleState::Open;
        self.pending_request = None;
        self.recent_winner = winner;
        self.players.clear();
        self.pool_lamports = 0;
        self.last_timestamp = now;
        self.completed_rounds = rounds;

        Ok(prize)
    }

    pub(crate) fn checkpoint(&self) -> RoundCheckpoint {
        RoundCheckpoint {
            state: self.state,
            last_timestamp: self.last_timestamp,
            players: self.players.clone(),
            pool_lamports: self.pool_lamports,
            pending_request: self.pending_request,
            recent_winner: self.recent_winner,
            completed_rounds: self.completed_rounds,
        }
    }

    pub(crate) fn restore(&mut self, cp: RoundCheckpoint) {
        self.state = cp.state;
        self.last_timestamp = cp.last_timestamp;
        self.players = cp.players;
        self.pool_lamports = cp.pool_lamports;
        self.pending_request = cp.pending_request;
        self.recent_winner = cp.recent_winner;
        self.completed_rounds = cp.completed_rounds;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::constants::INITIAL_VERSION;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    pub const FEE: u64 = 1;
    pub const INTERVAL: u64 = 60;

    pub fn coordinator() -> Pubkey {
        Pubkey::new_from_array([7u8; 32])
    }

    pub fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(_) => u32::MAX,
        }
    }

    pub fn expected(e: RaffleError) -> u32 {
        e as u32 + ERROR_CODE_OFFSET
    }

    /// Fresh raffle as `initialize_raffle` leaves it, started at t=0.
    pub fn fresh_raffle() -> Raffle {
        Raffle {
            admin: Pubkey::new_unique(),
            bump: 255,
            vault: Pubkey::new_unique(),
            vault_bump: 254,
            entrance_fee: FEE,
            interval: INTERVAL,
            key_hash: [9u8; 32],
            subscription_id: 42,
            callback_gas_limit: 500_000,
            coordinator: coordinator(),
            state: RaffleState::Open,
            last_timestamp: 0,
            players: Vec::new(),
            pool_lamports: 0,
            pending_request: None,
            request_nonce: 0,
            recent_winner: Pubkey::default(),
            completed_rounds: 0,
            version: INITIAL_VERSION,
        }
    }
}
