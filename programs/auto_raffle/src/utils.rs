use anchor_lang::prelude::*;

use crate::{errors::RaffleError, state::RaffleState};

// -----------------
// Seeds / constants
// -----------------
pub const RAFFLE_SEED: &[u8] = b"raffle_v1";
pub const VAULT_SEED: &[u8] = b"raffle_vault_v1";

// ---------------
// Payloads
// ---------------
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct RaffleParams {
    pub entrance_fee: u64,
    pub interval: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub coordinator: Pubkey,
}

/// Returned by `check_upkeep`. The snapshot fields are what `UpkeepNotReady` reports.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub perform_data: Vec<u8>,
    pub balance: u64,
    pub players_count: u64,
    pub state: RaffleState,
}

// -------------------------
// Winner selection
// -------------------------
/// Uniform modulo pick over the current players.
pub fn winner_index(random_word: u64, players_count: usize) -> Result<usize> {
    require!(players_count > 0, RaffleError::PlayerIndexOutOfRange);
    let n = players_count as u64;
    Ok((random_word % n) as usize)
}

pub fn elapsed_at_least(last_timestamp: i64, now: i64, interval: u64) -> bool {
    match u64::try_from(now.saturating_sub(last_timestamp)) {
        Ok(elapsed) => elapsed >= interval,
        // clock behind the recorded start
        Err(_) => false,
    }
}
