use anchor_lang::prelude::*;

#[event]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub vault: Pubkey,
    pub entrance_fee: u64,
    pub interval: u64,
    pub coordinator: Pubkey,
    pub start_ts: i64,
}

#[event]
pub struct EntryRecorded {
    pub player: Pubkey,
    pub amount: u64,
    pub players_count: u64,
}

/// Consumed by the off-chain coordinator. Carries everything it needs to answer.
#[event]
pub struct RandomWordsRequested {
    pub request_id: u64,
    pub requester: Pubkey,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub nonce: u64,
}

#[event]
pub struct RaffleWinnerRequested {
    pub request_id: u64,
    pub players_count: u64,
    pub pool_lamports: u64,
}

#[event]
pub struct WinnerPicked {
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
    pub round: u64,
}

