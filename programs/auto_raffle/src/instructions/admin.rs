use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::RaffleError;
use crate::events::RaffleInitialized;
use crate::state::{Raffle, RaffleState};
use crate::utils::RaffleParams;
use crate::InitializeRaffle;

pub fn validate_params(params: &RaffleParams) -> Result<()> {
    require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);
    require!(params.interval > 0, RaffleError::InvalidInterval);
    require!(params.callback_gas_limit > 0, RaffleError::InvalidCallbackGasLimit);
    require!(params.coordinator != Pubkey::default(), RaffleError::CoordinatorNotSet);
    Ok(())
}

/// Writes the initial round: open, empty, window starting at `now`.
pub fn init_raffle_core(raffle: &mut Raffle, admin: Pubkey, params: &RaffleParams, now: i64) {
    raffle.admin = admin;

    raffle.entrance_fee = params.entrance_fee;
    raffle.interval = params.interval;

    raffle.key_hash = params.key_hash;
    raffle.subscription_id = params.subscription_id;
    raffle.callback_gas_limit = params.callback_gas_limit;
    raffle.coordinator = params.coordinator;

    raffle.state = RaffleState::Open;
    raffle.last_timestamp = now;
    raffle.players = Vec::new();
    raffle.pool_lamports = 0;

    raffle.pending_request = None;
    raffle.request_nonce = 0;

    raffle.recent_winner = Pubkey::default();
    raffle.completed_rounds = 0;

    raffle.version = INITIAL_VERSION;
}

pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: RaffleParams) -> Result<()> {
    validate_params(&params)?;

    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let vault_key = ctx.accounts.vault.key();

    let raffle = &mut ctx.accounts.raffle;
    init_raffle_core(raffle, ctx.accounts.admin.key(), &params, now);

    raffle.bump = ctx.bumps.raffle;
    raffle.vault = vault_key;
    raffle.vault_bump = ctx.bumps.vault;

    msg!(
        "Raffle initialized: fee={} interval={}s coordinator={}",
        params.entrance_fee,
        params.interval,
        params.coordinator
    );

    emit!(RaffleInitialized {
        raffle: raffle_key,
        vault: vault_key,
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        coordinator: params.coordinator,
        start_ts: now,
    });

    Ok(())
}
