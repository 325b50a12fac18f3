use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, REQUEST_CONFIRMATIONS},
    coordinator::{EventCoordinator, RandomWordsRequest, RandomnessCoordinator},
    errors::RaffleError,
    events::RaffleWinnerRequested,
    state::Raffle,
    utils::{elapsed_at_least, UpkeepCheck},
    CheckUpkeep, PerformUpkeep,
};

/// Readiness predicate plus the snapshot callers need when it is false. Pure.
pub fn upkeep_status(raffle: &Raffle, now: i64) -> UpkeepCheck {
    let time_passed = elapsed_at_least(raffle.last_timestamp, now, raffle.interval);
    let has_players = !raffle.players.is_empty();

    UpkeepCheck {
        upkeep_needed: time_passed && raffle.is_open() && has_players,
        perform_data: Vec::new(),
        balance: raffle.pool_lamports,
        players_count: raffle.players_count(),
        state: raffle.state,
    }
}

/// OPEN -> CALCULATING: re-checks readiness, asks the coordinator for words and
/// records the returned handle. Nothing is written unless every step succeeds.
pub fn request_winner<C: RandomnessCoordinator>(
    raffle: &mut Raffle,
    now: i64,
    coordinator: &mut C,
) -> Result<u64> {
    let status = upkeep_status(raffle, now);
    if !status.upkeep_needed {
        msg!(
            "Upkeep not needed: balance={} players={} state={:?}",
            status.balance,
            status.players_count,
            status.state
        );
        return Err(error!(RaffleError::UpkeepNotReady).with_values((
            format!("balance={} players={}", status.balance, status.players_count),
            format!("{:?}", status.state),
        )));
    }

    let request = RandomWordsRequest {
        key_hash: raffle.key_hash,
        subscription_id: raffle.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: raffle.callback_gas_limit,
        num_words: NUM_WORDS,
        nonce: raffle.request_nonce,
    };
    let request_id = coordinator.request_random_words(&request)?;

    raffle.begin_calculating(request_id)?;

    Ok(request_id)
}

// keeper payloads are opaque and ignored
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    Ok(upkeep_status(&ctx.accounts.raffle, now))
}

pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut coordinator = EventCoordinator {
        requester: ctx.accounts.raffle.key(),
    };

    let raffle = &mut ctx.accounts.raffle;
    let request_id = request_winner(raffle, now, &mut coordinator)?;

    msg!("Randomness requested: request_id={}", request_id);
    emit!(RaffleWinnerRequested {
        request_id,
        players_count: raffle.players_count(),
        pool_lamports: raffle.pool_lamports,
    });

    Ok(())
}
