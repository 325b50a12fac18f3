use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, REQUEST_CONFIRMATIONS},
    errors::RaffleError,
    state::{Raffle, RaffleState},
    ReadRaffle,
};

pub fn player_at(raffle: &Raffle, index: u64) -> Result<Pubkey> {
    let i = usize::try_from(index).map_err(|_| error!(RaffleError::PlayerIndexOutOfRange))?;
    raffle
        .players
        .get(i)
        .copied()
        .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfRange))
}

pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.entrance_fee)
}

pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.state)
}

pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    player_at(&ctx.accounts.raffle, index)
}

pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.players_count())
}

pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Pubkey> {
    Ok(ctx.accounts.raffle.recent_winner)
}

pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_timestamp)
}

pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.interval)
}

pub fn get_pool_lamports(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.pool_lamports)
}

pub fn get_num_words(_ctx: Context<ReadRaffle>) -> Result<u32> {
    Ok(NUM_WORDS)
}

pub fn get_request_confirmations(_ctx: Context<ReadRaffle>) -> Result<u16> {
    Ok(REQUEST_CONFIRMATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::*;

    #[test]
    fn player_at_returns_players_in_entry_order() {
        let mut raffle = fresh_raffle();
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        raffle.players = vec![a, b];

        assert_eq!(player_at(&raffle, 0).unwrap(), a);
        assert_eq!(player_at(&raffle, 1).unwrap(), b);

        let err = player_at(&raffle, 2).unwrap_err();
        assert_eq!(code(err), expected(RaffleError::PlayerIndexOutOfRange));
        assert!(player_at(&raffle, u64::MAX).is_err());
    }
}
