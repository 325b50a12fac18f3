use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::constants::MAX_PLAYERS;
use crate::errors::RaffleError;
use crate::events::EntryRecorded;
use crate::state::Raffle;
use crate::EnterRaffle;

/// Appends `player` and credits `amount` to the pool. Nothing is written on error.
pub fn record_entry(raffle: &mut Raffle, player: Pubkey, amount: u64) -> Result<u64> {
    require!(raffle.is_open(), RaffleError::RoundNotOpen);
    require!(amount >= raffle.entrance_fee, RaffleError::InsufficientPayment);
    require!(raffle.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

    let pool = raffle
        .pool_lamports
        .checked_add(amount)
        .ok_or(RaffleError::MathOverflow)?;

    raffle.players.push(player);
    raffle.pool_lamports = pool;

    Ok(raffle.players_count())
}

pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let players_count = record_entry(&mut ctx.accounts.raffle, player, amount)?;

    // --- TRANSFER entry payment to vault ---
    invoke(
        &system_instruction::transfer(&player, &ctx.accounts.vault.key(), amount),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    msg!("Entry recorded: player={} amount={} players={}", player, amount, players_count);
    emit!(EntryRecorded {
        player,
        amount,
        players_count,
    });

    Ok(())
}
