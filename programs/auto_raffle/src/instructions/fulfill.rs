use anchor_lang::prelude::*;

use crate::{
    errors::RaffleError,
    events::WinnerPicked,
    payout::{PrizePayout, VaultPayout},
    state::Raffle,
    utils::winner_index,
    FulfillRandomWords,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
    pub round: u64,
}

/// CALCULATING -> OPEN. Validates the callback, picks `players[words[0] % n]`,
/// reopens the raffle and pays the whole pool. If the payout fails the raffle is
/// put back exactly as it was before the call.
pub fn settle_round<P: PrizePayout>(
    raffle: &mut Raffle,
    caller: &Pubkey,
    request_id: u64,
    random_words: &[u64],
    now: i64,
    payout: &mut P,
) -> Result<Settlement> {
    require_keys_eq!(*caller, raffle.coordinator, RaffleError::UnauthorizedCoordinator);

    let pending = match raffle.pending_request {
        Some(id) => id,
        None => {
            msg!("No pending request; got request_id={}", request_id);
            return err!(RaffleError::RequestMismatch);
        }
    };
    if pending != request_id {
        return Err(error!(RaffleError::RequestMismatch).with_values((pending, request_id)));
    }

    let word = *random_words.first().ok_or(RaffleError::EmptyRandomWords)?;
    let index = winner_index(word, raffle.players.len())?;
    let winner = raffle.players[index];

    let checkpoint = raffle.checkpoint();
    let prize = raffle.reopen_with_winner(winner, now)?;

    if let Err(e) = payout.transfer_prize(&winner, prize) {
        raffle.restore(checkpoint);
        msg!("Payout of {} lamports to {} failed: {}", prize, winner, e);
        return err!(RaffleError::PayoutTransferFailed);
    }

    Ok(Settlement {
        request_id,
        winner,
        winner_index: index as u64,
        prize,
        round: raffle.completed_rounds,
    })
}

pub fn fulfill_random_words<'info>(
    ctx: Context<'_, '_, 'info, 'info, FulfillRandomWords<'info>>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.coordinator.key();

    let mut payout = VaultPayout {
        raffle: ctx.accounts.raffle.key(),
        vault: ctx.accounts.vault.to_account_info(),
        vault_bump: ctx.accounts.raffle.vault_bump,
        system_program: ctx.accounts.system_program.to_account_info(),
        candidates: ctx.remaining_accounts,
    };

    let raffle = &mut ctx.accounts.raffle;
    let s = settle_round(raffle, &caller, request_id, &random_words, now, &mut payout)?;

    msg!(
        "Winner picked: round={} winner={} index={} prize={}",
        s.round,
        s.winner,
        s.winner_index,
        s.prize
    );
    emit!(WinnerPicked {
        request_id: s.request_id,
        winner: s.winner,
        winner_index: s.winner_index,
        prize: s.prize,
        round: s.round,
    });

    Ok(())
}
