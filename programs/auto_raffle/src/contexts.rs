// programs/auto_raffle/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::Raffle;

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [crate::RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: system-owned vault PDA, holds lamports, no data
    #[account(
        init,
        payer = admin,
        space = 0,
        owner = anchor_lang::solana_program::system_program::ID,
        seeds = [crate::VAULT_SEED, raffle.key().as_ref()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: system-owned vault PDA. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

/// No signer constraint: any keeper may advance the raffle once it is ready.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

/// remaining_accounts: must include the winner's account (writable).
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: system-owned vault PDA. Address enforced by seeds/bump.
    #[account(
        mut,
        seeds = [crate::VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump
    )]
    pub vault: UncheckedAccount<'info>,

    /// Checked against `raffle.coordinator` in the handler.
    pub coordinator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [crate::RAFFLE_SEED],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}
