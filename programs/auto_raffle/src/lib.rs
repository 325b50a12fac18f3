use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod coordinator;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod payout;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Auto Raffle",
    project_url: "https://github.com/auto-raffle/auto-raffle",
    contacts: "link:https://github.com/auto-raffle/auto-raffle/issues",
    policy: "https://github.com/auto-raffle/auto-raffle/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://github.com/auto-raffle/auto-raffle"
}

declare_id!("8ZpLGtdRxW3NcWBuS2d3aTgE1LxRbGkn6fVQe9nWBvHM");

#[program]
pub mod auto_raffle {
    use super::*;
    use crate::instructions::{admin, enter, fulfill, getters, upkeep};

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: RaffleParams) -> Result<()> {
        admin::initialize_raffle(ctx, params)
    }

    // ----------------------------
    // Round lifecycle
    // ----------------------------
    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        enter::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        upkeep::perform_upkeep(ctx, perform_data)
    }

    // remaining_accounts: winner
    pub fn fulfill_random_words<'info>(
        ctx: Context<'_, '_, 'info, 'info, FulfillRandomWords<'info>>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        fulfill::fulfill_random_words(ctx, request_id, random_words)
    }

    // ----------------------------
    // Views
    // ----------------------------
    pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
        getters::get_entrance_fee(ctx)
    }

    pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
        getters::get_raffle_state(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        getters::get_player(ctx, index)
    }

    pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
        getters::get_number_of_players(ctx)
    }

    pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Pubkey> {
        getters::get_recent_winner(ctx)
    }

    pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
        getters::get_last_timestamp(ctx)
    }

    pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<u64> {
        getters::get_interval(ctx)
    }

    pub fn get_pool_lamports(ctx: Context<ReadRaffle>) -> Result<u64> {
        getters::get_pool_lamports(ctx)
    }

    pub fn get_num_words(ctx: Context<ReadRaffle>) -> Result<u32> {
        getters::get_num_words(ctx)
    }

    pub fn get_request_confirmations(ctx: Context<ReadRaffle>) -> Result<u16> {
        getters::get_request_confirmations(ctx)
    }
}
