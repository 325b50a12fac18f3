use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};

use crate::{errors::RaffleError, utils::VAULT_SEED};

/// Moves the settled pool to the winner. Any error aborts the settlement.
pub trait PrizePayout {
    fn transfer_prize(&mut self, winner: &Pubkey, lamports: u64) -> Result<()>;
}

/// Pays out of the vault PDA with a vault-signed system transfer.
/// The winner's account has to be among `candidates` (the instruction's remaining accounts).
pub struct VaultPayout<'a, 'info> {
    pub raffle: Pubkey,
    pub vault: AccountInfo<'info>,
    pub vault_bump: u8,
    pub system_program: AccountInfo<'info>,
    pub candidates: &'a [AccountInfo<'info>],
}

impl<'a, 'info> PrizePayout for VaultPayout<'a, 'info> {
    fn transfer_prize(&mut self, winner: &Pubkey, lamports: u64) -> Result<()> {
        let recipient = self
            .candidates
            .iter()
            .find(|ai| ai.key == winner)
            .ok_or_else(|| error!(RaffleError::WinnerAccountMissing))?;
        require!(recipient.is_writable, RaffleError::WinnerAccountNotWritable);

        if lamports == 0 {
            return Ok(());
        }

        let ix = system_instruction::transfer(self.vault.key, winner, lamports);

        let signer_seeds: &[&[u8]] = &[VAULT_SEED, self.raffle.as_ref(), &[self.vault_bump]];

        invoke_signed(
            &ix,
            &[
                self.vault.clone(),
                recipient.clone(),
                self.system_program.clone(),
            ],
            &[signer_seeds],
        )?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// Records transfers instead of moving lamports; can be told to reject.
    #[derive(Default)]
    pub struct FakePayout {
        pub transfers: Vec<(Pubkey, u64)>,
        pub reject: bool,
    }

    impl PrizePayout for FakePayout {
        fn transfer_prize(&mut self, winner: &Pubkey, lamports: u64) -> Result<()> {
            if self.reject {
                return Err(ProgramError::InvalidAccountData.into());
            }
            self.transfers.push((*winner, lamports));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account<'a>(
        key: &'a Pubkey,
        owner: &'a Pubkey,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        writable: bool,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, false, writable, lamports, data, owner, false, 0)
    }

    #[test]
    fn vault_payout_requires_winner_account() {
        let system = anchor_lang::solana_program::system_program::ID;
        let raffle = Pubkey::new_unique();
        let vault_key = Pubkey::new_unique();
        let other_key = Pubkey::new_unique();
        let winner = Pubkey::new_unique();

        let (mut vault_lamports, mut other_lamports, mut sys_lamports) = (10u64, 0u64, 0u64);
        let (mut d1, mut d2, mut d3) = ([0u8; 0], [0u8; 0], [0u8; 0]);

        let vault = account(&vault_key, &system, &mut vault_lamports, &mut d1, true);
        let system_program = account(&system, &system, &mut sys_lamports, &mut d3, false);
        let candidates = [account(&other_key, &system, &mut other_lamports, &mut d2, true)];

        let mut payout = VaultPayout {
            raffle,
            vault,
            vault_bump: 255,
            system_program,
            candidates: &candidates,
        };

        assert!(payout.transfer_prize(&winner, 5).is_err());
    }

    #[test]
    fn vault_payout_rejects_read_only_winner() {
        let system = anchor_lang::solana_program::system_program::ID;
        let raffle = Pubkey::new_unique();
        let vault_key = Pubkey::new_unique();
        let winner = Pubkey::new_unique();

        let (mut vault_lamports, mut winner_lamports, mut sys_lamports) = (10u64, 0u64, 0u64);
        let (mut d1, mut d2, mut d3) = ([0u8; 0], [0u8; 0], [0u8; 0]);

        let vault = account(&vault_key, &system, &mut vault_lamports, &mut d1, true);
        let system_program = account(&system, &system, &mut sys_lamports, &mut d3, false);
        let candidates = [account(&winner, &system, &mut winner_lamports, &mut d2, false)];

        let mut payout = VaultPayout {
            raffle,
            vault,
            vault_bump: 255,
            system_program,
            candidates: &candidates,
        };

        assert!(payout.transfer_prize(&winner, 5).is_err());
        // zero prize still validates the account
        assert!(payout.transfer_prize(&winner, 0).is_err());
    }
}
