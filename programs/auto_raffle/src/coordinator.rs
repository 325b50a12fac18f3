use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::events::RandomWordsRequested;

/// Parameters handed to the randomness coordinator for one round.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomWordsRequest {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub nonce: u64,
}

/// The external randomness oracle, seen from the raffle.
///
/// `request_random_words` returns the correlation handle the coordinator will
/// echo back in `fulfill_random_words`. It must not block on the answer.
pub trait RandomnessCoordinator {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64>;
}

/// On-chain coordinator binding: derives the request id deterministically and
/// publishes the request as an event for the off-chain oracle to pick up.
pub struct EventCoordinator {
    pub requester: Pubkey,
}

impl RandomnessCoordinator for EventCoordinator {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
        let request_id = derive_request_id(
            &request.key_hash,
            &self.requester,
            request.subscription_id,
            request.nonce,
        );

        emit!(RandomWordsRequested {
            request_id,
            requester: self.requester,
            key_hash: request.key_hash,
            subscription_id: request.subscription_id,
            request_confirmations: request.request_confirmations,
            callback_gas_limit: request.callback_gas_limit,
            num_words: request.num_words,
            nonce: request.nonce,
        });

        Ok(request_id)
    }
}

// -------------------------
// Request id
// -------------------------
pub fn derive_request_id(
    key_hash: &[u8; 32],
    requester: &Pubkey,
    subscription_id: u64,
    nonce: u64,
) -> u64 {
    let h = hashv(&[
        b"auto_raffle:vrf_request_v1".as_ref(),
        key_hash.as_ref(),
        requester.as_ref(),
        subscription_id.to_le_bytes().as_ref(),
        nonce.to_le_bytes().as_ref(),
    ])
    .to_bytes();

    u64::from_le_bytes([h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7]])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_matches_manual_hash() {
        let key_hash = [3u8; 32];
        let requester = Pubkey::new_unique();

        let h = hashv(&[
            b"auto_raffle:vrf_request_v1".as_ref(),
            key_hash.as_ref(),
            requester.as_ref(),
            9u64.to_le_bytes().as_ref(),
            0u64.to_le_bytes().as_ref(),
        ])
        .to_bytes();
        let mut first = [0u8; 8];
        first.copy_from_slice(&h[..8]);

        assert_eq!(
            derive_request_id(&key_hash, &requester, 9, 0),
            u64::from_le_bytes(first)
        );
    }

    #[test]
    fn request_id_changes_with_nonce() {
        let key_hash = [3u8; 32];
        let requester = Pubkey::new_unique();

        let a = derive_request_id(&key_hash, &requester, 9, 0);
        let b = derive_request_id(&key_hash, &requester, 9, 1);
        assert_ne!(a, b);
        assert_eq!(a, derive_request_id(&key_hash, &requester, 9, 0));
    }

    #[test]
    fn event_coordinator_returns_derived_id() {
        let requester = Pubkey::new_unique();
        let request = RandomWordsRequest {
            key_hash: [1u8; 32],
            subscription_id: 5,
            request_confirmations: 3,
            callback_gas_limit: 100_000,
            num_words: 1,
            nonce: 4,
        };

        let mut coordinator = EventCoordinator { requester };
        let id = coordinator.request_random_words(&request).unwrap();
        assert_eq!(id, derive_request_id(&[1u8; 32], &requester, 5, 4));
    }
}
