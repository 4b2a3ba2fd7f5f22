#![no_std]

multiversx_sc::imports!();

pub mod mock_price_feed_proxy;

const VERSION: u64 = 4;
const DESCRIPTION: &[u8] = b"EGLD / USD";

/// Stand-in aggregator for local deployments and tests. Whoever calls
/// `updateAnswer` sets the price.
#[multiversx_sc::contract]
pub trait MockPriceFeed {
    #[init]
    fn init(&self, decimals: u8, initial_answer: BigUint) {
        self.decimals().set(decimals);
        self.update_answer(initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(updateAnswer)]
    fn update_answer(&self, answer: BigUint) {
        let round_id = self.latest_round().get() + 1;
        let now = self.blockchain().get_block_timestamp();

        self.latest_answer().set(&answer);
        self.latest_round().set(round_id);
        self.latest_timestamp().set(now);

        self.answer_updated_event(round_id, &answer, now);
    }

    #[view(latestRoundData)]
    fn latest_round_data(&self) -> MultiValue5<u64, BigUint, u64, u64, u64> {
        let round_id = self.latest_round().get();
        let updated_at = self.latest_timestamp().get();
        (
            round_id,
            self.latest_answer().get(),
            updated_at,
            updated_at,
            round_id,
        )
            .into()
    }

    #[view(version)]
    fn version(&self) -> u64 {
        VERSION
    }

    #[view(description)]
    fn description(&self) -> ManagedBuffer {
        ManagedBuffer::from(DESCRIPTION)
    }

    #[event("answerUpdated")]
    fn answer_updated_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] answer: &BigUint,
        updated_at: u64,
    );

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("latestAnswer")]
    fn latest_answer(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("latestRound")]
    fn latest_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("latestTimestamp")]
    fn latest_timestamp(&self) -> SingleValueMapper<u64>;
}
