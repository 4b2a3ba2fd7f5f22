multiversx_sc::imports!();

use multiversx_sc::api::ManagedTypeApi;

use crate::price_feed_proxy;

// ============================================================
// Fixed-point constants
// ============================================================

/// All USD values handled by the contract carry 18 decimals.
pub const WAD_DECIMALS: u8 = 18;

/// 10^18, one whole unit at WAD precision (also one EGLD in its smallest unit)
pub const WAD: u64 = 1_000_000_000_000_000_000;

pub const ERR_INVALID_PRICE: &str = "Invalid price feed answer";
pub const ERR_UNSUPPORTED_DECIMALS: &str = "Unsupported price feed decimals";

/// Rescales a feed answer carrying `decimals` decimals to WAD precision.
/// Callers must reject `decimals > WAD_DECIMALS` first.
pub fn scale_to_wad<M: ManagedTypeApi>(answer: &BigUint<M>, decimals: u8) -> BigUint<M> {
    let exponent = (WAD_DECIMALS - decimals) as u32;
    answer * &BigUint::from(10u64).pow(exponent)
}

/// USD value (WAD) of `amount` smallest native units at `price_wad` USD per unit.
/// Truncates toward zero.
pub fn usd_value<M: ManagedTypeApi>(price_wad: &BigUint<M>, amount: &BigUint<M>) -> BigUint<M> {
    (price_wad * amount) / BigUint::from(WAD)
}

#[multiversx_sc::module]
pub trait PriceConverterModule {
    /// Current EGLD price in USD, scaled to 18 decimals.
    #[view(getPrice)]
    fn get_price(&self) -> BigUint {
        let feed = self.price_feed_address().get();

        let round_data: MultiValue5<u64, BigUint, u64, u64, u64> = self
            .tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let (_round_id, answer, _started_at, _updated_at, _answered_in_round) =
            round_data.into_tuple();
        require!(answer > 0u64, ERR_INVALID_PRICE);

        let decimals: u8 = self
            .tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(decimals <= WAD_DECIMALS, ERR_UNSUPPORTED_DECIMALS);

        scale_to_wad(&answer, decimals)
    }

    #[view(getConversionRate)]
    fn get_conversion_rate(&self, egld_amount: BigUint) -> BigUint {
        let price = self.get_price();
        usd_value(&price, &egld_amount)
    }

    #[view(getPriceFeedVersion)]
    fn price_feed_version(&self) -> u64 {
        let feed = self.price_feed_address().get();
        self.tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .version()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getPriceFeed)]
    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;
}
