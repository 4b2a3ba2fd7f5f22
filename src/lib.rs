#![no_std]

multiversx_sc::imports!();

pub mod fund_me_proxy;
pub mod price_converter;
pub mod price_feed_proxy;

use price_converter::WAD;

// ============================================================
// Constants
// ============================================================

/// Minimum contribution, in whole USD
const MINIMUM_USD_WHOLE: u64 = 50;

// ============================================================
// Errors
// ============================================================

pub const ERR_NOT_ENOUGH_FUNDS: &str = "You need to spend more EGLD";
pub const ERR_NOT_OWNER: &str = "Only the owner can withdraw";
pub const ERR_FUNDER_INDEX: &str = "Funder index out of range";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe: price_converter::PriceConverterModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, price_feed_address: ManagedAddress) {
        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.price_feed_address().set(&price_feed_address);
    }

    /// Owner and ledger survive upgrades untouched.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // Accepts any EGLD payment worth at least MINIMUM_USD.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            self.get_conversion_rate(payment_amount.clone()) >= self.minimum_usd(),
            ERR_NOT_ENOUGH_FUNDS
        );

        // An empty entry means this is the first contribution since the last reset
        if self.address_to_amount_funded(&caller).is_empty() {
            self.funders().push(&caller);
        }
        self.address_to_amount_funded(&caller)
            .update(|amount| *amount += &payment_amount);

        let total = self.address_to_amount_funded(&caller).get();
        self.fund_event(&caller, &payment_amount, &total);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Sends the whole balance to the owner and clears the ledger.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        if balance > 0u64 {
            self.send().direct_egld(&caller, &balance);
        }

        let funders_cleared = self.reset_ledger();
        self.withdraw_event(&caller, &balance, funders_cleared);
    }

    // ========================================================
    // INTERNAL: ledger reset
    // Clears every per-funder entry, then the ordered sequence.
    // Returns how many funders were removed.
    // ========================================================

    fn reset_ledger(&self) -> usize {
        let count = self.funders().len();
        for funder in self.funders().iter() {
            self.address_to_amount_funded(&funder).clear();
        }
        self.funders().clear();
        count
    }

    fn minimum_usd(&self) -> BigUint {
        BigUint::from(MINIMUM_USD_WHOLE) * BigUint::from(WAD)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Zero-based, in first-contribution order.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        let funders = self.funders();
        require!(index < funders.len(), ERR_FUNDER_INDEX);
        funders.get(index + 1)
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_funded: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        funders_cleared: usize,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    /// Cumulative contribution per funder; empty (reads as zero) once reset.
    #[view(getAddressToAmountFunded)]
    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
