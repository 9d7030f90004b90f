//! Benchmarking setup for pallet-token-ledger

use super::*;

#[allow(unused)]
use crate::Pallet as TokenLedger;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

const SEED: u32 = 0;

/// Create the ledger with `issuer` holding `balance`, bypassing `create`.
fn set_up_ledger<T: Config>(issuer: &T::AccountId, balance: u128) {
    Issuer::<T>::put(issuer);
    if balance > 0 {
        Balances::<T>::insert(issuer, balance);
    }
    TotalSupply::<T>::put(balance);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create() {
        let caller: T::AccountId = whitelisted_caller();
        let name = vec![b'n'; 64];
        let symbol = vec![b's'; 16];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), name, symbol, 1_000);

        assert_eq!(Issuer::<T>::get(), Some(caller.clone()));
        assert_eq!(Balances::<T>::get(&caller), TotalSupply::<T>::get());
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        set_up_ledger::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        set_up_ledger::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, 2 * amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), amount);
    }

    #[benchmark]
    fn mint() {
        let issuer: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        set_up_ledger::<T>(&issuer, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(TotalSupply::<T>::get(), amount);
    }

    #[benchmark]
    fn burn() {
        let issuer: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;
        set_up_ledger::<T>(&issuer, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer.clone()), issuer.clone(), amount);

        assert_eq!(Balances::<T>::get(&issuer), 0);
        assert_eq!(TotalSupply::<T>::get(), 0);
    }

    impl_benchmark_test_suite!(TokenLedger, crate::mock::new_uncreated_ext(), crate::mock::Test);
}
