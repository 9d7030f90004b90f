//! Weights for pallet-token-ledger.
//!
//! Placeholder figures until the benchmarks in `benchmarking.rs` are run on
//! reference hardware. Each call performs a fixed number of storage accesses,
//! so every weight is constant.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-token-ledger.
pub trait WeightInfo {
    fn create() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
}

/// Weights for pallet-token-ledger using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenLedger::Issuer` (r:1 w:1)
    /// Storage: `TokenLedger::TokenName` (r:0 w:1)
    /// Storage: `TokenLedger::TokenSymbol` (r:0 w:1)
    /// Storage: `TokenLedger::Decimals` (r:0 w:1)
    /// Storage: `TokenLedger::TotalSupply` (r:0 w:1)
    /// Storage: `TokenLedger::Balances` (r:0 w:1)
    fn create() -> Weight {
        Weight::from_parts(18_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(6_u64))
    }
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(22_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    fn transfer_from() -> Weight {
        Weight::from_parts(30_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `TokenLedger::Issuer` (r:1 w:0)
    /// Storage: `TokenLedger::TotalSupply` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::Issuer` (r:1 w:0)
    /// Storage: `TokenLedger::TotalSupply` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn create() -> Weight {
        Weight::from_parts(18_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(22_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(30_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
