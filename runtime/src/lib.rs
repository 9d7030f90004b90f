#![cfg_attr(not(feature = "std"), no_std)]

//! Runtime hosting the token ledger.
//!
//! Extrinsics are applied one at a time and each dispatch runs inside its own
//! storage layer, so ledger calls never interleave and a failed call commits
//! nothing.

use frame_support::{construct_runtime, derive_impl, traits::ConstU32};
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};


/// Alias to 512-bit hash when used in the context of a transaction signature on the chain.
pub type Signature = MultiSignature;

/// Some way of identifying an account on the chain.
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

pub type Nonce = u32;
pub type BlockNumber = u32;

/// The address format for describing accounts.
pub type Address = MultiAddress<AccountId, ()>;

pub type Header = generic::Header<BlockNumber, BlakeTwo256>;

/// The transaction extensions that are added to the runtime.
pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;

pub type Block = generic::Block<Header, UncheckedExtrinsic>;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        TokenLedger: pallet_token_ledger,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type BlockHashCount = ConstU32<2400>;
}

impl pallet_token_ledger::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = pallet_token_ledger::weights::SubstrateWeight<Runtime>;
}

#[cfg(feature = "runtime-benchmarks")]
mod benches {
    frame_benchmarking::define_benchmarks!([pallet_token_ledger, TokenLedger]);
}
