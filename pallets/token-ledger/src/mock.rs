use crate as pallet_token_ledger;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenLedger: pallet_token_ledger,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_token_ledger::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

pub const ISSUER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;

/// The null account for `u64` ids.
pub const NULL: u64 = 0;

/// One whole token in base units.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Whole tokens credited to the issuer at genesis.
pub const INITIAL_SUPPLY: u128 = 1_000;

// Build genesis storage with the ledger created by `ISSUER`.
pub fn new_test_ext() -> sp_io::TestExternalities {
    ext_with_genesis(pallet_token_ledger::GenesisConfig::<Test> {
        issuer: Some(ISSUER),
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        initial_supply: INITIAL_SUPPLY,
    })
}

// Build genesis storage with no ledger, so `create` can be exercised.
pub fn new_uncreated_ext() -> sp_io::TestExternalities {
    ext_with_genesis(pallet_token_ledger::GenesisConfig::<Test>::default())
}

fn ext_with_genesis(genesis: pallet_token_ledger::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Run `test` against the default genesis and check the ledger invariants afterwards.
pub fn build_and_execute(test: impl FnOnce()) {
    new_test_ext().execute_with(|| {
        test();
        TokenLedger::do_try_state().expect("ledger invariants hold");
    });
}
