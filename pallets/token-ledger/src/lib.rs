#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are generated with `#[pallet::getter]`, which is deprecated upstream
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Token Ledger Pallet
//!
//! A single fungible token: balances, delegated allowances and an issuer that
//! may expand or contract the supply.
//!
//! Every dispatchable validates all of its preconditions before the first
//! storage write, so a rejected call leaves balances, allowances, supply and
//! the event log untouched. The sum of all balances always equals
//! [`TotalSupply`].
//!
//! The "null account" is the account id decoded from an all-zero byte stream.
//! It never holds a balance and is only used as the symbolic source of minted
//! tokens and the destination of burned ones in [`Event::Transfer`].
//!
//! `approve` overwrites the previous allowance instead of adjusting it. A
//! spender watching the pool can use the old allowance before the new one is
//! applied, so owners changing a non-zero allowance should set it to zero
//! first.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::{traits::TrailingZeroInput, ArithmeticError};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::token-ledger";

/// Display precision of the token, fixed for every ledger.
pub const DECIMALS: u8 = 18;

/// Maximum length of the token name in bytes.
pub type NameLimit = ConstU32<64>;

/// Maximum length of the token symbol in bytes.
pub type SymbolLimit = ConstU32<16>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weight information for the dispatchables of this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Santa Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, NameLimit>, ValueQuery>;

    /// Token symbol (e.g., "SANTA")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, SymbolLimit>, ValueQuery>;

    /// Token decimals, set to [`DECIMALS`] when the ledger is created
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// The account that created the ledger. Sole authority for mint and burn.
    /// Written once and never changed afterwards.
    #[pallet::storage]
    #[pallet::getter(fn issuer)]
    pub type Issuer<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Allowances: owner => spender => amount the spender may still move
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between accounts. `from` is the null account for
        /// newly issued tokens and `to` is the null account for burned ones.
        Transfer { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// `spender` may now move up to `amount` out of `owner`'s balance
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The recipient is the null account
        InvalidRecipient,
        /// The account being debited is the null account
        InvalidSender,
        /// The spender is the null account
        InvalidSpender,
        /// Mint or burn targets the null account
        InvalidAccount,
        /// The debited account holds less than the requested amount
        InsufficientBalance,
        /// The caller's remaining allowance is less than the requested amount
        AllowanceExceeded,
        /// Only the issuer may mint or burn
        Unauthorized,
        /// The ledger has already been created
        AlreadyCreated,
        /// Name or symbol is too long
        BadMetadata,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create the ledger with the signer as issuer. The signer is credited
        /// with `initial_supply * 10^DECIMALS` tokens.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create())]
        pub fn create(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            initial_supply: u128,
        ) -> DispatchResult {
            let issuer = ensure_signed(origin)?;
            Self::do_create(issuer, name, symbol, initial_supply)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            let null = Self::null_account();
            ensure!(sender != null, Error::<T>::InvalidSender);
            ensure!(to != null, Error::<T>::InvalidRecipient);

            Self::do_transfer(&sender, &to, amount)
        }

        /// Set the amount `spender` may move out of the caller's balance.
        /// Replaces any previous allowance.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(spender != Self::null_account(), Error::<T>::InvalidSpender);

            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `owner` to `to`, spending the caller's allowance
        /// over `owner`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let null = Self::null_account();
            ensure!(owner != null, Error::<T>::InvalidSender);
            ensure!(to != null, Error::<T>::InvalidRecipient);
            ensure!(Balances::<T>::get(&owner) >= amount, Error::<T>::InsufficientBalance);
            let remaining = Allowances::<T>::get(&owner, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::AllowanceExceeded)?;

            Self::do_transfer(&owner, &to, amount)?;
            Self::set_allowance(&owner, &spender, remaining);
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, account: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_issuer(origin)?;
            let null = Self::null_account();
            ensure!(account != null, Error::<T>::InvalidAccount);

            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let balance =
                Balances::<T>::get(&account).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(supply);
            Self::set_balance(&account, balance);
            log::debug!(target: LOG_TARGET, "minted {} to {:?}", amount, account);
            Self::deposit_event(Event::Transfer { from: null, to: account, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, account: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_issuer(origin)?;
            let null = Self::null_account();
            ensure!(account != null, Error::<T>::InvalidAccount);

            let balance = Balances::<T>::get(&account);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);
            let supply =
                TotalSupply::<T>::get().checked_sub(amount).ok_or(ArithmeticError::Underflow)?;

            TotalSupply::<T>::put(supply);
            Self::set_balance(&account, balance - amount);
            log::debug!(target: LOG_TARGET, "burned {} from {:?}", amount, account);
            Self::deposit_event(Event::Transfer { from: account, to: null, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Issuer of the token. The ledger is left uncreated when `None`,
        /// so it can be created later through the `create` call.
        ///
        /// `frame_system` records no events at block 0, so a ledger created
        /// here has no creation `Transfer` in the event log.
        pub issuer: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Supply credited to the issuer, in whole tokens (scaled by 10^DECIMALS)
        pub initial_supply: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref issuer) = self.issuer {
                Pallet::<T>::do_create(
                    issuer.clone(),
                    self.token_name.clone(),
                    self.token_symbol.clone(),
                    self.initial_supply,
                )
                .expect("Invalid token ledger genesis config");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The sentinel "no account" id.
    pub fn null_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    /// Resolve `origin` to the issuer account, rejecting every other caller.
    pub fn ensure_issuer(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Issuer::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    pub(crate) fn do_create(
        issuer: T::AccountId,
        name: Vec<u8>,
        symbol: Vec<u8>,
        initial_supply: u128,
    ) -> DispatchResult {
        ensure!(!Issuer::<T>::exists(), Error::<T>::AlreadyCreated);
        let null = Self::null_account();
        ensure!(issuer != null, Error::<T>::InvalidAccount);

        let name: BoundedVec<u8, NameLimit> = name.try_into().map_err(|_| Error::<T>::BadMetadata)?;
        let symbol: BoundedVec<u8, SymbolLimit> =
            symbol.try_into().map_err(|_| Error::<T>::BadMetadata)?;
        let supply = 10u128
            .checked_pow(DECIMALS.into())
            .and_then(|unit| initial_supply.checked_mul(unit))
            .ok_or(Error::<T>::Overflow)?;

        TokenName::<T>::put(name);
        TokenSymbol::<T>::put(symbol);
        Decimals::<T>::put(DECIMALS);
        Issuer::<T>::put(&issuer);
        TotalSupply::<T>::put(supply);
        Self::set_balance(&issuer, supply);

        log::info!(target: LOG_TARGET, "ledger created by {:?} with supply {}", issuer, supply);
        Self::deposit_event(Event::Transfer { from: null, to: issuer, amount: supply });
        Ok(())
    }

    /// Move `amount` from `from` to `to`. Both accounts must already be known
    /// to be non-null.
    fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
        let debited = from_balance - amount;

        let to_balance = if from == to { debited } else { Balances::<T>::get(to) };
        let credited = to_balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_balance(from, debited);
        Self::set_balance(to, credited);
        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    /// Zero balances are not kept in storage.
    fn set_balance(who: &T::AccountId, balance: u128) {
        if balance == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, balance);
        }
    }

    /// Zero allowances are not kept in storage.
    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    /// Check the ledger invariants: balances sum to the total supply, no zero
    /// balance is stored, the null account holds nothing and any supply has an
    /// issuer behind it.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let supply = TotalSupply::<T>::get();
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        if sum != supply {
            log::warn!(target: LOG_TARGET, "balances sum to {} but supply is {}", sum, supply);
            return Err("sum of balances does not match total supply".into());
        }
        ensure!(Balances::<T>::iter_values().all(|b| b != 0), "zero balance kept in storage");
        ensure!(Balances::<T>::get(Self::null_account()) == 0, "null account holds a balance");
        ensure!(supply == 0 || Issuer::<T>::exists(), "supply exists without an issuer");
        Ok(())
    }
}
