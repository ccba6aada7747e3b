//! Pieces shared by the ledger, gateway and governance programs.

use anchor_lang::prelude::*;

/// Fee units where 10000 = 100%.
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Coarse classification of every program error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero amounts, out-of-range parameters, malformed addresses
    Validation,
    /// Caller is not in the permitted set for the action
    Authorization,
    /// Operation not allowed in the current state (paused, insufficient balance)
    State,
    /// Computed value under- or overflows
    Arithmetic,
    /// One-time wiring attempted twice
    Configuration,
}

/// Implemented by each program's error enum.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

/// Two-step ownership slot.
///
/// The current owner offers control to a new key, which must explicitly
/// accept before authority moves. Until then the current owner keeps full
/// authority and may overwrite the offer.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ownership {
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,
}

impl Ownership {
    pub const LEN: usize = 32 + // owner
        1 + 32; // pending_owner

    pub fn new(owner: Pubkey) -> Self {
        Self {
            owner,
            pending_owner: None,
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn require_owner(&self, key: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *key, error::CommonError::NotOwner);
        Ok(())
    }

    /// Offer ownership to `new_owner`. Replaces any earlier offer.
    pub fn offer(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            new_owner != Pubkey::default(),
            error::CommonError::InvalidAddress
        );
        self.pending_owner = Some(new_owner);
        Ok(())
    }

    /// Complete a pending offer. Returns the previous owner.
    pub fn accept(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        let pending = self
            .pending_owner
            .ok_or_else(|| error!(error::CommonError::NoPendingOwner))?;
        require_keys_eq!(pending, *caller, error::CommonError::NotPendingOwner);

        let previous = std::mem::replace(&mut self.owner, pending);
        self.pending_owner = None;
        Ok(previous)
    }
}

/// Checked arithmetic that fails the instruction instead of wrapping
pub mod bounds {
    use super::*;

    pub fn checked_add(a: u64, b: u64) -> Result<u64> {
        a.checked_add(b)
            .ok_or(error::CommonError::ArithmeticOverflow.into())
    }

    pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
        a.checked_sub(b)
            .ok_or(error::CommonError::ArithmeticOverflow.into())
    }

    /// `floor(amount * bps / 10000)`, computed in 128 bits.
    pub fn basis_points_of(amount: u64, bps: u16) -> Result<u64> {
        let scaled = u128::from(amount) * u128::from(bps) / u128::from(BASIS_POINTS_DENOMINATOR);
        u64::try_from(scaled).map_err(|_| error::CommonError::ArithmeticOverflow.into())
    }
}

/// Common errors
pub mod error {
    use super::*;

    #[error_code(offset = 6000)]
    pub enum CommonError {
        #[msg("Only the owner can perform this action")]
        NotOwner,
        #[msg("No ownership transfer is pending")]
        NoPendingOwner,
        #[msg("Only the pending owner can accept ownership")]
        NotPendingOwner,
        #[msg("Invalid address")]
        InvalidAddress,
        #[msg("Arithmetic overflow")]
        ArithmeticOverflow,
    }

    impl Classify for CommonError {
        fn kind(&self) -> ErrorKind {
            match self {
                CommonError::NotOwner | CommonError::NotPendingOwner => ErrorKind::Authorization,
                CommonError::NoPendingOwner => ErrorKind::State,
                CommonError::InvalidAddress => ErrorKind::Validation,
                CommonError::ArithmeticOverflow => ErrorKind::Arithmetic,
            }
        }
    }
}
