use soroban_sdk::contracterror;

/// Failure kinds surfaced by every vault entry point.
///
/// Codes are part of the public interface: clients match on the numeric
/// value, so existing discriminants must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    /// Caller does not hold the manager role.
    UnauthorizedManager = 1,
    /// Caller does not hold the emergency role.
    UnauthorizedEmergency = 2,
    /// Caller is not the current beneficiary.
    UnauthorizedBeneficiary = 3,
    /// The position has already been paid out.
    AlreadyClaimed = 4,
    /// The position's lock has not elapsed yet.
    NotVestedYet = 5,
    /// The vault was drained by `ragequit`; deposits and claims are disabled.
    Frozen = 6,
    /// `sweep` was pointed at the custodied vesting asset.
    ProtectedAsset = 7,
    /// The reward registry has no allocation root for the requested asset.
    NoAllocation = 8,
    /// Emergency destination is the vault itself.
    InvalidDestination = 9,
    /// A token, yield-source or registry call failed.
    TransferFailed = 10,
    /// No position was ever created under this nonce.
    UnknownNonce = 11,
}
