use alloy_primitives::{BlockNumber, B256};

/// A cryptographic commitment summarizing all withdrawals included in a batch,
/// used to verify withdrawal proofs against the settled state.
pub type WithdrawRoot = B256;

/// A finalized rollup batch as recorded by the ingestion process.
///
/// Records are written once when the batch is observed settled on L1 and are
/// read-only thereafter: the withdraw root committed for a batch index never
/// changes retroactively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    /// The index of the batch, assigned sequentially at submission time.
    pub index: u64,
    /// The hash of the committed batch.
    pub hash: B256,
    /// The L1 block number the batch was finalized at.
    pub block_number: BlockNumber,
    /// The withdraw root committed for the batch.
    pub withdraw_root: WithdrawRoot,
}

impl BatchRecord {
    /// Creates a new [`BatchRecord`] instance.
    pub const fn new(
        index: u64,
        hash: B256,
        block_number: BlockNumber,
        withdraw_root: WithdrawRoot,
    ) -> Self {
        Self { index, hash, block_number, withdraw_root }
    }
}

#[cfg(feature = "arbitrary")]
mod arbitrary_impl {
    use super::*;

    impl arbitrary::Arbitrary<'_> for BatchRecord {
        fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
            let index = u.arbitrary::<u32>()? as u64;
            let hash = u.arbitrary::<B256>()?;
            let block_number = u.arbitrary::<u32>()? as u64;
            let withdraw_root = u.arbitrary::<B256>()?;

            Ok(Self { index, hash, block_number, withdraw_root })
        }
    }
}
