use thiserror::Error;

use super::node::Chain;

/// The allocator could not supply storage for a node or an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory allocation failed")]
pub struct AllocError;

/// A failed append. Carries the chain back to the caller unchanged.
#[derive(Debug, Error)]
#[error("cannot append {value}: {source}")]
pub struct AppendError {
    chain: Chain,
    value: i32,
    #[source]
    source: AllocError,
}

impl AppendError {
    pub(crate) fn new(chain: Chain, value: i32, source: AllocError) -> Self {
        Self {
            chain,
            value,
            source,
        }
    }

    /// The value that could not be appended.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Takes back the chain the append was attempted on.
    pub fn into_chain(self) -> Chain {
        self.chain
    }
}
