use super::arena::Chain;
use crate::common::ConfigBuilder;
use crate::error::ChainLoopError;

/// Builds a chain shaped as a tail followed by an optional loop
///
/// Payloads are linked in the order given. With `with_loop_back_to(Some(i))`
/// the last node links back to the `i`-th node, which becomes the entry node.
pub struct ChainBuilder<T> {
    payloads: Vec<T>,
    loop_back_to: Option<usize>,
}

impl<T> Default for ChainBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainBuilder<T> {
    pub fn new() -> Self {
        Self {
            payloads: Vec::new(),
            loop_back_to: None,
        }
    }

    pub fn with_payloads(mut self, payloads: impl IntoIterator<Item = T>) -> Self {
        self.payloads.extend(payloads);
        self
    }

    pub fn with_payload(mut self, payload: T) -> Self {
        self.payloads.push(payload);
        self
    }

    pub fn with_loop_back_to(mut self, index: Option<usize>) -> Self {
        self.loop_back_to = index;
        self
    }
}

impl<T> ConfigBuilder for ChainBuilder<T> {
    type Config = Chain<T>;

    fn build(self) -> Result<Self::Config, ChainLoopError> {
        let len = self.payloads.len();
        if let Some(target) = self.loop_back_to
            && target >= len
        {
            return Err(ChainLoopError::ConfigurationError {
                message: format!("Loop target {target} is out of range for {len} nodes"),
            });
        }

        let mut chain = Chain::with_capacity(len);
        let ids: Vec<_> = self
            .payloads
            .into_iter()
            .map(|payload| chain.push(payload))
            .collect();

        for pair in ids.windows(2) {
            chain.link(pair[0], pair[1])?;
        }
        if let (Some(target), Some(&last)) = (self.loop_back_to, ids.last()) {
            chain.link(last, ids[target])?;
        }
        chain.set_head(ids.first().copied())?;

        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Successors;

    #[test]
    fn test_builds_acyclic_chain() {
        let chain = ChainBuilder::new()
            .with_payloads(["a", "b", "c"])
            .build()
            .unwrap();

        let order: Vec<_> = chain
            .walk()
            .map(|id| *chain.payload(id).unwrap())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_builds_loop_back_to_entry() {
        let chain = ChainBuilder::new()
            .with_payloads(["a", "b", "c", "d"])
            .with_loop_back_to(Some(1))
            .build()
            .unwrap();

        let ids: Vec<_> = chain.iter().map(|(id, _)| id).collect();
        assert_eq!(chain.successor(ids[3]), Some(ids[1]));
        assert_eq!(chain.head(), Some(ids[0]));
    }

    #[test]
    fn test_empty_builder_yields_empty_chain() {
        let chain: Chain<u32> = ChainBuilder::new().build().unwrap();
        assert!(chain.is_empty());
        assert_eq!(chain.head(), None);
    }

    #[test]
    fn test_loop_target_out_of_range() {
        let result = ChainBuilder::new()
            .with_payload(1)
            .with_loop_back_to(Some(1))
            .build();

        assert!(matches!(
            result,
            Err(ChainLoopError::ConfigurationError { .. })
        ));
    }
}
