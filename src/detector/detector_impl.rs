use crate::chain::Successors;
use crate::error::ChainLoopError;

/// Outcome of a cycle search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection<N> {
    NoCycle,
    /// The node where the loop begins
    CycleEntry(N),
}

impl<N: Copy> Detection<N> {
    pub fn entry(&self) -> Option<N> {
        match self {
            Detection::NoCycle => None,
            Detection::CycleEntry(entry) => Some(*entry),
        }
    }
}

impl<N> Detection<N> {
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Detection::CycleEntry(_))
    }

    pub fn map<M>(self, f: impl FnOnce(N) -> M) -> Detection<M> {
        match self {
            Detection::NoCycle => Detection::NoCycle,
            Detection::CycleEntry(entry) => Detection::CycleEntry(f(entry)),
        }
    }
}

/// Topology of a chain as seen from its head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainShape<N> {
    Acyclic {
        len: usize,
    },
    Cyclic {
        entry: N,
        /// Steps from the head to the entry node
        tail_len: usize,
        /// Distinct nodes in the loop
        loop_len: usize,
    },
}

impl<N> ChainShape<N> {
    /// Distinct nodes reachable from the head
    pub fn node_count(&self) -> usize {
        match self {
            ChainShape::Acyclic { len } => *len,
            ChainShape::Cyclic {
                tail_len, loop_len, ..
            } => tail_len + loop_len,
        }
    }

    pub fn is_cyclic(&self) -> bool {
        matches!(self, ChainShape::Cyclic { .. })
    }

    pub fn map<M>(self, f: impl FnOnce(N) -> M) -> ChainShape<M> {
        match self {
            ChainShape::Acyclic { len } => ChainShape::Acyclic { len },
            ChainShape::Cyclic {
                entry,
                tail_len,
                loop_len,
            } => ChainShape::Cyclic {
                entry: f(entry),
                tail_len,
                loop_len,
            },
        }
    }
}

impl<N: Copy> ChainShape<N> {
    pub fn detection(&self) -> Detection<N> {
        match self {
            ChainShape::Acyclic { .. } => Detection::NoCycle,
            ChainShape::Cyclic { entry, .. } => Detection::CycleEntry(*entry),
        }
    }
}

/// How the slow/fast race ended
enum Race<N> {
    /// The fast cursor ran off the end of the chain
    Exhausted,
    /// Both cursors landed on this node inside the loop
    Meeting(N),
}

/// Floyd's tortoise-and-hare cycle detector
///
/// Runs in O(n) successor queries and O(1) extra space. The chain is only
/// borrowed, never modified.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    step_limit: Option<usize>,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { step_limit: None }
    }

    /// Cap the number of successor queries a single call may make
    pub fn with_step_limit(mut self, step_limit: Option<usize>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    /// Find the node where the chain starting at `head` loops back
    pub fn detect<C>(
        &self,
        chain: &C,
        head: Option<C::Node>,
    ) -> Result<Detection<C::Node>, ChainLoopError>
    where
        C: Successors + ?Sized,
    {
        let mut cursor = Cursor::new(chain, self.step_limit);
        let Some((head, meeting)) = cursor.race_from(head)? else {
            return Ok(Detection::NoCycle);
        };
        let (entry, _) = cursor.locate_entry(head, meeting)?;
        Ok(Detection::CycleEntry(entry))
    }

    /// Like [`detect`](Self::detect), also measuring tail and loop lengths
    pub fn measure<C>(
        &self,
        chain: &C,
        head: Option<C::Node>,
    ) -> Result<ChainShape<C::Node>, ChainLoopError>
    where
        C: Successors + ?Sized,
    {
        let mut cursor = Cursor::new(chain, self.step_limit);
        let Some((head, meeting)) = cursor.race_from(head)? else {
            let len = match head {
                Some(head) => cursor.run_length(head)?,
                None => 0,
            };
            return Ok(ChainShape::Acyclic { len });
        };
        let (entry, tail_len) = cursor.locate_entry(head, meeting)?;
        let loop_len = cursor.loop_length(entry)?;
        Ok(ChainShape::Cyclic {
            entry,
            tail_len,
            loop_len,
        })
    }
}

/// Successor queries with a step budget
struct Cursor<'c, C: ?Sized> {
    chain: &'c C,
    step_limit: Option<usize>,
    steps: usize,
}

impl<'c, C> Cursor<'c, C>
where
    C: Successors + ?Sized,
{
    fn new(chain: &'c C, step_limit: Option<usize>) -> Self {
        Self {
            chain,
            step_limit,
            steps: 0,
        }
    }

    fn step(&mut self, node: C::Node) -> Result<Option<C::Node>, ChainLoopError> {
        self.steps += 1;
        if let Some(limit) = self.step_limit
            && self.steps > limit
        {
            return Err(ChainLoopError::StepLimitExceeded { limit });
        }
        Ok(self.chain.successor(node))
    }

    /// Step where a successor must exist because the node lies on a loop
    fn advance(&mut self, node: C::Node) -> Result<C::Node, ChainLoopError> {
        self.step(node)?.ok_or_else(|| {
            ChainLoopError::invalid_input("a node inside a confirmed loop has no successor")
        })
    }

    /// Trivial guard plus phase 1. `Some` holds the head and the meeting
    /// node of a cycle.
    fn race_from(
        &mut self,
        head: Option<C::Node>,
    ) -> Result<Option<(C::Node, C::Node)>, ChainLoopError> {
        let Some(head) = head else {
            return Ok(None);
        };
        if !self.chain.contains(head) {
            return Err(ChainLoopError::invalid_input(
                "head is not a node of this chain",
            ));
        }
        if self.step(head)?.is_none() {
            return Ok(None);
        }

        match self.race(head)? {
            Race::Exhausted => Ok(None),
            Race::Meeting(node) => Ok(Some((head, node))),
        }
    }

    fn race(&mut self, head: C::Node) -> Result<Race<C::Node>, ChainLoopError> {
        let mut slow = head;
        let mut fast = head;

        loop {
            let Some(next) = self.step(fast)? else {
                return Ok(Race::Exhausted);
            };
            let Some(next) = self.step(next)? else {
                return Ok(Race::Exhausted);
            };
            fast = next;
            // slow trails fast, so its successor was already visited
            slow = self.step(slow)?.ok_or_else(|| {
                ChainLoopError::invalid_input("successor changed during traversal")
            })?;

            if slow == fast {
                return Ok(Race::Meeting(slow));
            }
        }
    }

    /// Phase 2: returns the entry node and the number of tail steps
    fn locate_entry(
        &mut self,
        head: C::Node,
        meeting: C::Node,
    ) -> Result<(C::Node, usize), ChainLoopError> {
        let mut from_head = head;
        let mut from_meeting = meeting;
        let mut tail_len = 0;

        while from_head != from_meeting {
            from_head = self.advance(from_head)?;
            from_meeting = self.advance(from_meeting)?;
            tail_len += 1;
        }

        Ok((from_head, tail_len))
    }

    fn loop_length(&mut self, entry: C::Node) -> Result<usize, ChainLoopError> {
        let mut len = 1;
        let mut node = self.advance(entry)?;
        while node != entry {
            node = self.advance(node)?;
            len += 1;
        }
        Ok(len)
    }

    /// Node count of a chain already known to be acyclic
    fn run_length(&mut self, head: C::Node) -> Result<usize, ChainLoopError> {
        let mut len = 1;
        let mut node = head;
        while let Some(next) = self.step(node)? {
            node = next;
            len += 1;
        }
        Ok(len)
    }
}
