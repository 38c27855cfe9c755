//! Chains built from borrowed references
//!
//! Nodes live wherever the caller puts them (stack, arena, `Box::leak`) and
//! point at each other through shared references, so loops are possible
//! without `Rc`. Handles compare by address, never by payload.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use super::types::Successors;

/// A node whose successor is a borrowed reference
pub struct LinkNode<'a, T> {
    payload: T,
    next: Cell<Option<&'a LinkNode<'a, T>>>,
}

impl<'a, T> LinkNode<'a, T> {
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            next: Cell::new(None),
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn next(&self) -> Option<&'a LinkNode<'a, T>> {
        self.next.get()
    }

    pub fn set_next(&self, next: Option<&'a LinkNode<'a, T>>) {
        self.next.set(next);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkNode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkNode")
            .field("payload", &self.payload)
            .field("next", &self.next.get().map(|n| n as *const _))
            .finish()
    }
}

/// Identity handle to a [`LinkNode`]
pub struct NodeRef<'a, T>(&'a LinkNode<'a, T>);

impl<'a, T> NodeRef<'a, T> {
    pub fn new(node: &'a LinkNode<'a, T>) -> Self {
        Self(node)
    }

    pub fn get(self) -> &'a LinkNode<'a, T> {
        self.0
    }
}

impl<'a, T> From<&'a LinkNode<'a, T>> for NodeRef<'a, T> {
    fn from(node: &'a LinkNode<'a, T>) -> Self {
        Self(node)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:p})", self.0)
    }
}

/// [`Successors`] over [`LinkNode`] references
pub struct Links<'a, T>(PhantomData<&'a LinkNode<'a, T>>);

impl<T> Links<'_, T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Links<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Successors for Links<'a, T> {
    type Node = NodeRef<'a, T>;

    fn successor(&self, node: Self::Node) -> Option<Self::Node> {
        node.get().next().map(NodeRef::new)
    }
}
