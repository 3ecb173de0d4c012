//! Segment trie holding the route table.
//!
//! Each node is keyed by one path segment and holds:
//!
//! - literal children keyed by their exact segment text,
//! - at most one parameter child, remembered with its parameter name,
//! - an optional terminal [`RouteEntry`].
//!
//! A terminal node may still have children: `/user/:id` and
//! `/user/:id/story` share the `user → :id` path.
//!
//! # Matching
//!
//! [`RouteTrie::lookup`] walks one segment per level. A literal child equal
//! to the segment always wins; otherwise the parameter child (if any) takes
//! the segment and binds it to its name. If neither exists the lookup fails
//! right there.
//!
//! The walk never backtracks. Once a level has committed to the literal
//! child, a dead end further down is a miss even if the parameter sibling
//! would have led to a match. With `/a/b/c` and `/a/:x/d` registered,
//! `/a/b/d` does **not** match: the walk takes literal `b`, then finds no
//! `d` below it. Route tables that need the other outcome must register the
//! literal path explicitly.

use crate::pattern::Segment;
use crate::{trace_log, Result, RouteEntry, RouteParams, RouterError};
use std::collections::HashMap;

#[derive(Debug)]
struct TrieNode<T> {
    children: HashMap<String, TrieNode<T>>,
    param_child: Option<(String, Box<TrieNode<T>>)>,
    entry: Option<RouteEntry<T>>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            param_child: None,
            entry: None,
        }
    }

    /// Existing child for `segment`, without creating anything.
    fn child(&self, segment: &Segment) -> Option<&TrieNode<T>> {
        match segment {
            Segment::Literal(key) => self.children.get(key),
            Segment::Param(name) => match &self.param_child {
                Some((existing, child)) if existing == name => Some(child.as_ref()),
                _ => None,
            },
        }
    }

    /// Child for `segment`, created if absent. Parameter name conflicts
    /// must have been ruled out by the caller.
    fn child_mut(&mut self, segment: &Segment) -> &mut TrieNode<T> {
        match segment {
            Segment::Literal(key) => self
                .children
                .entry(key.clone())
                .or_insert_with(TrieNode::new),
            Segment::Param(name) => {
                let (_, child) = self
                    .param_child
                    .get_or_insert_with(|| (name.clone(), Box::new(TrieNode::new())));
                child.as_mut()
            }
        }
    }
}

/// The route table: a trie over path segments.
#[derive(Debug)]
pub struct RouteTrie<T> {
    root: TrieNode<T>,
    len: usize,
}

impl<T> RouteTrie<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if no entry is registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bind `entry` to the exact segment path `segments`.
    ///
    /// Fails without modifying the table if:
    ///
    /// - `segments` is empty ([`RouterError::InvalidPattern`]),
    /// - a parameter has an empty name or its name appears twice in
    ///   `segments` ([`RouterError::InvalidPattern`]),
    /// - a position already holds a parameter child under a different name
    ///   ([`RouterError::InvalidPattern`]),
    /// - the path already carries an entry ([`RouterError::DuplicateRoute`]).
    pub fn insert(
        &mut self,
        segments: &[Segment],
        entry: RouteEntry<T>,
    ) -> Result<&RouteEntry<T>> {
        self.check_insert(segments, entry.pattern())?;

        let mut node = &mut self.root;
        for segment in segments {
            node = node.child_mut(segment);
        }
        self.len += 1;
        let entry: &RouteEntry<T> = node.entry.insert(entry);
        Ok(entry)
    }

    fn check_insert(&self, segments: &[Segment], pattern: &str) -> Result<()> {
        if segments.is_empty() {
            return Err(RouterError::invalid_pattern(pattern, "pattern has no segments"));
        }
        for (i, segment) in segments.iter().enumerate() {
            let Some(name) = segment.param_name() else {
                continue;
            };
            if name.is_empty() {
                return Err(RouterError::invalid_pattern(pattern, "empty parameter name"));
            }
            if segments[..i].iter().any(|s| s.param_name() == Some(name)) {
                return Err(RouterError::invalid_pattern(
                    pattern,
                    format!("parameter '{}' declared twice", name),
                ));
            }
        }

        let mut node = &self.root;
        for segment in segments {
            if let (Segment::Param(name), Some((existing, _))) = (segment, &node.param_child) {
                if existing != name {
                    return Err(RouterError::invalid_pattern(
                        pattern,
                        format!(
                            "parameter ':{}' conflicts with ':{}' registered at the same position",
                            name, existing
                        ),
                    ));
                }
            }
            match node.child(segment) {
                Some(child) => node = child,
                // the rest of the path is new, nothing left to conflict with
                None => return Ok(()),
            }
        }

        if node.entry.is_some() {
            return Err(RouterError::DuplicateRoute {
                pattern: pattern.to_string(),
            });
        }
        Ok(())
    }

    /// Resolve concrete URL segments, capturing parameters on the way.
    ///
    /// Returns `None` when the walk dead-ends or stops on a node without an
    /// entry. See the module docs for the precedence rules.
    pub fn lookup(&self, segments: &[&str]) -> Option<(&RouteEntry<T>, RouteParams)> {
        let mut node = &self.root;
        let mut params = RouteParams::new();

        for &segment in segments {
            if let Some(child) = node.children.get(segment) {
                trace_log!("Segment '{}' matched literally", segment);
                node = child;
                continue;
            }
            match &node.param_child {
                Some((name, child)) => {
                    trace_log!("Segment '{}' bound to ':{}'", segment, name);
                    params.insert(name.as_str(), segment);
                    node = child.as_ref();
                }
                None => {
                    trace_log!("Segment '{}' has no matching child", segment);
                    return None;
                }
            }
        }

        node.entry.as_ref().map(|entry| (entry, params))
    }

    /// Find the entry registered for exactly this pattern structure.
    ///
    /// Unlike [`lookup`](Self::lookup), parameter segments only match a
    /// parameter child with the same name.
    pub fn find(&self, segments: &[Segment]) -> Option<&RouteEntry<T>> {
        let mut node = &self.root;
        for segment in segments {
            node = node.child(segment)?;
        }
        node.entry.as_ref()
    }

    /// Drop every entry and reset to an empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
