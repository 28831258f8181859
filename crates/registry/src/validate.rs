//! Startup assembly of the signal/auxiliary catalog into a [`Registry`], plus
//! the dependency graph used for the `signalFilter` reachability closure
//! (the signal-filter reachability query).
//!
//! Because every `SourceRef` is a variant of a closed, dense enum rather
//! than a string key, "every referenced key resolves" is
//! guaranteed by the type system — there is no string to mistype. What
//! `Registry::new` actually checks is catalog *completeness*: every
//! `SignalId`/`AuxId`/`AccumulatorId` must have exactly one definition.

use crate::definition::{AuxiliaryDefinition, SignalDefinition, SourceRef};
use crate::ids::{AccumulatorId, AuxId, SignalId};
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use std::collections::BTreeSet;
use thiserror::Error;

/// One node in the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Signal(SignalId),
    Auxiliary(AuxId),
    Accumulator(AccumulatorId),
}

impl From<SourceRef> for Option<Node> {
    fn from(source: SourceRef) -> Self {
        match source {
            SourceRef::Signal(id) => Some(Node::Signal(id)),
            SourceRef::Auxiliary(id) => Some(Node::Auxiliary(id)),
            SourceRef::Accumulator(id) => Some(Node::Accumulator(id)),
            SourceRef::Constant | SourceRef::Circadian => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("catalog defines {found} {what} entries, expected {expected}")]
    IncompleteCatalog { what: &'static str, found: usize, expected: usize },
}

/// An owned, immutable registry: dense arrays of every definition, indexable
/// by the ids in `ids.rs`, plus the dependency graph built from them.
pub struct Registry {
    pub signals: Vec<SignalDefinition>,
    pub auxiliary: Vec<AuxiliaryDefinition>,
    /// Accumulators reuse `AuxiliaryDefinition`'s shape (same ODE term
    /// types), stored separately so iteration need not filter.
    pub accumulators: Vec<AuxiliaryDefinition>,
    graph: DiGraphMap<Node, ()>,
}

impl Registry {
    pub fn new(
        signals: Vec<SignalDefinition>,
        auxiliary: Vec<AuxiliaryDefinition>,
        accumulators: Vec<AuxiliaryDefinition>,
    ) -> Result<Self, RegistryError> {
        check_complete("signal", signals.len(), SignalId::COUNT)?;
        check_complete("auxiliary", auxiliary.len(), AuxId::COUNT)?;
        check_complete("accumulator", accumulators.len(), AccumulatorId::COUNT)?;

        let graph = build_graph(&signals, &auxiliary, &accumulators);
        Ok(Self { signals, auxiliary, accumulators, graph })
    }

    pub fn signal(&self, id: SignalId) -> &SignalDefinition {
        &self.signals[id.index()]
    }

    pub fn auxiliary(&self, id: AuxId) -> &AuxiliaryDefinition {
        &self.auxiliary[id.index()]
    }

    pub fn accumulator(&self, id: AccumulatorId) -> &AuxiliaryDefinition {
        &self.accumulators[id.index()]
    }

    /// Every node reachable *backwards* from `wanted` (i.e. everything
    /// `wanted` transitively depends on) plus `wanted` itself. Used to
    /// restrict integration to the signals a `signalFilter` actually needs.
    pub fn reachability_closure(&self, wanted: impl IntoIterator<Item = Node>) -> BTreeSet<Node> {
        let mut reversed = self.graph.clone();
        reversed.reverse();
        let mut closure = BTreeSet::new();
        for start in wanted {
            closure.insert(start);
            if !reversed.contains_node(start) {
                continue;
            }
            let mut dfs = Dfs::new(&reversed, start);
            while let Some(node) = dfs.next(&reversed) {
                closure.insert(node);
            }
        }
        closure
    }
}

fn check_complete(what: &'static str, found: usize, expected: usize) -> Result<(), RegistryError> {
    if found == expected {
        Ok(())
    } else {
        Err(RegistryError::IncompleteCatalog { what, found, expected })
    }
}

fn build_graph(
    signals: &[SignalDefinition],
    auxiliary: &[AuxiliaryDefinition],
    accumulators: &[AuxiliaryDefinition],
) -> DiGraphMap<Node, ()> {
    let mut graph: DiGraphMap<Node, ()> = DiGraphMap::new();

    for id in SignalId::ALL {
        graph.add_node(Node::Signal(*id));
    }
    for id in AuxId::ALL {
        graph.add_node(Node::Auxiliary(*id));
    }
    for id in AccumulatorId::ALL {
        graph.add_node(Node::Accumulator(*id));
    }

    for (i, def) in signals.iter().enumerate() {
        add_edges_to(&mut graph, Node::Signal(SignalId::ALL[i]), def.production.iter().map(|t| t.source).chain(def.couplings.iter().map(|c| c.source)));
    }
    for (i, def) in auxiliary.iter().enumerate() {
        add_edges_to(&mut graph, Node::Auxiliary(AuxId::ALL[i]), def.production.iter().map(|t| t.source).chain(def.couplings.iter().map(|c| c.source)));
    }
    for (i, def) in accumulators.iter().enumerate() {
        add_edges_to(&mut graph, Node::Accumulator(AccumulatorId::ALL[i]), def.production.iter().map(|t| t.source).chain(def.couplings.iter().map(|c| c.source)));
    }

    graph
}

fn add_edges_to(graph: &mut DiGraphMap<Node, ()>, target: Node, sources: impl Iterator<Item = SourceRef>) {
    for source in sources {
        if let Some(node) = Option::<Node>::from(source) {
            graph.add_edge(node, target, ());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn full_catalog_validates_with_no_dangling_references() {
        let registry = catalog::build_registry().expect("catalog must validate");
        assert_eq!(registry.signals.len(), SignalId::COUNT);
    }

    #[test]
    fn reachability_closure_includes_transitive_dependencies() {
        let registry = catalog::build_registry().unwrap();
        let closure = registry.reachability_closure([Node::Signal(SignalId::Cortisol)]);
        // Cortisol's production couples from the CRH pool auxiliary.
        assert!(closure.contains(&Node::Auxiliary(AuxId::CrhPool)));
    }
}
