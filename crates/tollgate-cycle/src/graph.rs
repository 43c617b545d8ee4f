//! Import graph view for operators.
//!
//! Renders the same-kind import graph of a model as Graphviz DOT, one node
//! per account and one edge per import (importer → source). This is a
//! read-only picture; cycle verdicts always come from
//! [`forms_cycle`](crate::forms_cycle), which understands subject overlap and
//! renames.

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;
use tollgate_account::{AccountModel, Import, Kind};
use tollgate_core::AccountId;
use tollgate_subject::Subject;

/// Label of one import edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportEdge {
    /// Subject requested from the source.
    pub subject: Subject,
    /// Local rename, if any.
    pub to: Option<Subject>,
}

impl From<&Import> for ImportEdge {
    fn from(import: &Import) -> Self {
        Self {
            subject: import.subject.clone(),
            to: import.to.clone(),
        }
    }
}

impl fmt::Display for ImportEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.to {
            Some(to) if to != &self.subject => write!(f, "{} -> {}", self.subject, to),
            _ => write!(f, "{}", self.subject),
        }
    }
}

/// The import graph of one kind.
pub struct ImportGraph {
    kind: Kind,
    graph: DiGraph<AccountId, ImportEdge>,
    index: HashMap<AccountId, NodeIndex>,
}

impl ImportGraph {
    /// Builds the graph of `kind` imports in `model`.
    ///
    /// Imports whose source account is unknown are skipped.
    pub fn from_model(model: &AccountModel, kind: Kind) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::with_capacity(model.len());

        for account in model.accounts() {
            let node = graph.add_node(account.id().clone());
            index.insert(account.id().clone(), node);
        }

        for account in model.accounts() {
            let from = index[account.id()];
            for import in account.imports_of(kind) {
                match index.get(&import.account) {
                    Some(&to) => {
                        graph.add_edge(from, to, ImportEdge::from(import));
                    }
                    None => log::warn!(
                        "Skipping {kind} import '{}' of '{}': unknown account '{}'",
                        import.subject,
                        account.id(),
                        import.account
                    ),
                }
            }
        }

        Self { kind, graph, index }
    }

    /// Kind of imports in this graph.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Number of accounts.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of imports.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Accounts that `account` imports from, with the import labels.
    pub fn sources_of(&self, account: &AccountId) -> Vec<(&AccountId, &ImportEdge)> {
        let Some(&node) = self.index.get(account) else {
            return Vec::new();
        };
        let mut sources: Vec<(&AccountId, &ImportEdge)> = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (&self.graph[edge.target()], edge.weight()))
            .collect();
        // petgraph walks outgoing edges newest first
        sources.reverse();
        sources
    }

    /// Renders the graph in Graphviz DOT format.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }
}
