use core::fmt::Display;
use std::{collections::HashMap, fs, path::PathBuf};

use bitsets::{Class, Member, Word};
use dot_generator::*;
use dot_structures::*;
use graphviz_rust::{
    exec,
    printer::{DotPrinter, PrinterContext},
};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::{
    error::{Error, Result},
    label::{HasseConfig, Label},
};

/// A subset drawn in the diagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HasseNode {
    /// `b<rank>`
    pub name: String,
    pub label: String,
}

/// The Hasse diagram of the Boolean lattice of a class.
///
/// Every subset of the domain is a node, with an edge down to each subset
/// missing exactly one of its members.
pub struct Hasse<M, T = u64> {
    class: Class<M, T>,
    config: HasseConfig<M, T>,
    graph: DiGraph<HasseNode, ()>,
}

impl<M: Member + Display, T: Word> Hasse<M, T> {
    pub fn new(class: &Class<M, T>, config: HasseConfig<M, T>) -> Result<Self> {
        if matches!(config.label, Label::IChing) && class.len() != 6 {
            return Err(Error::IChing {
                name: class.name().to_owned(),
                len: class.len(),
            });
        }
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();
        for b in class.lattice() {
            let node = HasseNode {
                name: format!("b{:?}", b.int()),
                label: config.label.text(&b),
            };
            nodes.insert(b.int(), graph.add_node(node));
        }
        for b in class.lattice() {
            for a in b.atoms(true) {
                if let (Some(&from), Some(&to)) = (nodes.get(&b.int()), nodes.get(&(&b - &a).int())) {
                    graph.add_edge(from, to, ());
                }
            }
        }
        debug!(
            name = class.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built hasse diagram"
        );
        Ok(Self {
            class: class.clone(),
            config,
            graph,
        })
    }
}

impl<M: Member, T: Word> Hasse<M, T> {
    pub fn graph(&self) -> &DiGraph<HasseNode, ()> {
        &self.graph
    }

    /// The node of the subset of rank `index`.
    pub fn node(&self, index: usize) -> Option<&HasseNode> {
        self.graph.node_weight(NodeIndex::new(index))
    }

    pub fn filename(&self) -> String {
        match &self.config.filename {
            Some(filename) => filename.clone(),
            None => format!("bs-{}-{}.gv", self.class.name(), self.config.label.kind()),
        }
    }

    pub fn path(&self) -> PathBuf {
        match &self.config.directory {
            Some(directory) => directory.join(self.filename()),
            None => PathBuf::from(self.filename()),
        }
    }

    /// The diagram as a graphviz syntax tree.
    pub fn to_dot(&self) -> Graph {
        let mut stmts = vec![
            Stmt::Attribute(attr!("comment", esc escape(&format!("{:?}", self.class)))),
            Stmt::GAttribute(GraphAttributes::Edge(vec![attr!("dir", "none")])),
        ];
        stmts.extend(self.graph.node_weights().map(|node| {
            Stmt::Node(Node::new(
                NodeId(id!(node.name), None),
                vec![attr!("label", esc escape(&node.label))],
            ))
        }));
        stmts.extend(self.graph.raw_edges().iter().map(|edge| {
            let from = &self.graph[edge.source()].name;
            let to = &self.graph[edge.target()].name;
            Stmt::Edge(Edge {
                ty: EdgeTy::Pair(Vertex::N(NodeId(id!(from), None)), Vertex::N(NodeId(id!(to), None))),
                attributes: vec![],
            })
        }));
        Graph::DiGraph {
            id: id!(esc escape(self.class.name())),
            strict: false,
            stmts,
        }
    }

    /// The DOT source of the diagram.
    pub fn source(&self) -> String {
        self.to_dot().print(&mut PrinterContext::default())
    }

    /// Write the DOT source to [`Self::path`].
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.path();
        if let Some(directory) = &self.config.directory {
            fs::create_dir_all(directory)?;
        }
        fs::write(&path, self.source())?;
        debug!(path = %path.display(), "saved hasse diagram");
        Ok(path)
    }

    /// Run the `dot` executable over the diagram in the configured format.
    pub fn render(&self) -> Result<Vec<u8>> {
        let rendered = exec(
            self.to_dot(),
            &mut PrinterContext::default(),
            vec![self.config.format.clone().into()],
        )?;
        debug!(bytes = rendered.len(), "rendered hasse diagram");
        Ok(rendered)
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use bitsets::{Flavor, Registry};
    use petgraph::visit::EdgeRef;

    use super::*;

    fn four() -> Class<i32> {
        Registry::new()
            .declare("Four", [1, 2, 3, 4], Flavor::BitSet, false, false)
            .unwrap()
    }

    #[test]
    fn one_node_per_subset_and_one_edge_per_member() {
        let hasse = Hasse::new(&four(), HasseConfig::default()).unwrap();
        assert_eq!(hasse.graph().node_count(), 16);
        // each of the 16 subsets has as many lower covers as members
        assert_eq!(hasse.graph().edge_count(), 4 * 8);
        let b7 = NodeIndex::new(7);
        let covers = hasse
            .graph()
            .edges(b7)
            .map(|e| hasse.graph()[e.target()].name.clone())
            .collect::<Vec<_>>();
        assert_eq!(covers.len(), 3);
        for name in ["b3", "b5", "b6"] {
            assert!(covers.iter().any(|c| c == name), "{covers:?}");
        }
    }

    #[test]
    fn lower_covers_follow_the_reversed_atoms() {
        let hasse = Hasse::new(&four(), HasseConfig::default()).unwrap();
        let b15 = NodeIndex::new(15);
        let mut targets = hasse.graph().edges(b15).map(|e| e.id()).collect::<Vec<_>>();
        targets.sort();
        let names = targets
            .into_iter()
            .filter_map(|e| hasse.graph().edge_endpoints(e))
            .map(|(_, to)| hasse.graph()[to].name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["b7", "b11", "b13", "b14"]);
    }

    #[test]
    fn labels_and_filenames() {
        let four = four();
        let bits = Hasse::new(&four, HasseConfig::default()).unwrap();
        assert_eq!(bits.node(5).unwrap().label, "1010");
        assert_eq!(bits.filename(), "bs-Four-bits.gv");
        let members = Hasse::new(&four, HasseConfig::default().with_label(Label::Members)).unwrap();
        assert_eq!(members.node(5).unwrap().label, "{1,3}");
        assert_eq!(members.node(0).unwrap().label, "{}");
        assert_eq!(members.filename(), "bs-Four-members.gv");
        let none = Hasse::new(&four, HasseConfig::default().with_label(Label::None)).unwrap();
        assert_eq!(none.node(5).unwrap().label, "");
        let config = HasseConfig {
            filename: Some("four.gv".into()),
            directory: Some("diagrams".into()),
            ..HasseConfig::default()
        };
        let named = Hasse::new(&four, config).unwrap();
        assert_eq!(named.path(), PathBuf::from("diagrams").join("four.gv"));
    }

    #[test]
    fn custom_labels_reach_the_source() {
        let config = HasseConfig::default().with_label(Label::custom(|b| format!("spam{}spam", b.int())));
        let hasse = Hasse::new(&four(), config).unwrap();
        let source = hasse.source();
        assert!(source.contains("spam1spam"), "{source}");
        assert!(source.contains("digraph"), "{source}");
        assert!(source.contains("b15"), "{source}");
        assert!(source.contains("none"), "{source}");
    }

    #[test]
    fn hexagrams_need_six_members() {
        let error = Hasse::new(&four(), HasseConfig::default().with_label(Label::IChing)).err();
        assert!(matches!(error, Some(Error::IChing { len: 4, .. })));
        let six: Class<i32> = Registry::new()
            .declare("Six", [1, 2, 3, 4, 5, 6], Flavor::BitSet, false, false)
            .unwrap();
        let hasse = Hasse::new(&six, HasseConfig::default().with_label(Label::IChing)).unwrap();
        assert_eq!(hasse.node(0).unwrap().label, "\u{4dc1}");
        assert_eq!(hasse.node(63).unwrap().label, "\u{4dc0}");
    }

    #[test]
    fn the_dot_tree_holds_every_node_and_edge() {
        let hasse = Hasse::new(&four(), HasseConfig::default()).unwrap();
        let Graph::DiGraph { stmts, .. } = hasse.to_dot() else {
            panic!("hasse diagrams are directed graphs");
        };
        let nodes = stmts.iter().filter(|s| matches!(s, Stmt::Node(_))).count();
        let edges = stmts.iter().filter(|s| matches!(s, Stmt::Edge(_))).count();
        assert_eq!((nodes, edges), (16, 32));
    }
}
