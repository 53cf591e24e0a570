//! Script syntax tree.
//!
//! Nodes are closed tagged variants stored in an append-only arena; a
//! [`NodeId`] is an index into that arena. Locations live in a side table
//! ([`LocationMap`]) instead of the nodes themselves, which keeps the
//! variants small and lets generated nodes skip the table entirely.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{NodeLocation, Symbol, SymbolInterner};

/// Index of a node in its [`Ast`] arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

crate::static_assert_size!(NodeId, 4);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Discriminant of a [`Node`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    FileTree,
    IdentifierValue,
    StringValue,
    ListValue,
    NullValue,
    EventStatement,
    AssignStatement,
    ValueStatement,
}

impl NodeKind {
    /// Human-readable kind name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::FileTree => "file tree",
            NodeKind::IdentifierValue => "identifier value",
            NodeKind::StringValue => "string value",
            NodeKind::ListValue => "list value",
            NodeKind::NullValue => "null value",
            NodeKind::EventStatement => "event statement",
            NodeKind::AssignStatement => "assign statement",
            NodeKind::ValueStatement => "value statement",
        }
    }

    /// Identifier and string values: the flat values a statement's left
    /// side may be.
    pub const fn is_flat_value(self) -> bool {
        matches!(self, NodeKind::IdentifierValue | NodeKind::StringValue)
    }

    pub const fn is_value(self) -> bool {
        matches!(
            self,
            NodeKind::IdentifierValue
                | NodeKind::StringValue
                | NodeKind::ListValue
                | NodeKind::NullValue
        )
    }

    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::EventStatement | NodeKind::AssignStatement | NodeKind::ValueStatement
        )
    }
}

/// A script tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Root: ordered top-level statements.
    FileTree(Vec<NodeId>),
    /// Bare token value, e.g. `infantry` or `1836.1.1`.
    IdentifierValue(Symbol),
    /// Quoted string value.
    StringValue(Symbol),
    /// `{ ... }` block of statements; may be empty.
    ListValue(Vec<NodeId>),
    /// Absent right-hand side.
    NullValue,
    /// `country_event = { ... }` / `province_event = { ... }`.
    EventStatement {
        is_province_event: bool,
        body: NodeId,
    },
    /// `left = right` where `left` is a flat value.
    AssignStatement { left: NodeId, right: NodeId },
    /// A bare value at statement position.
    ValueStatement { value: NodeId },
}

impl Node {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::FileTree(_) => NodeKind::FileTree,
            Node::IdentifierValue(_) => NodeKind::IdentifierValue,
            Node::StringValue(_) => NodeKind::StringValue,
            Node::ListValue(_) => NodeKind::ListValue,
            Node::NullValue => NodeKind::NullValue,
            Node::EventStatement { .. } => NodeKind::EventStatement,
            Node::AssignStatement { .. } => NodeKind::AssignStatement,
            Node::ValueStatement { .. } => NodeKind::ValueStatement,
        }
    }

    /// The interned content of a flat value, if this is one.
    pub const fn flat_symbol(&self) -> Option<Symbol> {
        match self {
            Node::IdentifierValue(sym) | Node::StringValue(sym) => Some(*sym),
            _ => None,
        }
    }
}

/// Side table from node identity to source location.
///
/// Nodes without an entry are synthesized. `location_of` insists on an
/// entry because every parser-built node gets one; use `try_location_of`
/// for nodes that may be generated.
#[derive(Default, Debug)]
pub struct LocationMap {
    map: FxHashMap<NodeId, NodeLocation>,
}

impl LocationMap {
    pub fn new() -> Self {
        LocationMap::default()
    }

    pub fn set_location(&mut self, node: NodeId, loc: NodeLocation) {
        self.map.insert(node, loc);
    }

    /// Location of a parsed node.
    ///
    /// # Panics
    /// Panics if the node has no entry; parsed nodes always do.
    pub fn location_of(&self, node: NodeId) -> NodeLocation {
        match self.map.get(&node) {
            Some(loc) => *loc,
            None => panic!("no location recorded for {node:?}"),
        }
    }

    pub fn try_location_of(&self, node: NodeId) -> Option<NodeLocation> {
        self.map.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Arena-backed syntax tree for one parse.
///
/// All nodes are created once and released together; references between
/// nodes are plain [`NodeId`] indices.
#[derive(Default, Debug)]
pub struct Ast {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Ast::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX - 1));
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn set_root(&mut self, root: NodeId) {
        debug_assert!(matches!(self.nodes[root.index()], Node::FileTree(_)));
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Top-level statements of the file tree, in source order.
    pub fn statements(&self) -> &[NodeId] {
        match self.root.map(|id| self.node(id)) {
            Some(Node::FileTree(stmts)) => stmts,
            _ => &[],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Re-emit the tree as script text.
    ///
    /// Statements come out one per line at the top level and
    /// space-separated inside braces, which is enough for the rendered
    /// text to parse back into an equivalent tree.
    pub fn render_native(&self, symbols: &SymbolInterner) -> String {
        let mut out = String::new();
        for (i, &stmt) in self.statements().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_statement(stmt, symbols, &mut out);
        }
        out
    }

    fn render_statement(&self, id: NodeId, symbols: &SymbolInterner, out: &mut String) {
        match self.node(id) {
            Node::AssignStatement { left, right } => {
                self.render_value(*left, symbols, out);
                match self.node(*right) {
                    Node::NullValue => {}
                    _ => {
                        out.push_str(" = ");
                        self.render_value(*right, symbols, out);
                    }
                }
            }
            Node::ValueStatement { value } => self.render_value(*value, symbols, out),
            Node::EventStatement {
                is_province_event,
                body,
            } => {
                out.push_str(if *is_province_event {
                    "province_event"
                } else {
                    "country_event"
                });
                out.push_str(" = ");
                self.render_value(*body, symbols, out);
            }
            node => {
                debug_assert!(false, "not a statement: {:?}", node.kind());
            }
        }
    }

    fn render_value(&self, id: NodeId, symbols: &SymbolInterner, out: &mut String) {
        match self.node(id) {
            Node::IdentifierValue(sym) => out.push_str(symbols.view(*sym)),
            Node::StringValue(sym) => {
                out.push('"');
                out.push_str(symbols.view(*sym));
                out.push('"');
            }
            Node::ListValue(stmts) => {
                out.push('{');
                for &stmt in stmts {
                    out.push(' ');
                    self.render_statement(stmt, symbols, out);
                }
                out.push_str(" }");
            }
            Node::NullValue => {}
            node => {
                debug_assert!(false, "not a value: {:?}", node.kind());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> (Ast, SymbolInterner) {
        let mut symbols = SymbolInterner::new();
        let mut ast = Ast::new();
        let a = symbols.intern("a");
        let b = symbols.intern("b");
        let left = ast.alloc(Node::IdentifierValue(a));
        let right = ast.alloc(Node::IdentifierValue(b));
        let assign = ast.alloc(Node::AssignStatement { left, right });
        let root = ast.alloc(Node::FileTree(vec![assign]));
        ast.set_root(root);
        (ast, symbols)
    }

    #[test]
    fn kind_dispatch() {
        let (ast, _) = sample();
        let stmts = ast.statements();
        assert_eq!(stmts.len(), 1);
        assert_eq!(ast.node(stmts[0]).kind(), NodeKind::AssignStatement);
        assert!(ast.node(stmts[0]).kind().is_statement());
        assert!(!ast.node(stmts[0]).kind().is_value());
    }

    #[test]
    fn flat_value_symbols() {
        let mut symbols = SymbolInterner::new();
        let sym = symbols.intern("x");
        assert_eq!(Node::IdentifierValue(sym).flat_symbol(), Some(sym));
        assert_eq!(Node::StringValue(sym).flat_symbol(), Some(sym));
        assert_eq!(Node::NullValue.flat_symbol(), None);
    }

    #[test]
    fn render_assignment() {
        let (ast, symbols) = sample();
        assert_eq!(ast.render_native(&symbols), "a = b");
    }

    #[test]
    fn render_nested_lists() {
        let mut symbols = SymbolInterner::new();
        let mut ast = Ast::new();
        let a = symbols.intern("a");
        let b = symbols.intern("b");

        let inner_left = ast.alloc(Node::IdentifierValue(a));
        let inner_right = ast.alloc(Node::IdentifierValue(b));
        let inner = ast.alloc(Node::AssignStatement {
            left: inner_left,
            right: inner_right,
        });
        let list = ast.alloc(Node::ListValue(vec![inner]));
        let outer_left = ast.alloc(Node::IdentifierValue(a));
        let outer = ast.alloc(Node::AssignStatement {
            left: outer_left,
            right: list,
        });
        let root = ast.alloc(Node::FileTree(vec![outer]));
        ast.set_root(root);

        assert_eq!(ast.render_native(&symbols), "a = { a = b }");
    }

    #[test]
    fn render_value_only_assignment() {
        let mut symbols = SymbolInterner::new();
        let mut ast = Ast::new();
        let a = symbols.intern("a");
        let left = ast.alloc(Node::IdentifierValue(a));
        let null = ast.alloc(Node::NullValue);
        let assign = ast.alloc(Node::AssignStatement { left, right: null });
        let root = ast.alloc(Node::FileTree(vec![assign]));
        ast.set_root(root);

        assert_eq!(ast.render_native(&symbols), "a");
    }

    #[test]
    fn location_map_roundtrip() {
        let (ast, _) = sample();
        let mut map = LocationMap::new();
        let stmt = ast.statements()[0];
        map.set_location(stmt, NodeLocation::new(0, 5));
        assert_eq!(map.location_of(stmt), NodeLocation::new(0, 5));
        assert_eq!(map.try_location_of(stmt), Some(NodeLocation::new(0, 5)));
    }

    #[test]
    #[should_panic(expected = "no location recorded")]
    fn location_map_missing_entry_panics() {
        let (ast, _) = sample();
        let map = LocationMap::new();
        let _ = map.location_of(ast.statements()[0]);
    }

    #[test]
    fn empty_tree_has_no_statements() {
        let ast = Ast::new();
        assert!(ast.statements().is_empty());
        assert_eq!(ast.root(), None);
    }
}
