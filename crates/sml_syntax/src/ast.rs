//! Syntax tree definitions for sml.
//!
//! A parsed document is a [`Tree`] owning one root [`Node`]. Nodes form a value tree: every child is
//! exclusively owned by its parent, so `Clone` is a deep copy and two trees never share a node.
//!
//! ## Reduction
//!
//! [`Node::reduce`] is a non-destructive structural transform that returns a new tree:
//! - `List` reduces each child in order.
//! - `Number` and `Object` are already reduced and come back as copies.
//! - `Diff`, `Intersection` and `Union` are not evaluated; they become a `List` of their two reduced
//!   operands, left first.

use std::fmt;

use sml_core::lang::operators::{self, OperatorId};

use crate::cancel::CancelToken;
use crate::diagnostics::CompileError;
use crate::number::{Complex, NumberValue};

/// Byte offset into the original source text. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos(pub usize);

impl Pos {
    pub fn offset(self) -> usize {
        self.0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies the variant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    List,
    Number,
    Diff,
    Intersection,
    Union,
    Object,
}

/// An element of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    List(ListNode),
    Number(NumberNode),
    Diff(BinaryNode),
    Intersection(BinaryNode),
    Union(BinaryNode),
    Object(ObjectNode),
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::List(_) => NodeType::List,
            Node::Number(_) => NodeType::Number,
            Node::Diff(_) => NodeType::Diff,
            Node::Intersection(_) => NodeType::Intersection,
            Node::Union(_) => NodeType::Union,
            Node::Object(_) => NodeType::Object,
        }
    }

    /// Byte position of the start of the node (operator position for binary nodes).
    pub fn position(&self) -> Pos {
        match self {
            Node::List(n) => n.pos,
            Node::Number(n) => n.pos,
            Node::Diff(n) | Node::Intersection(n) | Node::Union(n) => n.pos,
            Node::Object(n) => n.pos,
        }
    }

    /// Return the reduced form of this node. The receiver is left untouched.
    pub fn reduce(&self) -> Result<Node, CompileError> {
        self.reduce_with(&CancelToken::new())
    }

    /// Like [`Node::reduce`], polling `cancel` before every node visited.
    pub fn reduce_with(&self, cancel: &CancelToken) -> Result<Node, CompileError> {
        cancel.check()?;
        match self {
            Node::List(list) => {
                let nodes = list
                    .nodes
                    .iter()
                    .map(|node| node.reduce_with(cancel))
                    .collect::<Result<Vec<_>, CompileError>>()?;
                Ok(Node::List(ListNode { pos: list.pos, nodes }))
            }
            Node::Number(_) | Node::Object(_) => Ok(self.clone()),
            Node::Diff(op) | Node::Intersection(op) | Node::Union(op) => {
                let mut list = ListNode::new(op.pos);
                list.append(op.left.reduce_with(cancel)?);
                list.append(op.right.reduce_with(cancel)?);
                Ok(Node::List(list))
            }
        }
    }

    /// Return `true` if no `Diff`, `Intersection` or `Union` node remains anywhere below.
    pub fn is_operator_free(&self) -> bool {
        match self {
            Node::List(list) => list.nodes.iter().all(Node::is_operator_free),
            Node::Number(_) => true,
            Node::Object(obj) => obj.params.iter().chain(&obj.location_params).all(Node::is_operator_free),
            Node::Diff(_) | Node::Intersection(_) | Node::Union(_) => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::List(n) => fmt::Display::fmt(n, f),
            Node::Number(n) => fmt::Display::fmt(n, f),
            Node::Diff(n) => n.fmt_with(f, OperatorId::Diff),
            Node::Intersection(n) => n.fmt_with(f, OperatorId::Intersection),
            Node::Union(n) => n.fmt_with(f, OperatorId::Union),
            Node::Object(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// An ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub pos: Pos,
    /// Element nodes in insertion order.
    pub nodes: Vec<Node>,
}

impl ListNode {
    pub fn new(pos: Pos) -> Self {
        Self { pos, nodes: Vec::new() }
    }

    pub fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

impl fmt::Display for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "({node})")?;
        }
        Ok(())
    }
}

/// A numeric literal, stored under every representation that holds it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberNode {
    pub pos: Pos,
    pub value: NumberValue,
    /// The literal as written in the source.
    pub text: String,
}

impl NumberNode {
    /// Build a number node from literal text. `is_complex` marks a `<num>+<num>i` token.
    pub fn new(pos: Pos, text: impl Into<String>, is_complex: bool) -> Result<Self, CompileError> {
        let text = text.into();
        match NumberValue::classify(&text, is_complex) {
            Some(value) => Ok(Self { pos, value, text }),
            None => Err(CompileError::syntax(format!("illegal number syntax: {text:?}"), pos)),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.int
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.value.uint
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.float
    }

    pub fn as_complex(&self) -> Option<Complex> {
        self.value.complex
    }
}

impl fmt::Display for NumberNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Operands of a set operator. The operator itself is the enclosing [`Node`] variant.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryNode {
    pub pos: Pos,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl BinaryNode {
    pub fn new(pos: Pos, left: Node, right: Node) -> Self {
        Self {
            pos,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, op: OperatorId) -> fmt::Result {
        write!(f, "{} {} {}", self.left, operators::as_str(op), self.right)
    }
}

/// A placed geometric primitive: `ident params... @ location_params...`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    pub pos: Pos,
    pub ident: String,
    pub params: Vec<Node>,
    pub location_params: Vec<Node>,
}

impl ObjectNode {
    pub fn new(pos: Pos, ident: impl Into<String>, params: Vec<Node>, location_params: Vec<Node>) -> Self {
        Self {
            pos,
            ident: ident.into(),
            params,
            location_params,
        }
    }
}

fn fmt_params(f: &mut fmt::Formatter<'_>, params: &[Node]) -> fmt::Result {
    f.write_str("[")?;
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{param}")?;
    }
    f.write_str("]")
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.ident)?;
        fmt_params(f, &self.params)?;
        write!(f, " {} ", operators::as_str(OperatorId::Location))?;
        fmt_params(f, &self.location_params)
    }
}

/// A parsed document: its name, its source text and the root of its syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub name: String,
    pub source: String,
    pub root: Node,
}

impl Tree {
    pub fn new(name: impl Into<String>, source: impl Into<String>, root: Node) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            root,
        }
    }

    /// Return a new tree with the root reduced; `self` is unchanged.
    pub fn reduce(&self) -> Result<Tree, CompileError> {
        self.reduce_with(&CancelToken::new())
    }

    #[tracing::instrument(skip_all, fields(document = %self.name))]
    pub fn reduce_with(&self, cancel: &CancelToken) -> Result<Tree, CompileError> {
        let root = self
            .root
            .reduce_with(cancel)
            .map_err(|e| e.in_document(self.name.as_str()))?;
        tracing::debug!(root = %root, "reduced");
        Ok(Tree {
            name: self.name.clone(),
            source: self.source.clone(),
            root,
        })
    }
}
