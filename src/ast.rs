use std::fmt;

/// Handle to a node stored in an [`Ast`] arena.
///
/// Handles are only ever produced by [`Ast::push`], so a handle is valid for
/// exactly as long as the arena that issued it. The procedure table stores
/// these instead of references, which is what makes tearing the whole tree
/// down at once safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One node of the program tree.
///
/// `next` chains this node to the following statement of its enclosing
/// sequence; expression nodes never have a successor.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub next: Option<NodeId>,
}

/// The simple turtle commands and the argument expressions they carry.
#[derive(Debug)]
pub enum Cmd {
    /// `up` — lift the pen; later movement emits `MoveTo`.
    Up,
    /// `down` — lower the pen; later movement emits `LineTo`.
    Down,
    /// `home` — reset pose and pen, visibly returning to the origin.
    Home,
    /// `forward <distance>`
    Forward(NodeId),
    /// `backward <distance>`
    Backward(NodeId),
    /// `left <degrees>`
    Left(NodeId),
    /// `right <degrees>`
    Right(NodeId),
    /// `heading <degrees>` — absolute, not relative.
    Heading(NodeId),
    /// `print <expr>` — writes to the diagnostic stream.
    Print(NodeId),
    /// `position <x>, <y>`
    Position(NodeId, NodeId),
    /// `color <r>, <g>, <b>`
    Color(NodeId, NodeId, NodeId),
}

/// The built-in functions and their argument expressions.
#[derive(Debug)]
pub enum Func {
    /// `sin(x)`, radians.
    Sin(NodeId),
    /// `cos(x)`, radians.
    Cos(NodeId),
    /// `tan(x)`, radians.
    Tan(NodeId),
    /// `sqrt(x)`
    Sqrt(NodeId),
    /// `random(lower, upper)` — uniform in `[lower, upper)`.
    Random(NodeId, NodeId),
}

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// A unary operator. Only negation exists in this language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation (`-x`).
    Negate,
}

/// The kind of a program-tree node, a closed sum over every construct the
/// parser can produce.
///
/// Statement kinds (`Simple`, `Set`, `Repeat`, `Block`, `Proc`, `Call`) are
/// sequenced through [`Node::next`]; expression kinds only ever appear as
/// children.
#[derive(Debug)]
pub enum NodeKind {
    /// A numeric literal.
    Value(f64),
    /// A variable reference by name.
    Name(String),
    /// A unary operation.
    Unop { op: UnaryOp, operand: NodeId },
    /// A binary operation.
    Binop { op: BinaryOp, lhs: NodeId, rhs: NodeId },
    /// A parenthesized expression, kept as its own node.
    Group(NodeId),
    /// A built-in function call.
    Func(Func),
    /// A simple command with its arguments.
    Simple(Cmd),
    /// `set <name> <expr>` — variable assignment.
    Set { name: String, value: NodeId },
    /// `repeat <count> { ... }`
    Repeat { count: NodeId, body: NodeId },
    /// A braced command sequence; the child's `next` links thread the rest.
    Block(NodeId),
    /// `proc <name> { ... }` — stores the body without evaluating it.
    Proc { name: String, body: NodeId },
    /// `call <name>`
    Call { name: String },
}

/// An arena-backed program tree.
///
/// Nodes are appended during parsing and addressed by [`NodeId`]; dropping
/// the arena frees every node at once, no matter who still holds handles.
///
/// # Example
/// ```
/// use tortue::ast::{Ast, Cmd, NodeKind};
///
/// let mut ast = Ast::new();
/// let dist = ast.push(NodeKind::Value(10.0));
/// let forward = ast.push(NodeKind::Simple(Cmd::Forward(dist)));
/// ast.set_root(forward);
///
/// assert_eq!(ast.to_string(), "forward 10\n");
/// ```
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    root:  Option<NodeId>,
}

impl Ast {
    /// Creates an empty arena with no root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node with no successor and returns its handle.
    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { kind, next: None });
        id
    }

    /// Borrows the node behind a handle.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different arena.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Chains `next` as the statement following `id` in its sequence.
    pub fn set_next(&mut self, id: NodeId, next: NodeId) {
        self.nodes[id.0].next = Some(next);
    }

    /// The first statement of the program, if any.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Marks `id` as the first statement of the program.
    pub const fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn write_sequence(&self,
                      f: &mut fmt::Formatter<'_>,
                      first: NodeId,
                      depth: usize)
                      -> fmt::Result {
        let mut current = Some(first);
        while let Some(id) = current {
            self.write_command(f, id, depth)?;
            current = self.node(id).next;
        }
        Ok(())
    }

    fn write_command(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let indent = depth * 2;
        write!(f, "{:indent$}", "")?;
        match &self.node(id).kind {
            NodeKind::Simple(cmd) => {
                match cmd {
                    Cmd::Up => write!(f, "up")?,
                    Cmd::Down => write!(f, "down")?,
                    Cmd::Home => write!(f, "home")?,
                    Cmd::Forward(e) => {
                        write!(f, "forward ")?;
                        self.write_expr(f, *e)?;
                    },
                    Cmd::Backward(e) => {
                        write!(f, "backward ")?;
                        self.write_expr(f, *e)?;
                    },
                    Cmd::Left(e) => {
                        write!(f, "left ")?;
                        self.write_expr(f, *e)?;
                    },
                    Cmd::Right(e) => {
                        write!(f, "right ")?;
                        self.write_expr(f, *e)?;
                    },
                    Cmd::Heading(e) => {
                        write!(f, "heading ")?;
                        self.write_expr(f, *e)?;
                    },
                    Cmd::Print(e) => {
                        write!(f, "print ")?;
                        self.write_expr(f, *e)?;
                    },
                    Cmd::Position(x, y) => {
                        write!(f, "position ")?;
                        self.write_expr(f, *x)?;
                        write!(f, ", ")?;
                        self.write_expr(f, *y)?;
                    },
                    Cmd::Color(r, g, b) => {
                        write!(f, "color ")?;
                        self.write_expr(f, *r)?;
                        write!(f, ", ")?;
                        self.write_expr(f, *g)?;
                        write!(f, ", ")?;
                        self.write_expr(f, *b)?;
                    },
                }
                writeln!(f)
            },
            NodeKind::Set { name, value } => {
                write!(f, "set {name} ")?;
                self.write_expr(f, *value)?;
                writeln!(f)
            },
            NodeKind::Repeat { count, body } => {
                write!(f, "repeat ")?;
                self.write_expr(f, *count)?;
                write!(f, " ")?;
                self.write_block(f, *body, depth)?;
                writeln!(f)
            },
            NodeKind::Block(_) => {
                self.write_block(f, id, depth)?;
                writeln!(f)
            },
            NodeKind::Proc { name, body } => {
                write!(f, "proc {name} ")?;
                self.write_block(f, *body, depth)?;
                writeln!(f)
            },
            NodeKind::Call { name } => writeln!(f, "call {name}"),
            // Expression kinds never start a statement when the tree came out
            // of the parser, but a hand-built tree may place one here.
            _ => {
                self.write_expr(f, id)?;
                writeln!(f)
            },
        }
    }

    fn write_block(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        writeln!(f, "{{")?;
        if let NodeKind::Block(child) = &self.node(id).kind {
            self.write_sequence(f, *child, depth + 1)?;
        } else {
            self.write_command(f, id, depth + 1)?;
        }
        let indent = depth * 2;
        write!(f, "{:indent$}}}", "")
    }

    fn write_expr(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        match &self.node(id).kind {
            NodeKind::Value(v) => write!(f, "{v}"),
            NodeKind::Name(name) => write!(f, "{name}"),
            NodeKind::Unop { op, operand } => {
                write!(f, "{op}")?;
                self.write_expr(f, *operand)
            },
            NodeKind::Binop { op, lhs, rhs } => {
                self.write_expr(f, *lhs)?;
                write!(f, " {op} ")?;
                self.write_expr(f, *rhs)
            },
            NodeKind::Group(inner) => {
                write!(f, "(")?;
                self.write_expr(f, *inner)?;
                write!(f, ")")
            },
            NodeKind::Func(func) => match func {
                Func::Sin(a) | Func::Cos(a) | Func::Tan(a) | Func::Sqrt(a) => {
                    let name = match func {
                        Func::Sin(_) => "sin",
                        Func::Cos(_) => "cos",
                        Func::Tan(_) => "tan",
                        _ => "sqrt",
                    };
                    write!(f, "{name}(")?;
                    self.write_expr(f, *a)?;
                    write!(f, ")")
                },
                Func::Random(a, b) => {
                    write!(f, "random(")?;
                    self.write_expr(f, *a)?;
                    write!(f, ", ")?;
                    self.write_expr(f, *b)?;
                    write!(f, ")")
                },
            },
            // Statement kinds never appear in expression position.
            _ => Ok(()),
        }
    }
}

/// Renders the tree back as program source: one command per line, bodies
/// brace-delimited and indented by two spaces.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root {
            self.write_sequence(f, root, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
