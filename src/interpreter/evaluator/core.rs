use std::io::Write;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ast::{Ast, NodeId, NodeKind, UnaryOp},
    error::RuntimeError,
    symtab::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the turtle pose (position, heading in degrees, pen
/// state), the variable and procedure tables, the random generator, the two
/// output sinks, and the sticky error flag.
///
/// ## Usage
///
/// A `Context` is created once per evaluation pass and drives exactly one
/// program. [`Context::run`] evaluates the whole tree; once a runtime error
/// has latched the error flag, the pass is over — the flag is only cleared
/// by building a fresh context.
///
/// # Example
/// ```
/// use tortue::interpreter::evaluator::core::Context;
///
/// let ast = tortue::parse_program("forward 10").unwrap();
///
/// let mut out = Vec::new();
/// let mut diag = Vec::new();
/// let mut context = Context::new(&mut out, &mut diag, None);
/// context.run(&ast);
///
/// assert!(!context.failed());
/// drop(context);
/// assert_eq!(String::from_utf8(out).unwrap(), "LineTo 0.000000 -10.000000\n");
/// ```
pub struct Context<'a> {
    /// Horizontal position of the turtle. The origin is `(0, 0)`.
    pub x: f64,
    /// Vertical position of the turtle. Heading 0 decreases `y`.
    pub y: f64,
    /// Heading in degrees. `left` adds, `right` subtracts.
    pub angle: f64,
    /// Whether the pen is lifted; lifted movement emits `MoveTo` instead of
    /// `LineTo`.
    pub pen_up: bool,
    /// A mapping from variable names to their current values.
    pub variables: SymbolTable<f64>,
    /// A mapping from procedure names to their body nodes in the tree.
    pub procedures: SymbolTable<NodeId>,
    error: bool,
    pub(crate) rng:  StdRng,
    pub(crate) out:  &'a mut dyn Write,
    pub(crate) diag: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a fresh context at the origin, heading 0, pen down, with
    /// empty symbol tables.
    ///
    /// # Parameters
    /// - `out`: Sink for drawing primitives (`MoveTo`/`LineTo`/`Color`).
    /// - `diag`: Sink for `print` output and error diagnostics.
    /// - `seed`: Fixed seed for `random`; `None` seeds from entropy.
    pub fn new(out: &'a mut dyn Write, diag: &'a mut dyn Write, seed: Option<u64>) -> Self {
        Self { x: 0.0,
               y: 0.0,
               angle: 0.0,
               pen_up: false,
               variables: SymbolTable::new(),
               procedures: SymbolTable::new(),
               error: false,
               rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
               out,
               diag }
    }

    /// Evaluates the whole program.
    ///
    /// On a runtime error the sticky error flag latches and exactly one
    /// diagnostic line is written to the diagnostic sink; primitives emitted
    /// before the failure remain valid, and nothing is emitted after it.
    pub fn run(&mut self, ast: &Ast) {
        let Some(root) = ast.root() else { return };
        if let Err(error) = self.eval(ast, root) {
            let _ = writeln!(self.diag, "{error}");
            self.error = true;
        }
    }

    /// Reports whether the sticky error flag has latched.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.error
    }

    /// Evaluates one node and, transitively, every statement chained after
    /// it.
    ///
    /// This is the recursive core of the interpreter. Expression kinds
    /// produce their numeric result; command kinds perform their side effect
    /// and yield an unspecified number. After a node's own work, evaluation
    /// continues into its `next` sibling, which is how statement sequences
    /// are threaded without a list container. The value of the last node in
    /// the chain is returned.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by this node or a chained one unwinds
    /// through every enclosing frame, suppressing all further side effects
    /// of the pass.
    pub fn eval(&mut self, ast: &Ast, id: NodeId) -> EvalResult<f64> {
        let node = ast.node(id);
        let value = match &node.kind {
            NodeKind::Value(v) => Ok(*v),
            NodeKind::Name(name) => {
                self.variables
                    .get(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
            },
            NodeKind::Unop { op, operand } => {
                let operand = self.eval(ast, *operand)?;
                match op {
                    UnaryOp::Negate => Ok(-operand),
                }
            },
            NodeKind::Binop { op, lhs, rhs } => self.eval_binop(ast, *op, *lhs, *rhs),
            NodeKind::Group(inner) => self.eval(ast, *inner),
            NodeKind::Func(func) => self.eval_function(ast, func),
            NodeKind::Simple(cmd) => self.eval_command(ast, cmd),
            NodeKind::Set { name, value } => {
                let value = self.eval(ast, *value)?;
                self.variables.set(name, value);
                Ok(value)
            },
            NodeKind::Repeat { count, body } => self.eval_repeat(ast, *count, *body),
            NodeKind::Block(body) => self.eval(ast, *body),
            NodeKind::Proc { name, body } => {
                self.procedures.set(name, *body);
                Ok(0.0)
            },
            NodeKind::Call { name } => {
                let body = self.procedures
                               .get(name)
                               .copied()
                               .ok_or_else(|| RuntimeError::UnknownProcedure { name:
                                                                                   name.clone() })?;
                self.eval(ast, body)
            },
        }?;

        match node.next {
            Some(next) => self.eval(ast, next),
            None => Ok(value),
        }
    }

    /// Emits the pen-dependent movement primitive for the current position:
    /// `MoveTo` while the pen is up, `LineTo` while it is down.
    pub(crate) fn emit_goto(&mut self) -> EvalResult<()> {
        if self.pen_up {
            writeln!(self.out, "MoveTo {:.6} {:.6}", self.x, self.y)?;
        } else {
            writeln!(self.out, "LineTo {:.6} {:.6}", self.x, self.y)?;
        }
        Ok(())
    }
}
