use std::io::Write;

use crate::{
    ast::{Ast, Cmd, NodeId},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a simple command.
    ///
    /// Commands perform their side effect (pose or pen mutation, primitive
    /// emission, diagnostic output) and return a number that the sequencing
    /// layer ignores. Argument expressions are evaluated in source order,
    /// and any error in one of them aborts the command before it takes
    /// effect.
    ///
    /// # Example
    /// ```
    /// use tortue::interpreter::evaluator::core::Context;
    ///
    /// let ast = tortue::parse_program("up forward 10 down forward 10").unwrap();
    ///
    /// let mut out = Vec::new();
    /// let mut diag = Vec::new();
    /// let mut context = Context::new(&mut out, &mut diag, None);
    /// context.run(&ast);
    ///
    /// drop(context);
    /// assert_eq!(String::from_utf8(out).unwrap(),
    ///            "MoveTo 0.000000 -10.000000\nLineTo 0.000000 -20.000000\n");
    /// ```
    pub(crate) fn eval_command(&mut self, ast: &Ast, cmd: &Cmd) -> EvalResult<f64> {
        match cmd {
            Cmd::Up => {
                self.pen_up = true;
                Ok(0.0)
            },
            Cmd::Down => {
                self.pen_up = false;
                Ok(0.0)
            },
            Cmd::Home => {
                self.x = 0.0;
                self.y = 0.0;
                self.angle = 0.0;
                self.pen_up = false;
                // Returning home is always visible, even though the pen just
                // went down.
                writeln!(self.out, "MoveTo {:.6} {:.6}", self.x, self.y)?;
                Ok(0.0)
            },

            Cmd::Forward(distance) => {
                let distance = self.eval(ast, *distance)?;
                self.advance(distance)
            },
            Cmd::Backward(distance) => {
                let distance = self.eval(ast, *distance)?;
                self.advance(-distance)
            },

            Cmd::Left(degrees) => {
                self.angle += self.eval(ast, *degrees)?;
                Ok(0.0)
            },
            Cmd::Right(degrees) => {
                self.angle -= self.eval(ast, *degrees)?;
                Ok(0.0)
            },
            Cmd::Heading(degrees) => {
                self.angle = self.eval(ast, *degrees)?;
                Ok(0.0)
            },

            Cmd::Print(value) => {
                let value = self.eval(ast, *value)?;
                writeln!(self.diag, "{value:.6}")?;
                Ok(value)
            },

            Cmd::Position(x, y) => {
                let x = self.eval(ast, *x)?;
                let y = self.eval(ast, *y)?;
                self.x = x;
                self.y = y;
                self.emit_goto()?;
                Ok(0.0)
            },

            Cmd::Color(r, g, b) => {
                let r = self.eval(ast, *r)?;
                let g = self.eval(ast, *g)?;
                let b = self.eval(ast, *b)?;
                writeln!(self.out, "Color {r:.6} {g:.6} {b:.6}")?;
                Ok(0.0)
            },
        }
    }

    /// Moves the turtle `distance` units along its heading and emits the
    /// pen-dependent primitive.
    ///
    /// With `rad = angle * π / 180`: `x += distance * sin(rad)` and
    /// `y -= distance * cos(rad)`, so heading 0 walks "up" (decreasing `y`)
    /// and `backward` is `forward` with the distance negated.
    fn advance(&mut self, distance: f64) -> EvalResult<f64> {
        let rad = self.angle.to_radians();
        self.x += distance * rad.sin();
        self.y -= distance * rad.cos();
        self.emit_goto()?;
        Ok(0.0)
    }

    /// Evaluates a `repeat` loop.
    ///
    /// The count expression is evaluated once and truncated toward zero; a
    /// zero or negative count runs zero iterations. The body is evaluated
    /// once per iteration, and the first error stops the loop immediately.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn eval_repeat(&mut self,
                              ast: &Ast,
                              count: NodeId,
                              body: NodeId)
                              -> EvalResult<f64> {
        let count = self.eval(ast, count)?;
        let iterations = (count as i64).max(0);

        for _ in 0..iterations {
            self.eval(ast, body)?;
        }

        Ok(0.0)
    }
}
