//! Sanitizer and AST evaluator

use tracing::trace;

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult, NonFinitePolicy};

/// Characters that survive sanitizing
const ALLOWED_SYMBOLS: &[char] = &['+', '-', '*', '/', '(', ')', '.'];

/// Strips every character that cannot appear in an arithmetic expression.
///
/// Keeps ASCII digits and `+ - * / ( ) .`; nothing is rejected here.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|ch| ch.is_ascii_digit() || ALLOWED_SYMBOLS.contains(ch))
        .collect()
}

/// Evaluator for keypad expressions
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    policy: NonFinitePolicy,
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator that passes non-finite results through
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: NonFinitePolicy::default(),
            max_depth: Parser::DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates an evaluator with the given non-finite policy
    #[must_use]
    pub fn with_policy(policy: NonFinitePolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    /// Sets the nesting limit handed to the parser
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the non-finite policy
    #[must_use]
    pub fn policy(&self) -> NonFinitePolicy {
        self.policy
    }

    /// Evaluates an AST node with IEEE double semantics
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number(n) => *n,
            AstNode::Negate(inner) => -self.evaluate(inner),
            AstNode::BinaryOp { left, op, right } => {
                op.apply(self.evaluate(left), self.evaluate(right))
            }
        }
    }

    /// Parses and evaluates an already clean expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str_with_depth(input, self.max_depth)?;
        self.policy.validate(self.evaluate(&ast))
    }

    /// Sanitizes raw buffer text, then evaluates what is left
    pub fn evaluate_buffer(&self, buffer: &str) -> CalcResult<f64> {
        let clean = sanitize(buffer);
        trace!(raw = buffer, sanitized = %clean, "sanitized expression");
        if clean.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        self.evaluate_str(&clean)
    }
}
