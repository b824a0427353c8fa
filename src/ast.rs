use crate::{interpreter::lexer::Token, util::stack::ensure_sufficient_stack};

/// A possibly absent syntax tree.
///
/// The parser yields `None` for an operand it could not parse. An absent
/// subtree is still a valid operand: it evaluates to zero.
pub type Subtree = Option<Box<Expr>>;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node exclusively owns its children, so a tree is released exactly
/// once, when its root is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal. The token text holds decimal digits only.
    Literal {
        /// The `Integer` token the literal was built from.
        token: Token,
    },
    /// A unary operation.
    ///
    /// The grammar never produces this node; it exists so trees can be built
    /// directly and evaluated.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Subtree,
    },
    /// A binary operation (addition, subtraction or multiplication).
    BinaryOp {
        /// Left operand.
        left:  Subtree,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Subtree,
    },
}

impl Expr {
    /// Boxes a literal node built from `token`.
    #[must_use]
    pub fn literal(token: Token) -> Subtree {
        Some(Box::new(Self::Literal { token }))
    }

    /// Boxes a unary node. The operand may be absent.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Subtree) -> Subtree {
        Some(Box::new(Self::UnaryOp { op, operand }))
    }

    /// Boxes a binary node. Either operand may be absent.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Subtree, right: Subtree) -> Subtree {
        Some(Box::new(Self::BinaryOp { left, op, right }))
    }

    /// Counts the nodes of this tree, absent children excluded.
    ///
    /// ## Example
    /// ```
    /// use tally::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let one = Expr::literal(Token::new("1", TokenKind::Integer, 0));
    /// let tree = Expr::binary(BinaryOperator::Add, one, None).unwrap();
    ///
    /// assert_eq!(tree.node_count(), 2);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Self::Literal { .. } => 1,
            Self::UnaryOp { operand, .. } => 1 + subtree_node_count(operand.as_deref()),
            Self::BinaryOp { left, right, .. } => {
                1 + subtree_node_count(left.as_deref()) + subtree_node_count(right.as_deref())
            },
        })
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let children = match self {
            Self::Literal { .. } => return,
            Self::UnaryOp { operand, .. } => (operand.take(), None),
            Self::BinaryOp { left, right, .. } => (left.take(), right.take()),
        };
        // Children release their own children in turn.
        ensure_sufficient_stack(move || drop(children));
    }
}

/// Counts the nodes of a possibly absent tree.
#[must_use]
pub fn subtree_node_count(tree: Option<&Expr>) -> usize {
    tree.map_or(0, Expr::node_count)
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "neg"),
        }
    }
}

/// Renders a tree in fully parenthesized prefix form.
///
/// Absent subtrees are shown as `_`, which makes the grouping chosen by the
/// parser visible.
///
/// ## Example
/// ```
/// use tally::{ast::Render, interpreter::parser::parse};
///
/// let outcome = parse("1 - 2 - 3 - 4");
/// assert_eq!(Render(outcome.tree.as_deref()).to_string(),
///            "(- (- 1 2) (- 3 4))");
///
/// let outcome = parse("2 * (");
/// assert_eq!(Render(outcome.tree.as_deref()).to_string(), "(* 2 _)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Render<'a>(pub Option<&'a Expr>);

impl std::fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ensure_sufficient_stack(|| match self.0 {
            None => write!(f, "_"),
            Some(Expr::Literal { token }) => write!(f, "{token}"),
            Some(Expr::UnaryOp { op, operand }) => {
                write!(f, "({op} {})", Render(operand.as_deref()))
            },
            Some(Expr::BinaryOp { left, op, right }) => write!(f,
                                                               "({op} {} {})",
                                                               Render(left.as_deref()),
                                                               Render(right.as_deref())),
        })
    }
}
