//! Abstract Syntax Tree for amount expressions

/// AST node representing an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Numeric literal
    Number(f64),

    /// Binary operation (a + b, a * b, ...)
    BinaryOp { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression> },

    /// Unary operation (-a, +a)
    UnaryOp { operator: UnaryOperator, operand: Box<Expression> },
}

/// Binary operators supported in amount expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Unary operators supported in amount expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation (-x)
    Negate,
    /// Identity (+x)
    Plus,
}

impl Expression {
    /// Create a literal number expression
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Create a binary operation
    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Self::BinaryOp { left: Box::new(left), operator: op, right: Box::new(right) }
    }

    /// Create a unary operation
    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Self::UnaryOp { operator: op, operand: Box::new(operand) }
    }

    /// Evaluate the expression in IEEE-754 arithmetic.
    ///
    /// Division by zero yields an infinity or NaN rather than an error; the
    /// caller decides whether a non-finite result is acceptable.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expression::Number(value) => *value,
            Expression::UnaryOp { operator, operand } => {
                let value = operand.evaluate();
                match operator {
                    UnaryOperator::Negate => -value,
                    UnaryOperator::Plus => value,
                }
            }
            Expression::BinaryOp { left, operator, right } => {
                let (l, r) = (left.evaluate(), right.evaluate());
                match operator {
                    BinaryOperator::Add => l + r,
                    BinaryOperator::Subtract => l - r,
                    BinaryOperator::Multiply => l * r,
                    BinaryOperator::Divide => l / r,
                }
            }
        }
    }
}
