//! 表达式树
//!
//! 运算符节点总有两个子节点，操作数节点没有子节点，这一点由类型本身保证。

use crate::lexer::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// 变量名或非负整数字面量
    Operand(String),
    Binary(BinaryExpr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Operator,
    pub right: Box<Expr>,
}

impl Expr {
    pub fn operand(value: impl Into<String>) -> Self {
        Expr::Operand(value.into())
    }

    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// 节点的值：操作数字符串或运算符符号
    pub fn value(&self) -> &str {
        match self {
            Expr::Operand(value) => value,
            Expr::Binary(binary) => binary.op.as_str(),
        }
    }

    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Operand(_) => None,
            Expr::Binary(binary) => Some(binary.left.as_ref()),
        }
    }

    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Operand(_) => None,
            Expr::Binary(binary) => Some(binary.right.as_ref()),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Expr::Operand(_))
    }

    /// 叶子数量
    pub fn operand_count(&self) -> usize {
        match self {
            Expr::Operand(_) => 1,
            Expr::Binary(b) => b.left.operand_count() + b.right.operand_count(),
        }
    }

    /// 内部节点数量
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Operand(_) => 0,
            Expr::Binary(b) => 1 + b.left.operator_count() + b.right.operator_count(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.operand_count() + self.operator_count()
    }

    /// 单个叶子的深度为 1
    pub fn depth(&self) -> usize {
        match self {
            Expr::Operand(_) => 1,
            Expr::Binary(b) => 1 + b.left.depth().max(b.right.depth()),
        }
    }
}
