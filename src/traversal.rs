//! 深度优先遍历
//!
//! 每个节点的值后面都跟一个空格，包括最后一个。

use serde::Serialize;

use crate::ast::Expr;

pub fn preorder(root: &Expr) -> String {
    let mut out = String::new();
    preorder_into(Some(root), &mut out);
    out
}

pub fn inorder(root: &Expr) -> String {
    let mut out = String::new();
    inorder_into(Some(root), &mut out);
    out
}

pub fn postorder(root: &Expr) -> String {
    let mut out = String::new();
    postorder_into(Some(root), &mut out);
    out
}

fn emit(node: &Expr, out: &mut String) {
    out.push_str(node.value());
    out.push(' ');
}

fn preorder_into(node: Option<&Expr>, out: &mut String) {
    let Some(node) = node else { return };
    emit(node, out);
    preorder_into(node.left(), out);
    preorder_into(node.right(), out);
}

fn inorder_into(node: Option<&Expr>, out: &mut String) {
    let Some(node) = node else { return };
    inorder_into(node.left(), out);
    emit(node, out);
    inorder_into(node.right(), out);
}

fn postorder_into(node: Option<&Expr>, out: &mut String) {
    let Some(node) = node else { return };
    postorder_into(node.left(), out);
    postorder_into(node.right(), out);
    emit(node, out);
}

/// 三种遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversals {
    pub preorder: String,
    pub inorder: String,
    pub postorder: String,
}

impl Traversals {
    pub fn of(root: &Expr) -> Self {
        Self {
            preorder: preorder(root),
            inorder: inorder(root),
            postorder: postorder(root),
        }
    }
}

/// 每个运算符节点都加括号的中缀形式，重新解析后得到同构的树
///
/// 运算符两侧保留空格，避免 `a - 1` 被校验器当作负数字面量。
pub fn to_infix(root: &Expr) -> String {
    match root {
        Expr::Operand(value) => value.clone(),
        Expr::Binary(b) => format!("({} {} {})", to_infix(&b.left), b.op, to_infix(&b.right)),
    }
}
