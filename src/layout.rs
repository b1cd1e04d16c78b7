//! 绘图坐标分配
//!
//! 为外部渲染器导出节点与边的结构快照。节点 id 按前序构造顺序从 1 开始分配；
//! 左子树向左、右子树向右偏移，偏移量逐层减半，每深一层 `y` 增加固定步长。

use serde::Serialize;
use tracing::debug;

use crate::ast::Expr;

/// 布局参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub origin_x: f64,
    pub origin_y: f64,
    /// 根节点到其子节点的水平距离
    pub offset: f64,
    pub level_step: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            origin_x: 300.0,
            origin_y: 50.0,
            offset: 150.0,
            level_step: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl Layout {
    pub fn assign(root: &Expr, options: &LayoutOptions) -> Self {
        let mut layout = Layout::default();
        layout.place(root, options.origin_x, options.origin_y, options.offset, options.level_step);
        debug!(nodes = layout.nodes.len(), edges = layout.edges.len(), "assigned layout");
        layout
    }

    fn next_id(&self) -> usize {
        self.nodes.len() + 1
    }

    fn place(&mut self, node: &Expr, x: f64, y: f64, offset: f64, step: f64) {
        let id = self.next_id();
        self.nodes.push(LayoutNode {
            id,
            label: node.value().to_string(),
            x,
            y,
        });

        if let Some(left) = node.left() {
            let to = self.next_id();
            self.edges.push(LayoutEdge { from: id, to });
            self.place(left, x - offset, y + step, offset / 2.0, step);
        }

        if let Some(right) = node.right() {
            let to = self.next_id();
            self.edges.push(LayoutEdge { from: id, to });
            self.place(right, x + offset, y + step, offset / 2.0, step);
        }
    }

    pub fn node(&self, id: usize) -> Option<&LayoutNode> {
        id.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// 没有入边的节点
    pub fn root(&self) -> Option<&LayoutNode> {
        self.nodes
            .iter()
            .find(|n| !self.edges.iter().any(|e| e.to == n.id))
    }

    pub fn children(&self, id: usize) -> impl Iterator<Item = &LayoutNode> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .filter_map(|e| self.node(e.to))
    }
}
