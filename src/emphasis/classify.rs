use crate::scene::node::{NodeKind, NodeRef};

/// A paint-bearing node found by [`classify`].
#[derive(Clone, Debug)]
pub enum Classified {
    /// Glyph run; emphasis goes through the fill.
    Text(NodeRef),
    /// Stroke/fill geometry; emphasis goes through the stroke.
    Shape(NodeRef),
}

impl Classified {
    /// The classified node.
    pub fn node(&self) -> &NodeRef {
        match self {
            Self::Text(n) | Self::Shape(n) => n,
        }
    }

    /// Return `true` for text nodes.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Both classes of a subtree, collected.
#[derive(Clone, Debug, Default)]
pub struct Classification {
    /// Text nodes in preorder.
    pub texts: Vec<NodeRef>,
    /// Shape nodes in preorder.
    pub shapes: Vec<NodeRef>,
}

impl Classification {
    /// Total number of classified nodes.
    pub fn len(&self) -> usize {
        self.texts.len() + self.shapes.len()
    }

    /// Return `true` when the subtree carries no paint at all.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.shapes.is_empty()
    }
}

/// Lazy preorder walk yielding every paint-bearing node of a subtree once.
///
/// Text nodes are leaves of the walk. Shapes and containers are descended into; containers
/// themselves carry no paint and are not yielded.
#[derive(Clone, Debug)]
pub struct Classify {
    stack: Vec<NodeRef>,
}

/// Start classifying `root` and its descendants.
pub fn classify(root: &NodeRef) -> Classify {
    Classify {
        stack: vec![root.clone()],
    }
}

impl Classify {
    /// Only the text nodes.
    pub fn texts(self) -> impl Iterator<Item = NodeRef> {
        self.filter_map(|c| match c {
            Classified::Text(n) => Some(n),
            Classified::Shape(_) => None,
        })
    }

    /// Only the shape nodes.
    pub fn shapes(self) -> impl Iterator<Item = NodeRef> {
        self.filter_map(|c| match c {
            Classified::Shape(n) => Some(n),
            Classified::Text(_) => None,
        })
    }

    /// Drain the walk into both classes.
    pub fn partition(self) -> Classification {
        let mut out = Classification::default();
        for c in self {
            match c {
                Classified::Text(n) => out.texts.push(n),
                Classified::Shape(n) => out.shapes.push(n),
            }
        }
        out
    }
}

impl Iterator for Classify {
    type Item = Classified;

    fn next(&mut self) -> Option<Classified> {
        loop {
            let node = self.stack.pop()?;
            let (text, shape) = match node.kind() {
                NodeKind::Text(_) => (true, false),
                NodeKind::Shape(_) => (false, true),
                NodeKind::Container => (false, false),
            };
            if text {
                return Some(Classified::Text(node));
            }
            self.stack.extend(node.children().into_iter().rev());
            if shape {
                return Some(Classified::Shape(node));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emphasis/classify.rs"]
mod tests;
