use crate::{
    animation::ease::Ease,
    animation::join::All,
    animation::tween::Tween,
    emphasis::classify::{Classified, classify},
    emphasis::theme::Theme,
    foundation::color::Color,
    scene::node::NodeRef,
};

/// Momentary paint state applied to a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Foreground in the primary color.
    Lit,
    /// Shapes filled and outlined in the accent color.
    Accented,
    /// Foreground in the dimmed color.
    Dimmed,
    /// Every channel transparent.
    Hidden,
}

/// Target colors of one emphasis state, per class and channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintMapping {
    /// Stroke of shape nodes.
    pub shape_stroke: Color,
    /// Fill of shape nodes.
    pub shape_fill: Color,
    /// Stroke of text nodes.
    pub text_stroke: Color,
    /// Fill of text nodes.
    pub text_fill: Color,
}

impl PaintMapping {
    /// `(stroke, fill)` for a classified node.
    pub fn for_node(&self, node: &Classified) -> (Color, Color) {
        if node.is_text() {
            (self.text_stroke, self.text_fill)
        } else {
            (self.shape_stroke, self.shape_fill)
        }
    }
}

impl Emphasis {
    /// Colors this state resolves to under `theme`.
    ///
    /// Shapes carry emphasis in the stroke with the fill cleared; text carries it in the fill
    /// with no stroke. Accented shapes are the exception and are filled too.
    pub fn mapping(self, theme: &Theme) -> PaintMapping {
        let clear = Color::TRANSPARENT;
        match self {
            Self::Lit => PaintMapping {
                shape_stroke: theme.primary,
                shape_fill: clear,
                text_stroke: clear,
                text_fill: theme.primary,
            },
            Self::Accented => PaintMapping {
                shape_stroke: theme.accent,
                shape_fill: theme.accent,
                text_stroke: clear,
                text_fill: theme.primary,
            },
            Self::Dimmed => PaintMapping {
                shape_stroke: theme.dimmed,
                shape_fill: clear,
                text_stroke: clear,
                text_fill: theme.dimmed,
            },
            Self::Hidden => PaintMapping {
                shape_stroke: clear,
                shape_fill: clear,
                text_stroke: clear,
                text_fill: clear,
            },
        }
    }
}

/// Applies [`Emphasis`] states to node subtrees under one [`Theme`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Emphasizer {
    theme: Theme,
    ease: Ease,
}

impl Emphasizer {
    /// Emphasizer for `theme`, easing with [`Ease::InOutCubic`].
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ease: Ease::default(),
        }
    }

    /// Replace the easing used by animated forms.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Set every paint channel under `node` to `state` now.
    pub fn apply(&self, node: &NodeRef, state: Emphasis) {
        let mapping = state.mapping(&self.theme);
        for c in classify(node) {
            let (stroke, fill) = mapping.for_node(&c);
            c.node().stroke().set(stroke);
            c.node().fill().set(fill);
        }
    }

    /// Move every paint channel under `node` to `state` over `duration` seconds.
    pub fn transition(&self, node: &NodeRef, state: Emphasis, duration: f64) -> All {
        let mapping = state.mapping(&self.theme);
        let mut all = All::default();
        for c in classify(node) {
            let (stroke, fill) = mapping.for_node(&c);
            all.push(Tween::new(c.node().stroke(), stroke, duration).with_ease(self.ease));
            all.push(Tween::new(c.node().fill(), fill, duration).with_ease(self.ease));
        }
        tracing::trace!(?state, channels = all.len(), "emphasis transition");
        all
    }

    /// Light every sibling that is one of `targets` and dim the rest, now.
    ///
    /// Membership is node identity.
    pub fn highlight(&self, targets: &[NodeRef], siblings: &[NodeRef]) {
        for s in siblings {
            self.apply(s, highlight_state(targets, s));
        }
    }

    /// Animated form of [`Emphasizer::highlight`].
    pub fn highlight_transition(
        &self,
        targets: &[NodeRef],
        siblings: &[NodeRef],
        duration: f64,
    ) -> All {
        let mut all = All::default();
        for s in siblings {
            all.push(self.transition(s, highlight_state(targets, s), duration));
        }
        all
    }
}

fn highlight_state(targets: &[NodeRef], node: &NodeRef) -> Emphasis {
    if targets.iter().any(|t| t.ptr_eq(node)) {
        Emphasis::Lit
    } else {
        Emphasis::Dimmed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emphasis/engine.rs"]
mod tests;
