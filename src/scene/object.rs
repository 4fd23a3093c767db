use serde::Serialize;

use crate::geometry::ViewWindow;
use crate::math::{Point2, Vector2};
use crate::tessellation::Polyline;
use crate::tex::TexTemplate;

use super::{Color, DOWN, ORIGIN};

/// Handle on an object declared to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(pub u64);

/// Where a text sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Centre at a screen position.
    At { position: Vector2 },
    /// Next to another object, `direction` scaled by the default buffer.
    /// The text follows its target when the target moves.
    NextTo { target: ObjectId, direction: Vector2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// Plain text, no LaTeX.
    Plain,
    /// LaTeX text mode, `$...$` for maths.
    Tex,
    /// LaTeX maths mode.
    MathTex,
    /// Several centred lines of plain text.
    Paragraph,
}

/// A text object, built with chained setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub kind: TextKind,
    pub body: String,
    pub scale: f64,
    pub placement: Placement,
    pub color: Color,
    /// LaTeX template; filled with the scene default when left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TexTemplate>,
}

impl Text {
    fn new(kind: TextKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
            scale: 1.0,
            placement: Placement::At { position: ORIGIN },
            color: Color::WHITE,
            template: None,
        }
    }

    #[must_use]
    pub fn plain(body: impl Into<String>) -> Self {
        Self::new(TextKind::Plain, body)
    }

    #[must_use]
    pub fn tex(body: impl Into<String>) -> Self {
        Self::new(TextKind::Tex, body)
    }

    #[must_use]
    pub fn math(body: impl Into<String>) -> Self {
        Self::new(TextKind::MathTex, body)
    }

    #[must_use]
    pub fn paragraph(lines: &[&str]) -> Self {
        Self::new(TextKind::Paragraph, lines.join("\n"))
    }

    /// Multiplies the current scale.
    #[must_use]
    pub fn scale(mut self, factor: f64) -> Self {
        self.scale *= factor;
        self
    }

    #[must_use]
    pub fn at(mut self, position: Vector2) -> Self {
        self.placement = Placement::At { position };
        self
    }

    #[must_use]
    pub fn next_to(mut self, target: ObjectId, direction: Vector2) -> Self {
        self.placement = Placement::NextTo { target, direction };
        self
    }

    #[must_use]
    pub fn below(self, target: ObjectId) -> Self {
        self.next_to(target, DOWN)
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn template(mut self, template: TexTemplate) -> Self {
        self.template = Some(template);
        self
    }

    #[must_use]
    pub fn is_latex(&self) -> bool {
        matches!(self.kind, TextKind::Tex | TextKind::MathTex)
    }
}

/// Everything the renderer can be asked to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneObject {
    Text(Text),
    Axes {
        window: ViewWindow,
        x_step: Option<f64>,
        y_step: Option<f64>,
        x_length: f64,
        y_length: f64,
    },
    Dot {
        at: Point2,
        color: Color,
        scale: f64,
    },
    Arrow {
        from: Point2,
        to: Point2,
        color: Color,
    },
    Line {
        from: Point2,
        to: Point2,
        color: Color,
        dashed: bool,
    },
    Curve {
        pieces: Vec<Polyline>,
        color: Color,
    },
    /// Segment joining two objects, redrawn whenever one of them moves.
    Link {
        from: ObjectId,
        to: ObjectId,
        color: Color,
    },
    /// Highlight ring in screen units, used on variation tables.
    Ring {
        center: Vector2,
        width: f64,
        height: f64,
        color: Color,
    },
}

impl From<Text> for SceneObject {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
