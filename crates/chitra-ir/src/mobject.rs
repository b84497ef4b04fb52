use serde::{Deserialize, Serialize};

use crate::layout::{Frame, Placement};
use chitra_core::{Color, Dir, Edge, Language, Transform2D, Vec2};

/// Unique identifier for a mobject within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MobjectId(pub String);

impl MobjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for MobjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MobjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The drawable content of a mobject.
///
/// These are the primitives the scene library actually uses; the renderer is
/// expected to support exactly this vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MobjectContent {
    /// An outlined circle, optionally filled.
    Circle {
        radius: f64,
        stroke: Color,
        stroke_width: f64,
        fill: Option<Color>,
        fill_opacity: f64,
    },
    /// A filled disc.
    Dot { radius: f64, color: Color },
    /// An axis-aligned rectangle.
    Rect {
        width: f64,
        height: f64,
        stroke: Color,
        stroke_width: f64,
        fill: Option<Color>,
        fill_opacity: f64,
    },
    /// An equilateral triangle, tip up.
    Triangle {
        side: f64,
        stroke: Color,
        fill: Option<Color>,
        fill_opacity: f64,
    },
    /// A straight segment between two absolute points.
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        stroke_width: f64,
    },
    /// An arrow from one absolute point to another, tip at `to`.
    Arrow { from: Vec2, to: Vec2, color: Color },
    /// A plain text label.
    Text {
        text: String,
        font_size: f64,
        color: Color,
    },
    /// Mathematical text, passed verbatim to the renderer's formula engine.
    Formula {
        tex: String,
        font_size: f64,
        color: Color,
    },
    /// A timed on-screen caption. At most one caption of a scene may be
    /// visible at a time; `validate` enforces this.
    Caption {
        text: String,
        language: Language,
        font_size: f64,
    },
    /// An external image reference. Existence of the asset is the renderer's
    /// concern.
    Image { asset: String, scale: f64 },
    /// A pair of coordinate axes.
    Axes {
        x_range: [f64; 3],
        y_range: [f64; 3],
        x_length: f64,
        y_length: f64,
        color: Color,
        include_tip: bool,
    },
    /// A full-frame coordinate grid.
    NumberPlane { opacity: f64 },
    /// The quadratic curve `ax^2 + bx + c` plotted over `x_range`.
    FunctionGraph {
        coefficients: [f64; 3],
        x_range: [f64; 2],
        color: Color,
    },
    /// Acts on several mobjects at once. Members must exist and must not be
    /// groups themselves.
    Group { members: Vec<MobjectId> },
}

impl MobjectContent {
    /// Short kind name for logs and `inspect` output.
    pub fn kind(&self) -> &'static str {
        match self {
            MobjectContent::Circle { .. } => "circle",
            MobjectContent::Dot { .. } => "dot",
            MobjectContent::Rect { .. } => "rect",
            MobjectContent::Triangle { .. } => "triangle",
            MobjectContent::Line { .. } => "line",
            MobjectContent::Arrow { .. } => "arrow",
            MobjectContent::Text { .. } => "text",
            MobjectContent::Formula { .. } => "formula",
            MobjectContent::Caption { .. } => "caption",
            MobjectContent::Image { .. } => "image",
            MobjectContent::Axes { .. } => "axes",
            MobjectContent::NumberPlane { .. } => "number-plane",
            MobjectContent::FunctionGraph { .. } => "function-graph",
            MobjectContent::Group { .. } => "group",
        }
    }

    /// The dominant color of the content, used as the starting point for
    /// animated recolors. Captions and groups have no single color.
    pub fn primary_color(&self) -> Option<Color> {
        match self {
            MobjectContent::Circle { stroke, .. } => Some(*stroke),
            MobjectContent::Dot { color, .. } => Some(*color),
            MobjectContent::Rect { stroke, .. } => Some(*stroke),
            MobjectContent::Triangle { stroke, .. } => Some(*stroke),
            MobjectContent::Line { color, .. } => Some(*color),
            MobjectContent::Arrow { color, .. } => Some(*color),
            MobjectContent::Text { color, .. } => Some(*color),
            MobjectContent::Formula { color, .. } => Some(*color),
            MobjectContent::Axes { color, .. } => Some(*color),
            MobjectContent::FunctionGraph { color, .. } => Some(*color),
            MobjectContent::Caption { .. }
            | MobjectContent::Image { .. }
            | MobjectContent::NumberPlane { .. }
            | MobjectContent::Group { .. } => None,
        }
    }

    /// Offset from the mobject's position to its visual center. Lines and
    /// arrows carry absolute endpoints, so their center is the segment
    /// midpoint; everything else is drawn centered on its position.
    pub fn center_offset(&self) -> Vec2 {
        match self {
            MobjectContent::Line { from, to, .. } | MobjectContent::Arrow { from, to, .. } => {
                (*from + *to) * 0.5
            }
            _ => Vec2::ORIGIN,
        }
    }

    /// Nominal unscaled extent (width, height) in scene units, used by the
    /// layout solver for edge and relative placement. Text extents are an
    /// em-box estimate; the renderer performs true text layout.
    pub fn extent(&self, frame: &Frame) -> (f64, f64) {
        match self {
            MobjectContent::Circle { radius, .. } | MobjectContent::Dot { radius, .. } => {
                (radius * 2.0, radius * 2.0)
            }
            MobjectContent::Rect { width, height, .. } => (*width, *height),
            MobjectContent::Triangle { side, .. } => (*side, side * 3.0_f64.sqrt() / 2.0),
            MobjectContent::Line { from, to, .. } | MobjectContent::Arrow { from, to, .. } => {
                ((to.x - from.x).abs(), (to.y - from.y).abs())
            }
            MobjectContent::Text {
                text, font_size, ..
            } => text_extent(text, *font_size),
            MobjectContent::Formula { tex, font_size, .. } => text_extent(tex, *font_size),
            MobjectContent::Caption {
                text, font_size, ..
            } => text_extent(text, *font_size),
            MobjectContent::Image { scale, .. } => (4.0 * scale, 3.0 * scale),
            MobjectContent::Axes {
                x_length, y_length, ..
            } => (*x_length, *y_length),
            MobjectContent::NumberPlane { .. } => (frame.width, frame.height),
            MobjectContent::FunctionGraph {
                coefficients,
                x_range,
                ..
            } => {
                let [a, b, c] = *coefficients;
                let f = |x: f64| a * x * x + b * x + c;
                let mut lo = f(x_range[0]).min(f(x_range[1]));
                let mut hi = f(x_range[0]).max(f(x_range[1]));
                // The vertex can exceed both endpoint values.
                if a != 0.0 {
                    let vx = -b / (2.0 * a);
                    if vx > x_range[0] && vx < x_range[1] {
                        lo = lo.min(f(vx));
                        hi = hi.max(f(vx));
                    }
                }
                ((x_range[1] - x_range[0]).abs(), (hi - lo).abs())
            }
            MobjectContent::Group { .. } => (0.0, 0.0),
        }
    }
}

/// Em-box estimate for label-sized text: 28 pt is roughly 0.56 scene units
/// tall, and an average glyph is about half as wide as it is tall.
fn text_extent(text: &str, font_size: f64) -> (f64, f64) {
    let height = font_size * 0.02;
    let width = height * 0.5 * text.chars().count() as f64;
    (width, height)
}

/// A drawable, animatable object in a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mobject {
    /// Unique mobject identifier within the scene.
    pub id: MobjectId,
    /// What this mobject draws.
    pub content: MobjectContent,
    /// Initial layout: absolute point, frame edge, or relative to another
    /// mobject.
    pub placement: Placement,
    /// Initial transform (scale, rotation, opacity; position comes from the
    /// resolved placement).
    pub transform: Transform2D,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
}

impl Mobject {
    /// Create a mobject at the origin with an identity transform.
    pub fn new(id: impl Into<String>, content: MobjectContent) -> Self {
        Self {
            id: MobjectId::new(id),
            content,
            placement: Placement::At(Vec2::ORIGIN),
            transform: Transform2D::identity(),
            z_index: 0,
        }
    }

    /// Builder: place at an absolute point.
    pub fn at(mut self, point: Vec2) -> Self {
        self.placement = Placement::At(point);
        self
    }

    /// Builder: pin to a frame edge with the default margin.
    pub fn to_edge(mut self, edge: Edge) -> Self {
        self.placement = Placement::ToEdge {
            edge,
            margin: crate::layout::DEFAULT_EDGE_MARGIN,
        };
        self
    }

    /// Builder: place next to another mobject with an explicit gap.
    pub fn next_to(mut self, anchor: impl Into<MobjectId>, direction: Dir, gap: f64) -> Self {
        self.placement = Placement::NextTo {
            anchor: anchor.into(),
            direction,
            gap,
        };
        self
    }

    /// Builder: uniform initial scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.transform.scale = Vec2::new(scale, scale);
        self
    }

    /// Builder: initial opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.transform.opacity = opacity;
        self
    }

    /// Builder: stacking order.
    pub fn with_z(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobject_creation() {
        let m = Mobject::new(
            "ball",
            MobjectContent::Dot {
                radius: 0.2,
                color: Color::BLUE,
            },
        );
        assert_eq!(m.id.0, "ball");
        assert_eq!(m.content.kind(), "dot");
        assert_eq!(m.placement, Placement::At(Vec2::ORIGIN));
        assert_eq!(m.z_index, 0);
    }

    #[test]
    fn test_mobject_builders() {
        let m = Mobject::new(
            "label",
            MobjectContent::Text {
                text: "F".into(),
                font_size: 28.0,
                color: Color::WHITE,
            },
        )
        .next_to("ball", Dir::Up, 0.3)
        .with_scale(1.5)
        .with_z(2);
        assert!(matches!(m.placement, Placement::NextTo { .. }));
        assert!((m.transform.scale.x - 1.5).abs() < 0.001);
        assert_eq!(m.z_index, 2);
    }

    #[test]
    fn test_extent_shapes() {
        let frame = Frame::new(8.0 * 16.0 / 9.0, 8.0);
        let circle = MobjectContent::Circle {
            radius: 0.5,
            stroke: Color::BLUE,
            stroke_width: 4.0,
            fill: None,
            fill_opacity: 0.0,
        };
        assert_eq!(circle.extent(&frame), (1.0, 1.0));

        let line = MobjectContent::Line {
            from: Vec2::LEFT * 5.0,
            to: Vec2::RIGHT * 5.0,
            color: Color::WHITE,
            stroke_width: 2.0,
        };
        assert_eq!(line.extent(&frame), (10.0, 0.0));
        assert_eq!(line.center_offset(), Vec2::ORIGIN);

        let arrow = MobjectContent::Arrow {
            from: Vec2::new(4.0, 0.0),
            to: Vec2::new(6.0, 0.0),
            color: Color::YELLOW,
        };
        assert_eq!(arrow.center_offset(), Vec2::new(5.0, 0.0));

        let plane = MobjectContent::NumberPlane { opacity: 0.5 };
        assert_eq!(plane.extent(&frame), (frame.width, frame.height));
    }

    #[test]
    fn test_extent_function_graph_includes_vertex() {
        // x^2 + 2x + 1 over [-10, 10]: vertex at x=-1 gives 0, max at x=10
        // gives 121.
        let graph = MobjectContent::FunctionGraph {
            coefficients: [1.0, 2.0, 1.0],
            x_range: [-10.0, 10.0],
            color: Color::BLUE,
        };
        let frame = Frame::new(14.0, 8.0);
        let (w, h) = graph.extent(&frame);
        assert!((w - 20.0).abs() < 0.001);
        assert!((h - 121.0).abs() < 0.001);
    }

    #[test]
    fn test_primary_color() {
        let dot = MobjectContent::Dot {
            radius: 0.2,
            color: Color::RED,
        };
        assert_eq!(dot.primary_color(), Some(Color::RED));
        let caption = MobjectContent::Caption {
            text: "गाई".into(),
            language: Language::Nepali,
            font_size: 28.0,
        };
        assert!(caption.primary_color().is_none());
    }
}
