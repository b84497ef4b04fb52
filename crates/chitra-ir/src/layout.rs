use serde::{Deserialize, Serialize};

use crate::mobject::{Mobject, MobjectId};
use chitra_core::{Dir, Edge, Vec2};

/// Default margin between a mobject and the frame edge it is pinned to.
pub const DEFAULT_EDGE_MARGIN: f64 = 0.5;

/// Default gap for relative placement.
pub const DEFAULT_GAP: f64 = 0.25;

/// Initial layout of a mobject, resolved against the scene frame before the
/// script starts. Relational placements may chain (a label next to a label
/// next to a dot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// An absolute point in scene units.
    At(Vec2),
    /// Pinned to a frame edge, centered along the other axis.
    ToEdge { edge: Edge, margin: f64 },
    /// Placed beside another mobject.
    NextTo {
        anchor: MobjectId,
        direction: Dir,
        gap: f64,
    },
}

/// The scene frame in scene units, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Frame with the given unit height and the aspect ratio of the output
    /// resolution.
    pub fn with_aspect(height: f64, output_width: u32, output_height: u32) -> Self {
        let aspect = output_width as f64 / output_height as f64;
        Self {
            width: height * aspect,
            height,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

impl Default for Frame {
    fn default() -> Self {
        // 16:9 at the canonical 8-unit height
        Self::with_aspect(8.0, 1920, 1080)
    }
}

/// Resolve initial positions for all mobjects of a scene.
///
/// Two-pass solve: absolute placements (`At`, `ToEdge`) first, then
/// relational `NextTo` placements. Relational chains are resolved by bounded
/// iteration; anchors that never resolve keep the origin.
pub fn resolve_positions(frame: &Frame, mobjects: &[Mobject]) -> Vec<(MobjectId, Vec2)> {
    let mut results: Vec<(MobjectId, Vec2)> = Vec::with_capacity(mobjects.len());

    // Pass 1: absolute placements
    for m in mobjects {
        let (w, h) = scaled_extent(m, frame);
        let position = match &m.placement {
            Placement::At(point) => *point,
            Placement::ToEdge { edge, margin } => match edge {
                Edge::Top => Vec2::new(0.0, frame.half_height() - margin - h / 2.0),
                Edge::Bottom => Vec2::new(0.0, -frame.half_height() + margin + h / 2.0),
                Edge::Left => Vec2::new(-frame.half_width() + margin + w / 2.0, 0.0),
                Edge::Right => Vec2::new(frame.half_width() - margin - w / 2.0, 0.0),
            },
            Placement::NextTo { .. } => Vec2::ORIGIN,
        };
        results.push((m.id.clone(), position));
    }

    // Pass 2: relational placements, iterated to settle chains
    for _pass in 0..3 {
        for (i, m) in mobjects.iter().enumerate() {
            if let Placement::NextTo {
                anchor,
                direction,
                gap,
            } = &m.placement
            {
                let anchor_index = mobjects.iter().position(|a| &a.id == anchor);
                let Some(anchor_index) = anchor_index else {
                    continue;
                };
                // Anchor on the visual center: lines and arrows carry
                // absolute endpoints, so their position alone is not where
                // they are drawn.
                let anchor_center = results[anchor_index].1
                    + mobjects[anchor_index].content.center_offset();
                let (aw, ah) = scaled_extent(&mobjects[anchor_index], frame);
                let (w, h) = scaled_extent(m, frame);
                let offset = match direction {
                    Dir::Up | Dir::Down => ah / 2.0 + gap + h / 2.0,
                    Dir::Left | Dir::Right => aw / 2.0 + gap + w / 2.0,
                };
                results[i].1 =
                    anchor_center + direction.unit() * offset - m.content.center_offset();
            }
        }
    }

    results
}

fn scaled_extent(m: &Mobject, frame: &Frame) -> (f64, f64) {
    let (w, h) = m.content.extent(frame);
    (w * m.transform.scale.x, h * m.transform.scale.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mobject::MobjectContent;
    use chitra_core::{Color, Language};

    fn caption(id: &str, text: &str) -> Mobject {
        Mobject::new(
            id,
            MobjectContent::Caption {
                text: text.into(),
                language: Language::English,
                font_size: 28.0,
            },
        )
    }

    #[test]
    fn test_at_placement() {
        let frame = Frame::default();
        let m = Mobject::new(
            "ball",
            MobjectContent::Dot {
                radius: 0.2,
                color: Color::BLUE,
            },
        )
        .at(Vec2::new(3.0, 0.0));
        let resolved = resolve_positions(&frame, &[m]);
        assert_eq!(resolved[0].1, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_to_edge_bottom() {
        let frame = Frame::default();
        let m = caption("c1", "Action: Ball hits wall").to_edge(Edge::Bottom);
        let resolved = resolve_positions(&frame, &[m]);
        let pos = resolved[0].1;
        assert!((pos.x).abs() < 0.001);
        // Bottom edge is -4.0; margin 0.5 plus half the caption height
        let expected_y = -4.0 + 0.5 + 28.0 * 0.02 / 2.0;
        assert!((pos.y - expected_y).abs() < 0.001);
    }

    #[test]
    fn test_to_edge_top() {
        let frame = Frame::default();
        let m = Mobject::new(
            "formula",
            MobjectContent::Formula {
                tex: "a^2 + b^2 = c^2".into(),
                font_size: 48.0,
                color: Color::WHITE,
            },
        )
        .to_edge(Edge::Top);
        let resolved = resolve_positions(&frame, &[m]);
        assert!(resolved[0].1.y > 2.5, "formula should sit near the top edge");
    }

    #[test]
    fn test_next_to_below_anchor() {
        let frame = Frame::default();
        let ball = Mobject::new(
            "ball",
            MobjectContent::Dot {
                radius: 0.2,
                color: Color::BLUE,
            },
        );
        let label = Mobject::new(
            "a",
            MobjectContent::Text {
                text: "a".into(),
                font_size: 28.0,
                color: Color::WHITE,
            },
        )
        .next_to("ball", Dir::Down, 0.3);
        let resolved = resolve_positions(&frame, &[ball, label]);
        let pos = resolved[1].1;
        assert!((pos.x).abs() < 0.001);
        // Below the dot: -(0.2 + 0.3 + half text height)
        assert!(pos.y < -0.4 && pos.y > -0.9);
    }

    #[test]
    fn test_next_to_chain() {
        // "m" hangs below "a", which hangs below the ball: a two-link chain.
        let frame = Frame::default();
        let ball = Mobject::new(
            "ball",
            MobjectContent::Dot {
                radius: 0.2,
                color: Color::BLUE,
            },
        );
        let a = Mobject::new(
            "a",
            MobjectContent::Text {
                text: "a".into(),
                font_size: 28.0,
                color: Color::WHITE,
            },
        )
        .next_to("ball", Dir::Down, 0.3);
        let m = Mobject::new(
            "m",
            MobjectContent::Text {
                text: "m".into(),
                font_size: 28.0,
                color: Color::WHITE,
            },
        )
        .next_to("a", Dir::Down, 0.2);
        let resolved = resolve_positions(&frame, &[ball, a, m]);
        assert!(
            resolved[2].1.y < resolved[1].1.y,
            "chained label must land below its anchor"
        );
    }

    #[test]
    fn test_unknown_anchor_keeps_origin() {
        let frame = Frame::default();
        let label = caption("c", "text").next_to("missing", Dir::Up, 0.1);
        let resolved = resolve_positions(&frame, &[label]);
        assert_eq!(resolved[0].1, Vec2::ORIGIN);
    }

    #[test]
    fn test_frame_with_aspect() {
        let frame = Frame::with_aspect(8.0, 1920, 1080);
        assert!((frame.width - 8.0 * 16.0 / 9.0).abs() < 0.001);
        assert!((frame.half_height() - 4.0).abs() < 0.001);
    }
}
