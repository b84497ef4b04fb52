//! कालो छिद्र: a black hole forms in space, pulls in a row of five stars
//! that shrink as they fall past the horizon, and finally stretches space
//! itself.

use chitra_core::{Color, Edge, Language, Vec2};
use chitra_ir::builder::SceneBuilder;
use chitra_ir::mobject::{Mobject, MobjectContent};
use chitra_ir::scene::Scene;
use chitra_ir::script::Action;

fn caption(id: &str, text: &str) -> Mobject {
    Mobject::new(
        id,
        MobjectContent::Caption {
            text: text.into(),
            language: Language::Nepali,
            font_size: 28.0,
        },
    )
    .to_edge(Edge::Bottom)
}

fn star(id: &str, x: f64) -> Mobject {
    Mobject::new(
        id,
        MobjectContent::Circle {
            radius: 0.2,
            stroke: Color::YELLOW,
            stroke_width: 4.0,
            fill: Some(Color::YELLOW),
            fill_opacity: 1.0,
        },
    )
    .at(Vec2::new(x, 0.0))
}

pub fn scene() -> Scene {
    SceneBuilder::new("blackhole", "Black Hole")
        // Invisible bounding rect; it only exists to be stretched at the end.
        .mobject(Mobject::new(
            "space",
            MobjectContent::Rect {
                width: 10.0,
                height: 6.0,
                stroke: Color::WHITE,
                stroke_width: 0.0,
                fill: None,
                fill_opacity: 0.0,
            },
        ))
        .mobject(Mobject::new(
            "blackhole",
            MobjectContent::Circle {
                radius: 0.5,
                stroke: Color::RED,
                stroke_width: 4.0,
                fill: Some(Color::BLACK),
                fill_opacity: 1.0,
            },
        ))
        // Five stars arranged in a row, one unit of space between them.
        .mobject(star("star1", -2.8))
        .mobject(star("star2", -1.4))
        .mobject(star("star3", 0.0))
        .mobject(star("star4", 1.4))
        .mobject(star("star5", 2.8))
        .mobject(Mobject::new(
            "stars",
            MobjectContent::Group {
                members: vec![
                    "star1".into(),
                    "star2".into(),
                    "star3".into(),
                    "star4".into(),
                    "star5".into(),
                ],
            },
        ))
        .mobject(caption("caption1", "कालो छिद्र क्या है?"))
        .mobject(caption("caption2", "कालो छिद्र को गुरुत्वाकर्षण"))
        .mobject(caption("caption3", "तारा जीवनकाल समाप्त"))
        .draw(&["space"], 1.0)
        .wait(1.0)
        .write(&["caption1"], 3.0)
        .wait(1.0)
        .fade_in(&["blackhole"], 1.0)
        .wait(1.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["caption2"], 4.0)
        .wait(1.0)
        .fade_in(&["stars"], 1.0)
        .shift("stars", Vec2::LEFT * 3.0, 1.0)
        .play(
            vec![
                Action::scale("star1", 0.1),
                Action::scale("star2", 0.1),
                Action::scale("star3", 0.1),
                Action::scale("star4", 0.1),
                Action::scale("star5", 0.1),
            ],
            1.0,
        )
        .wait(1.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 2.0)
        .wait(1.0)
        .play(
            vec![Action::stretch("space", 1.5, Vec2::ORIGIN)],
            1.0,
        )
        .wait(2.0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitra_core::Timestamp;
    use chitra_ir::layout::Frame;
    use chitra_ir::timeline::SceneState;
    use chitra_ir::validate::validate_scene;

    #[test]
    fn test_blackhole_validates() {
        assert!(validate_scene(&scene()).is_ok());
    }

    #[test]
    fn test_stars_fall_in_and_shrink() {
        let scene = scene();
        let frame = Frame::default();
        let end = scene.duration().as_seconds();
        let state = SceneState::at(&scene, &frame, Timestamp::from_seconds(end));
        let star1 = state.get("star1").unwrap();
        // Shifted three units left of its -2.8 start, shrunk to a tenth.
        assert!((star1.position.x + 5.8).abs() < 0.001);
        assert!((star1.scale.x - 0.1).abs() < 0.001);
        // Space has been stretched horizontally about the black hole.
        let space = state.get("space").unwrap();
        assert!((space.scale.x - 1.5).abs() < 0.001);
        assert!((space.scale.y - 1.0).abs() < 0.001);
    }
}
