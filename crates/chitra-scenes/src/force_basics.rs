//! Introductory force scene: an arrow and a mass circle act out force
//! application, inertia, and friction under four English captions.

use chitra_core::{Color, Edge, Language, Vec2};
use chitra_ir::builder::SceneBuilder;
use chitra_ir::mobject::{Mobject, MobjectContent};
use chitra_ir::scene::Scene;

fn caption(id: &str, text: &str) -> Mobject {
    Mobject::new(
        id,
        MobjectContent::Caption {
            text: text.into(),
            language: Language::English,
            font_size: 28.0,
        },
    )
    .to_edge(Edge::Bottom)
}

pub fn scene() -> Scene {
    SceneBuilder::new("force-basics", "Force Basics")
        .mobject(Mobject::new(
            "arrow",
            MobjectContent::Arrow {
                from: Vec2::LEFT,
                to: Vec2::RIGHT,
                color: Color::WHITE,
            },
        ))
        .mobject(Mobject::new(
            "mass",
            MobjectContent::Circle {
                radius: 0.5,
                stroke: Color::BLUE,
                stroke_width: 4.0,
                fill: None,
                fill_opacity: 0.0,
            },
        ))
        .mobject(
            Mobject::new(
                "friction",
                MobjectContent::Text {
                    text: "Friction".into(),
                    font_size: 24.0,
                    color: Color::WHITE,
                },
            )
            .to_edge(Edge::Top),
        )
        .mobject(caption("caption1", "Introduction to Force"))
        .mobject(caption("caption2", "Force Application"))
        .mobject(caption("caption3", "Inertia and Resistance"))
        .mobject(caption("caption4", "Friction Opposes Motion"))
        .write(&["caption1"], 2.0)
        .wait(1.0)
        .draw(&["arrow", "mass"], 1.0)
        .wait(1.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["caption2"], 3.0)
        .shift("arrow", Vec2::RIGHT * 2.0, 1.0)
        .wait(1.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 4.0)
        .shift("mass", Vec2::LEFT * 0.5, 1.0)
        .wait(2.0)
        .fade_out(&["caption3"], 1.0)
        .write(&["caption4"], 3.0)
        .draw(&["friction"], 1.0)
        .wait(1.0)
        .fade_out(&["caption4", "arrow", "mass", "friction"], 1.0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitra_ir::validate::validate_scene;

    #[test]
    fn test_force_basics_validates() {
        assert!(validate_scene(&scene()).is_ok());
    }
}
