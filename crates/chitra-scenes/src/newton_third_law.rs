//! Action and reaction with a ball and a wall: the ball slides into the
//! wall, dims on impact, and a reaction arrow pushes back while three
//! captions narrate the law.

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
    SceneBuilder::new("newton-third-law", "Newton's Third Law")
        .mobject(
            Mobject::new(
                "ball",
                MobjectContent::Circle {
                    radius: 0.5,
                    stroke: Color::BLUE,
                    stroke_width: 4.0,
                    fill: Some(Color::BLUE),
                    fill_opacity: 1.0,
                },
            )
            .at(Vec2::LEFT * 3.0),
        )
        .mobject(
            Mobject::new(
                "wall",
                MobjectContent::Rect {
                    width: 2.0,
                    height: 6.0,
                    stroke: Color::RED,
                    stroke_width: 4.0,
                    fill: Some(Color::RED),
                    fill_opacity: 1.0,
                },
            )
            .at(Vec2::RIGHT * 3.0),
        )
        // Springs from the wall's right face.
        .mobject(Mobject::new(
            "reaction-arrow",
            MobjectContent::Arrow {
                from: Vec2::new(4.0, 0.0),
                to: Vec2::new(6.0, 0.0),
                color: Color::YELLOW,
            },
        ))
        .mobject(caption("caption1", "Action: Ball hits wall"))
        .mobject(caption("caption2", "Reaction: Wall exerts force on ball"))
        .mobject(caption("caption3", "Equal and Opposite Forces"))
        .mobject(Mobject::new(
            "remaining",
            MobjectContent::Group {
                members: vec![
                    "ball".into(),
                    "wall".into(),
                    "reaction-arrow".into(),
                    "caption3".into(),
                ],
            },
        ))
        .pop(&["ball", "wall"])
        .write(&["caption1"], 3.0)
        .shift("ball", Vec2::RIGHT * 6.0, 2.0)
        .fade_out(&["caption1"], 1.0)
        .set_opacity("ball", 0.5, 1.0)
        .wait(0.5)
        .write(&["caption2"], 3.0)
        .pop(&["reaction-arrow"])
        .shift("reaction-arrow", Vec2::RIGHT * 2.0, 1.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 4.0)
        .wait(4.0)
        .fade_out(&["remaining"], 1.0)
        .build()
}
