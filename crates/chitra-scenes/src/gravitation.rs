//! Earth, moon, and sun with mass labels; the law of gravitation appears
//! next to the attraction arrow, a scale bar marks one astronomical unit,
//! and the moon completes one constant-speed orbit before the scene fades.

use chitra_core::{Color, Dir, Easing, Vec2};
use chitra_ir::builder::SceneBuilder;
use chitra_ir::mobject::{Mobject, MobjectContent};
use chitra_ir::scene::Scene;
use chitra_ir::script::Action;

pub fn scene() -> Scene {
    SceneBuilder::new("gravitation", "Gravitational Force")
        .mobject(Mobject::new(
            "earth",
            MobjectContent::Dot {
                radius: 0.5,
                color: Color::BLUE,
            },
        ))
        .mobject(
            Mobject::new(
                "moon",
                MobjectContent::Dot {
                    radius: 0.2,
                    color: Color::GRAY,
                },
            )
            .at(Vec2::new(3.0, 0.0)),
        )
        // Far off screen to the left; the frame clips it.
        .mobject(
            Mobject::new(
                "sun",
                MobjectContent::Dot {
                    radius: 1.5,
                    color: Color::YELLOW,
                },
            )
            .at(Vec2::new(-10.0, 0.0)),
        )
        .mobject(
            Mobject::new(
                "mass1",
                MobjectContent::Text {
                    text: "Mass1".into(),
                    font_size: 24.0,
                    color: Color::WHITE,
                },
            )
            .next_to("earth", Dir::Up, 0.5),
        )
        .mobject(
            Mobject::new(
                "mass2",
                MobjectContent::Text {
                    text: "Mass2".into(),
                    font_size: 24.0,
                    color: Color::WHITE,
                },
            )
            .next_to("moon", Dir::Up, 0.5),
        )
        .mobject(Mobject::new(
            "orbit",
            MobjectContent::Circle {
                radius: 3.0,
                stroke: Color::WHITE,
                stroke_width: 1.0,
                fill: None,
                fill_opacity: 0.0,
            },
        ))
        .mobject(Mobject::new(
            "gravity-arrow",
            MobjectContent::Arrow {
                from: Vec2::ORIGIN,
                to: Vec2::new(3.0, 0.0),
                color: Color::RED,
            },
        ))
        .mobject(
            Mobject::new(
                "formula",
                MobjectContent::Text {
                    text: "F = G * m1 * m2 / r^2".into(),
                    font_size: 24.0,
                    color: Color::WHITE,
                },
            )
            .next_to("gravity-arrow", Dir::Right, 0.5),
        )
        .mobject(Mobject::new(
            "scale-bar",
            MobjectContent::Line {
                from: Vec2::new(-5.0, -4.0),
                to: Vec2::new(-3.0, -4.0),
                color: Color::WHITE,
                stroke_width: 4.0,
            },
        ))
        .mobject(
            Mobject::new(
                "scale-text",
                MobjectContent::Text {
                    text: "1 AU".into(),
                    font_size: 20.0,
                    color: Color::WHITE,
                },
            )
            .next_to("scale-bar", Dir::Down, 0.2),
        )
        .draw(&["earth", "moon", "sun"], 1.0)
        .draw(&["mass1", "mass2"], 1.0)
        .draw(&["orbit"], 1.0)
        .draw(&["gravity-arrow"], 1.0)
        .draw(&["formula"], 1.0)
        .draw(&["scale-bar", "scale-text"], 1.0)
        .play_with(
            vec![Action::follow_path("moon", Vec2::ORIGIN, 1.0)],
            5.0,
            Easing::Linear,
        )
        .fade_out(
            &[
                "earth",
                "moon",
                "sun",
                "mass1",
                "mass2",
                "orbit",
                "gravity-arrow",
                "formula",
                "scale-bar",
                "scale-text",
            ],
            1.0,
        )
        .wait(1.0)
        .build()
}
