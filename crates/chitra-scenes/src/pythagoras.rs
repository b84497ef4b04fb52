//! पैथागोरसको सूत्र: a right triangle with labelled sides, the theorem at
//! the top edge, and three Nepali captions.

use chitra_core::{Color, Dir, Edge, Language, Vec2};
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

pub fn scene() -> Scene {
    // Vertices of the unit-circumradius triangle, tip up.
    let top = Vec2::new(0.0, 1.0);
    let left = Vec2::new(-0.866, -0.5);
    let right = Vec2::new(0.866, -0.5);

    SceneBuilder::new("pythagoras", "Pythagoras' Theorem")
        .mobject(Mobject::new(
            "triangle",
            MobjectContent::Triangle {
                side: 1.732,
                stroke: Color::BLUE,
                fill: Some(Color::BLUE),
                fill_opacity: 0.5,
            },
        ))
        // The side segments are never drawn themselves; they only anchor
        // the labels.
        .mobject(Mobject::new(
            "hypotenuse",
            MobjectContent::Line {
                from: top,
                to: right,
                color: Color::YELLOW,
                stroke_width: 4.0,
            },
        ))
        .mobject(Mobject::new(
            "base",
            MobjectContent::Line {
                from: top,
                to: left,
                color: Color::RED,
                stroke_width: 4.0,
            },
        ))
        .mobject(Mobject::new(
            "height",
            MobjectContent::Line {
                from: left,
                to: right,
                color: Color::GREEN,
                stroke_width: 4.0,
            },
        ))
        .mobject(
            Mobject::new(
                "label-c",
                MobjectContent::Formula {
                    tex: "c".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("hypotenuse", Dir::Up, 0.25),
        )
        .mobject(
            Mobject::new(
                "label-a",
                MobjectContent::Formula {
                    tex: "a".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("base", Dir::Down, 0.25),
        )
        .mobject(
            Mobject::new(
                "label-b",
                MobjectContent::Formula {
                    tex: "b".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("height", Dir::Left, 0.25),
        )
        .mobject(
            Mobject::new(
                "formula",
                MobjectContent::Formula {
                    tex: "a^2 + b^2 = c^2".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .to_edge(Edge::Top),
        )
        .mobject(caption("caption1", "समकोण त्रिभुज"))
        .mobject(caption("caption2", "कर्णको दैर्ग्यको वर्ग"))
        .mobject(caption(
            "caption3",
            "पैथागोरसको सूत्र: a^2 + b^2 = c^2",
        ))
        .draw(&["triangle"], 1.0)
        .wait(2.0)
        .play(
            vec![
                Action::write("label-c"),
                Action::write("label-a"),
                Action::write("label-b"),
            ],
            1.0,
        )
        .wait(1.0)
        .write(&["formula"], 1.0)
        .wait(2.0)
        .write(&["caption1"], 2.0)
        .wait(1.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["caption2"], 3.0)
        .wait(1.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 4.0)
        .wait(4.0)
        .fade_out(&["caption3"], 1.0)
        .build()
}
