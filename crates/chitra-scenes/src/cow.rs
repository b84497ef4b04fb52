//! गाई: a cow picture over a grass strip, moving down to graze. The image
//! itself is an external asset; whether the file exists is the renderer's
//! concern.

use chitra_core::{Color, Edge, Language, Vec2};
use chitra_ir::builder::SceneBuilder;
use chitra_ir::mobject::{Mobject, MobjectContent};
use chitra_ir::scene::Scene;

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
    SceneBuilder::new("cow", "Cow")
        .mobject(
            Mobject::new(
                "grass",
                MobjectContent::Rect {
                    width: 10.0,
                    height: 2.0,
                    stroke: Color::GREEN,
                    stroke_width: 4.0,
                    fill: None,
                    fill_opacity: 0.0,
                },
            )
            .to_edge(Edge::Bottom),
        )
        .mobject(Mobject::new(
            "cow",
            MobjectContent::Image {
                asset: "cow_image".into(),
                scale: 0.5,
            },
        ))
        .mobject(caption("caption1", "गाई"))
        .mobject(caption("caption2", "गाईको दुध"))
        .mobject(caption("caption3", "गाई चर्दै"))
        .pop(&["grass", "cow"])
        .write(&["caption1"], 2.0)
        .wait(0.0)
        .scale("cow", 1.0, 1.0)
        .wait(0.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["caption2"], 3.0)
        .wait(0.0)
        // Down to the bottom edge of the frame.
        .move_to("cow", Vec2::new(0.0, -2.75), 1.0)
        .wait(0.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 4.0)
        .wait(4.0)
        // Up to sit just above the grass strip.
        .move_to("cow", Vec2::new(0.0, -0.5), 1.0)
        .wait(2.0)
        .build()
}
