//! वर्ग समीकरण: the general quadratic form, then the parabola
//! `x^2 + 2x + 1` drawn over recolored axes, with three Nepali captions.

use chitra_core::{Color, Edge, Language};
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
    SceneBuilder::new("quadratic", "Quadratic Equation")
        .mobject(
            Mobject::new(
                "formula",
                MobjectContent::Formula {
                    tex: "ax^2 + bx + c = 0".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .with_scale(1.5),
        )
        .mobject(Mobject::new(
            "axes",
            MobjectContent::Axes {
                x_range: [-10.0, 10.0, 2.0],
                y_range: [-10.0, 10.0, 2.0],
                x_length: 10.0,
                y_length: 6.0,
                color: Color::WHITE,
                include_tip: false,
            },
        ))
        .mobject(Mobject::new(
            "graph",
            MobjectContent::FunctionGraph {
                coefficients: [1.0, 2.0, 1.0],
                x_range: [-10.0, 10.0],
                color: Color::BLUE,
            },
        ))
        .mobject(caption("caption1", "वर्ग समीकरणको परिचय"))
        .mobject(caption("caption2", "सामान्य रूप: ax^2 + bx + c = 0"))
        .mobject(caption("caption3", "हल गर्ने तरिकाहरु"))
        .write(&["caption1"], 3.0)
        .wait(1.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["formula"], 1.0)
        .wait(1.0)
        .fade_out(&["formula"], 1.0)
        .write(&["caption2"], 4.0)
        .wait(1.0)
        .fade_out(&["caption2"], 1.0)
        .draw(&["axes"], 1.0)
        .draw(&["graph"], 2.0)
        .wait(1.0)
        .set_color("axes", Color::YELLOW, 1.0)
        .wait(1.0)
        .write(&["caption3"], 5.0)
        .wait(2.0)
        .build()
}
