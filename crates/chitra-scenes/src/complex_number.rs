//! जटिल सङ्ख्या: the complex plane with highlighted real and imaginary
//! axes, and a number vector that moves to a new value.

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
    SceneBuilder::new("complex-number", "Complex Numbers")
        .mobject(Mobject::new(
            "plane",
            MobjectContent::NumberPlane { opacity: 0.5 },
        ))
        .mobject(Mobject::new(
            "real-axis",
            MobjectContent::Line {
                from: Vec2::LEFT * 10.0,
                to: Vec2::RIGHT * 10.0,
                color: Color::RED,
                stroke_width: 4.0,
            },
        ))
        .mobject(Mobject::new(
            "imag-axis",
            MobjectContent::Line {
                from: Vec2::DOWN * 10.0,
                to: Vec2::UP * 10.0,
                color: Color::BLUE,
                stroke_width: 4.0,
            },
        ))
        .mobject(Mobject::new(
            "number-vector",
            MobjectContent::Arrow {
                from: Vec2::ORIGIN,
                to: Vec2::new(3.0, 2.0),
                color: Color::YELLOW,
            },
        ))
        .mobject(caption("caption1", "जटिल सङ्ख्या परिचय"))
        .mobject(caption("caption2", "वास्तविक र कल्पना अक्ष"))
        .mobject(caption("caption3", "जटिल सङ्ख्या निरूपण"))
        .draw(&["plane"], 1.0)
        .wait(1.0)
        .write(&["caption1"], 2.0)
        .wait(1.0)
        .draw(&["real-axis"], 1.0)
        .wait(1.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["caption2"], 3.0)
        .wait(1.0)
        .draw(&["imag-axis"], 1.0)
        .wait(1.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 4.0)
        .wait(1.0)
        .draw(&["number-vector"], 1.0)
        .shift("number-vector", Vec2::new(2.0, 1.0), 1.0)
        .wait(2.0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitra_ir::validate::validate_scene;

    #[test]
    fn test_complex_number_validates() {
        assert!(validate_scene(&scene()).is_ok());
    }
}
