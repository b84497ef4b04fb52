//! न्यूटनको तेस्रो नियम: two circles exchange equal and opposite forces,
//! narrated by three Nepali captions and a long closing hold.

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

fn circle(id: &str, color: Color, at: Vec2) -> Mobject {
    Mobject::new(
        id,
        MobjectContent::Circle {
            radius: 1.0,
            stroke: color,
            stroke_width: 4.0,
            fill: None,
            fill_opacity: 0.0,
        },
    )
    .at(at)
}

pub fn scene() -> Scene {
    SceneBuilder::new("newton-third-law-np", "Newton's Third Law (Nepali)")
        .mobject(circle("object1", Color::BLUE, Vec2::LEFT * 3.0))
        .mobject(circle("object2", Color::RED, Vec2::RIGHT * 3.0))
        .mobject(Mobject::new(
            "arrow1",
            MobjectContent::Arrow {
                from: Vec2::LEFT * 3.0,
                to: Vec2::RIGHT * 3.0,
                color: Color::GREEN,
            },
        ))
        .mobject(Mobject::new(
            "arrow2",
            MobjectContent::Arrow {
                from: Vec2::RIGHT * 3.0,
                to: Vec2::LEFT * 3.0,
                color: Color::GREEN,
            },
        ))
        .mobject(caption("caption1", "क्रिया र प्रतिक्रिया"))
        .mobject(caption("caption2", "न्यूटनको तेस्रो नियम"))
        .mobject(caption("caption3", "दुई वस्तु बीचको अन्तरक्रिया"))
        .draw(&["object1", "object2"], 1.0)
        .wait(1.0)
        .write(&["caption1"], 2.0)
        .wait(1.0)
        .shift("object1", Vec2::RIGHT * 2.0, 1.0)
        .wait(1.0)
        .fade_out(&["caption1"], 1.0)
        .write(&["caption2"], 3.0)
        .wait(1.0)
        .draw(&["arrow1"], 1.0)
        .wait(1.0)
        .draw(&["arrow2"], 1.0)
        .wait(1.0)
        .fade_out(&["caption2"], 1.0)
        .write(&["caption3"], 4.0)
        .wait(10.0)
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
    fn test_newton_np_validates() {
        assert!(validate_scene(&scene()).is_ok());
    }

    #[test]
    fn test_final_caption_holds_to_the_end() {
        let scene = scene();
        let frame = Frame::default();
        // The third caption stays up through the whole 10-second hold.
        let state = SceneState::at(&scene, &frame, Timestamp::from_seconds(25.0));
        let (_, text) = state.visible_caption(&scene).unwrap();
        assert_eq!(text, "दुई वस्तु बीचको अन्तरक्रिया");
    }
}
