//! A ball at rest on a ground line is pushed four units to the right; force
//! and acceleration vectors appear with formula labels and a `t=0` marker
//! before everything annotated fades out.

use chitra_core::{Color, Dir, Vec2};
use chitra_ir::builder::SceneBuilder;
use chitra_ir::mobject::{Mobject, MobjectContent};
use chitra_ir::scene::Scene;
use chitra_ir::script::Action;

pub fn scene() -> Scene {
    // The ball rests half a unit above the left end of the ground line.
    let ball_start = Vec2::new(-3.0, -0.5);

    SceneBuilder::new("force-vector", "Force Vector Illustration")
        .mobject(Mobject::new(
            "ground",
            MobjectContent::Line {
                from: Vec2::new(-3.0, -1.0),
                to: Vec2::new(3.0, -1.0),
                color: Color::WHITE,
                stroke_width: 4.0,
            },
        ))
        .mobject(
            Mobject::new(
                "axes",
                MobjectContent::Axes {
                    x_range: [-4.0, 4.0, 1.0],
                    y_range: [-1.0, 1.0, 1.0],
                    x_length: 8.0,
                    y_length: 2.0,
                    color: Color::BLUE,
                    include_tip: true,
                },
            )
            .at(Vec2::new(0.0, -1.0)),
        )
        .mobject(
            Mobject::new(
                "ball",
                MobjectContent::Dot {
                    radius: 0.2,
                    color: Color::RED,
                },
            )
            .at(ball_start),
        )
        .mobject(Mobject::new(
            "force-arrow",
            MobjectContent::Arrow {
                from: ball_start,
                to: ball_start + Vec2::RIGHT * 2.0,
                color: Color::YELLOW,
            },
        ))
        .mobject(
            Mobject::new(
                "force-label",
                MobjectContent::Formula {
                    tex: r"\vec{F}".into(),
                    font_size: 48.0,
                    color: Color::YELLOW,
                },
            )
            .next_to("force-arrow", Dir::Up, 0.1),
        )
        .mobject(Mobject::new(
            "acc-arrow",
            MobjectContent::Arrow {
                from: ball_start,
                to: ball_start + Vec2::LEFT * 1.5,
                color: Color::GREEN,
            },
        ))
        .mobject(
            Mobject::new(
                "acc-label",
                MobjectContent::Formula {
                    tex: r"\vec{a}".into(),
                    font_size: 48.0,
                    color: Color::GREEN,
                },
            )
            .next_to("acc-arrow", Dir::Down, 0.1),
        )
        .mobject(
            Mobject::new(
                "time-label",
                MobjectContent::Formula {
                    tex: "t=0".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("axes", Dir::Down, 0.5),
        )
        .draw(&["ground", "axes"], 1.0)
        .wait(0.5)
        .draw(&["ball"], 1.0)
        .wait(0.5)
        .play(
            vec![Action::draw("force-arrow"), Action::write("force-label")],
            1.0,
        )
        .wait(0.5)
        .shift("ball", Vec2::RIGHT * 4.0, 2.0)
        .wait(0.5)
        .play(
            vec![Action::draw("acc-arrow"), Action::write("acc-label")],
            1.0,
        )
        .wait(0.5)
        .write(&["time-label"], 1.0)
        .wait(1.0)
        .fade_out(
            &[
                "force-arrow",
                "force-label",
                "acc-arrow",
                "acc-label",
                "time-label",
            ],
            1.0,
        )
        .wait(0.5)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitra_ir::validate::validate_scene;

    #[test]
    fn test_force_vector_validates() {
        assert!(validate_scene(&scene()).is_ok());
    }
}
