//! A ball on level ground is pushed to the right by a constant force.
//! Force, velocity, and acceleration arrows are introduced one by one with
//! `F`, `a`, and `m` labels; the ball slides right, the velocity arrow grows
//! as it speeds up, and the annotations fade away.

use chitra_core::{Color, Dir, Vec2};
use chitra_ir::builder::SceneBuilder;
use chitra_ir::mobject::{Mobject, MobjectContent};
use chitra_ir::scene::Scene;
use chitra_ir::script::Action;

pub fn scene() -> Scene {
    SceneBuilder::new("force", "Force")
        .mobject(Mobject::new(
            "ground",
            MobjectContent::Line {
                from: Vec2::LEFT * 5.0,
                to: Vec2::RIGHT * 5.0,
                color: Color::WHITE,
                stroke_width: 4.0,
            },
        ))
        .mobject(Mobject::new(
            "ball",
            MobjectContent::Dot {
                radius: 0.2,
                color: Color::BLUE,
            },
        ))
        .mobject(Mobject::new(
            "force-arrow",
            MobjectContent::Arrow {
                from: Vec2::ORIGIN,
                to: Vec2::RIGHT * 2.0,
                color: Color::RED,
            },
        ))
        .mobject(
            Mobject::new(
                "label-f",
                MobjectContent::Formula {
                    tex: "F".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("ball", Dir::Up, 0.3),
        )
        .mobject(Mobject::new(
            "velocity-arrow",
            MobjectContent::Arrow {
                from: Vec2::ORIGIN,
                to: Vec2::RIGHT * 1.0,
                color: Color::GREEN,
            },
        ))
        .mobject(Mobject::new(
            "accel-arrow",
            MobjectContent::Arrow {
                from: Vec2::ORIGIN,
                to: Vec2::RIGHT * 1.5,
                color: Color::YELLOW,
            },
        ))
        .mobject(
            Mobject::new(
                "label-a",
                MobjectContent::Formula {
                    tex: "a".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("ball", Dir::Down, 0.3),
        )
        .mobject(
            Mobject::new(
                "label-m",
                MobjectContent::Formula {
                    tex: "m".into(),
                    font_size: 48.0,
                    color: Color::WHITE,
                },
            )
            .next_to("label-a", Dir::Down, 0.2),
        )
        .draw(&["ground"], 1.0)
        .draw(&["ball"], 1.0)
        .draw(&["force-arrow"], 1.0)
        .draw(&["label-f"], 1.0)
        .draw(&["velocity-arrow"], 1.0)
        .draw(&["accel-arrow"], 1.0)
        .draw(&["label-a", "label-m"], 1.0)
        .shift("ball", Vec2::RIGHT * 3.0, 3.0)
        // The annotations jump to the ball's new position, then the velocity
        // arrow grows from one unit to three as the ball gathers speed.
        .instant(vec![
            Action::shift("force-arrow", Vec2::RIGHT * 3.0),
            Action::shift("velocity-arrow", Vec2::RIGHT * 3.0),
            Action::shift("accel-arrow", Vec2::RIGHT * 3.0),
            Action::shift("label-f", Vec2::RIGHT * 3.0),
            Action::shift("label-a", Vec2::RIGHT * 3.0),
            Action::shift("label-m", Vec2::RIGHT * 3.0),
        ])
        .play(
            vec![Action::stretch(
                "velocity-arrow",
                3.0,
                Vec2::new(3.0, 0.0),
            )],
            2.0,
        )
        .play(
            vec![
                Action::set_opacity("force-arrow", 0.0),
                Action::set_opacity("accel-arrow", 0.0),
                Action::set_opacity("velocity-arrow", 0.0),
                Action::set_opacity("label-f", 0.0),
                Action::set_opacity("label-a", 0.0),
                Action::set_opacity("label-m", 0.0),
            ],
            2.0,
        )
        .build()
}
