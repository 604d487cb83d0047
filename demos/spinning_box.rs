use rigid_phys::{
    Body, PhysicsScene, SceneConfig,
    shapes::{Shape, ShapeBox, ShapeSphere},
    math::{Rotation, Vector3},
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> rigid_phys::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let time_step = 1.0 / 60.0;

    // The scene only applies gravity and moves bodies along their velocity
    let config = SceneConfig {
        time_step,
        ..SceneConfig::default()
    };
    let mut scene = PhysicsScene::with_config(config)?;
    scene.initialize();

    let ball = scene.add_body(Body::new_dynamic(
        Arc::new(Shape::from(ShapeSphere::new(0.5))),
        Vector3::new(0.0, 20.0, 0.0),
        1.0,
    ));

    // A box whose centroid is off the body origin, integrated on its own
    let box_shape = Arc::new(Shape::from(ShapeBox::build(&[
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(2.0, 0.5, 1.0),
    ])));
    let mut spinner = Body::new_dynamic(box_shape, Vector3::new(5.0, 0.0, 0.0), 4.0);

    // Kick one corner sideways to start it tumbling
    let corner = spinner.body_space_to_world_space(Vector3::new(1.0, 0.25, 0.5));
    spinner.apply_impulse(corner, Vector3::new(0.0, 0.0, 2.0));
    spinner.set_linear_velocity(Vector3::zero());

    println!("Spinning box");
    println!("------------");

    for frame in 0..=60 {
        if frame > 0 {
            scene.step(time_step);
            spinner.update(time_step);
        }

        if frame % 10 == 0 {
            let pos = spinner.center_of_mass_world_space();
            let spin = spinner.angular_velocity();
            println!(
                "t={:.2}s box: cm=({:.2}, {:.2}, {:.2}) spin=({:.2}, {:.2}, {:.2}) angle={:.2}",
                scene.time(),
                pos.x, pos.y, pos.z,
                spin.x, spin.y, spin.z,
                spinner.orientation().angle()
            );

            let ball_pos = scene.get_body(ball)?.position();
            println!("        ball: pos=({:.2}, {:.2}, {:.2})", ball_pos.x, ball_pos.y, ball_pos.z);
        }
    }

    let bounds = spinner.world_bounds();
    println!("Final box bounds: min={} max={}", bounds.min, bounds.max);

    Ok(())
}
