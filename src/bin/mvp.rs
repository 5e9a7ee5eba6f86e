use anyhow::Context;
use enginemath::{Mat4, Vec3, logging};

fn main() -> anyhow::Result<()> {
    logging::init().context("Couldn't initialize logger")?;

    let model = Mat4::translate(Vec3::new(0.0, 1.0, 0.0))
        * Mat4::rotate(45.0, Vec3::Y)
        * Mat4::scale(Vec3::new(2.0, 2.0, 2.0));
    let view = Mat4::look_at(Vec3::new(4.0, 3.0, 6.0), Vec3::zero(), Vec3::Y);
    let projection = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);

    let mut mvp = projection;
    mvp *= view;
    mvp *= model;

    model.log();
    view.log();
    projection.log();
    mvp.log();

    log::info!(
        "MVP upload: {} bytes, origin lands at {:?}",
        mvp.as_bytes().len(),
        mvp.transform_point(Vec3::zero())
    );

    println!("{}", serde_json::to_string(&mvp)?);

    Ok(())
}
