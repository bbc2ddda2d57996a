use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use log::{debug, info};
use serde::Serialize;

use fast_billboards::billboard::{default_billboards, view_space_positions};
use fast_billboards::cli::Cli;
use fast_billboards::session::FrameReport;
use fast_billboards::{Config, Script, Session};

/// Final state written to stdout after a replay
#[derive(Serialize)]
struct Report {
    frames: Vec<FrameReport>,
    eye: Vec3,
    center: Vec3,
    up: Vec3,
    view: [[f32; 4]; 4],
    billboards: Vec<BillboardReport>,
}

#[derive(Serialize)]
struct BillboardReport {
    sprite_id: i32,
    colour: [f32; 4],
    view_space: Vec3,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.res_dir {
        config.resource_dir = dir;
    }
    info!("resource directory: {}", config.resource_dir.display());

    info!("Controls: w/s forward/back, a/d strafe left/right, q/e strafe up/down, r/f roll, drag to look");

    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };

    let mut session = Session::new(&config);
    let frames = session.replay(&script);
    debug!("viewing uniform block: {} bytes", session.uniform().as_bytes().len());

    if !cli.no_report {
        let camera = session.camera();
        let instances = default_billboards();
        let billboards = instances
            .iter()
            .zip(view_space_positions(camera.view_mat(), &instances))
            .map(|(b, view_space)| BillboardReport {
                sprite_id: b.sprite_id,
                colour: b.colour(),
                view_space,
            })
            .collect();
        let report = Report {
            frames,
            eye: *camera.eye_pos(),
            center: *camera.center(),
            up: *camera.up(),
            view: camera.view_mat().to_cols_array_2d(),
            billboards,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
