use anyhow::{Context, Result};
use chess960_core::{generator, renderer};
use log::info;
use random_setup::{
    config::{OutputFormat, Settings},
    RandomSource,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let settings = Settings::from_env().context("invalid CHESS960_* environment variable")?;
    let position = generator::generate_position(&mut RandomSource::new());
    info!("white {}, black {}", position.white, position.black);

    match settings.output {
        OutputFormat::Diagram => print!("{}", renderer::render_with(&position, &settings.render)),
        OutputFormat::Raw => {
            println!("White pieces:");
            println!("{:?}", position.white);
            println!("\nBlack pieces:");
            println!("{:?}", position.black);
        }
        OutputFormat::Fen => println!("{}", position.to_fen()),
    }

    Ok(())
}
