#[cfg(not(target_arch = "wasm32"))]
fn main() {
   use std::path::PathBuf;

   use clap::Parser;
   use log::LevelFilter;
   use simple_logger::SimpleLogger;
   use unitcircle::config::UserConfig;
   use unitcircle::export::{export_svg, parse_pointer};
   use unitcircle::geometry::PixelPosition;

   /// Renders the unit circle diagram to an SVG file.
   #[derive(Parser)]
   #[command(name = "unitcircle", version)]
   struct Args {
      /// Pointer position in surface pixels, as `x,y`. Without it only the base diagram is drawn.
      #[arg(long, value_parser = parse_pointer_arg, allow_hyphen_values = true)]
      pointer: Option<PixelPosition>,
      /// Where to write the SVG document.
      #[arg(short, long, default_value = "unitcircle.svg")]
      output: PathBuf,
      /// Config file to use instead of the user's `config.toml`.
      #[arg(long)]
      config: Option<PathBuf>,
      /// Overrides the configured number of pixels per unit.
      #[arg(long)]
      scale: Option<f64>,
   }

   fn parse_pointer_arg(input: &str) -> Result<PixelPosition, String> {
      parse_pointer(input).map_err(|error| error.to_string())
   }

   fn run(args: Args) -> anyhow::Result<()> {
      let mut config = match &args.config {
         Some(path) => UserConfig::load_from(path)?,
         None => UserConfig::load_or_create()?,
      };
      if let Some(scale) = args.scale {
         config.surface.scale = scale;
      }
      config.validate()?;

      let document = export_svg(&config, args.pointer)?;
      std::fs::write(&args.output, document)?;
      log::info!("wrote {}", args.output.display());
      Ok(())
   }

   let _ = SimpleLogger::new().with_level(LevelFilter::Info).init();

   match run(Args::parse()) {
      Ok(()) => (),
      Err(error) => {
         log::error!("{:#}", error);
         std::process::exit(1);
      }
   }
}

// The browser build starts from `web::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
