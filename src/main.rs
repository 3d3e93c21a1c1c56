use std::path::PathBuf;
use std::process;

use img2hex::{Config, Filter};
use structopt::StructOpt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_pair<T: std::str::FromStr>(src: &str) -> Result<(T, T), &'static str> {
    const FORMAT_ERROR: &str =
        "format must be two integers separated by `x` or `,`, eg 64x64 or 128,32";

    let mut split = src
        .splitn(2, |x| x == 'x' || x == ',')
        .map(|x| x.parse().map_err(|_| FORMAT_ERROR));

    let x = split.next().unwrap_or(Err(FORMAT_ERROR))?;
    let y = split.next().unwrap_or(Err(FORMAT_ERROR))?;

    Ok((y, x))
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "img2hex",
    about = "Convert an image into a grayscale hex memory file for HDL simulation"
)]
struct Opt {
    /// Input image (PNG, JPEG, BMP or GIF)
    #[structopt(parse(from_os_str), default_value = "face.png")]
    input: PathBuf,

    /// Hex file to write, one byte per line
    #[structopt(short = "o", long = "output", parse(from_os_str), default_value = "image.hex")]
    output: PathBuf,

    /// Target size, width by height. Aspect ratio is not preserved
    #[structopt(
        short = "s",
        long = "size",
        default_value = "64x64",
        parse(try_from_str = "parse_pair")
    )]
    size: (usize, usize),

    /// Resampling filter: nearest or bilinear
    #[structopt(short = "f", long = "filter", default_value = "bilinear")]
    filter: Filter,

    /// Also write the normalized image as a grayscale PNG
    #[structopt(long = "preview", parse(from_os_str))]
    preview: Option<PathBuf>,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Config {
        Config {
            input: opt.input,
            output: opt.output,
            size: opt.size,
            filter: opt.filter,
            preview: opt.preview,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "img2hex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = Config::from(Opt::from_args());

    match img2hex::run(&config) {
        Ok(_) => println!("Image saved as {}", config.output.display()),
        Err(err) => {
            eprintln!("error: {}: {}", err.stage(), err);
            process::exit(1);
        }
    }
}
