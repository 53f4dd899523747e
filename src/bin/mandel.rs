use clap::{App, Arg, ArgMatches};
use failure::Error;
use grayscale_mandelbrot::{render_with, sink, Camera, Mandelbrot, ToneFilter, Xy};
use num::Complex;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CENTER: &str = "center";
const ZOOM: &str = "zoom";
const ITERATIONS: &str = "iterations";
const THRESHOLD: &str = "threshold";
const MULTIPLIER: &str = "multiplier";
const POWER: &str = "power";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Grayscale Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.png, or .pgm for a raw graymap)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.5,0.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Point of the complex plane at the middle of the image"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.3")
                .validator(|s| validate_number::<f64>(&s, "Could not parse zoom"))
                .help("Zoom factor; 1.0 shows one unit of the plane across the image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        10_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 10000000",
                    )
                })
                .help("Maximum iterations per pixel"),
        )
        .arg(
            Arg::with_name(THRESHOLD)
                .required(false)
                .long(THRESHOLD)
                .short("e")
                .takes_value(true)
                .default_value("100.0")
                .validator(|s| validate_number::<f64>(&s, "Could not parse escape threshold"))
                .help("Squared modulus past which a point has escaped (at least 1.0)"),
        )
        .arg(
            Arg::with_name(MULTIPLIER)
                .required(false)
                .long(MULTIPLIER)
                .short("m")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0")
                .validator(|s| validate_number::<f64>(&s, "Could not parse tone multiplier"))
                .help("Gain of the tone curve"),
        )
        .arg(
            Arg::with_name(POWER)
                .required(false)
                .long(POWER)
                .short("p")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.1")
                .validator(|s| validate_number::<f64>(&s, "Could not parse tone power"))
                .help("Exponent of the tone curve"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver (default: one per CPU)"),
        )
        .get_matches()
}

/// Pulls a value clap has already validated.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(v)) => v,
        _ => unreachable!("{} was validated by clap", name),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .unwrap_or((1024, 1024));
    let center = matches
        .value_of(CENTER)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(-0.5, 0.0));

    let camera = Camera::new(
        Xy::new(width as usize, height as usize),
        value(matches, ZOOM),
        center,
    )?;
    let mandelbrot = Mandelbrot::new(camera, value(matches, ITERATIONS), value(matches, THRESHOLD))?
        .with_threads(match matches.value_of(THREADS) {
            Some(_) => value(matches, THREADS),
            None => num_cpus::get(),
        })?;
    let tone = ToneFilter::new(value(matches, MULTIPLIER), value(matches, POWER));

    let frame = render_with(&mandelbrot, tone)?;
    sink::write_image(value::<String>(matches, OUTPUT), &frame)
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
