use log::debug;
use poly2line::output::Output;
use poly2line::{parse_properties, process};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "poly2line",
    about = "Converts (Multi)Polygon features into (Multi)LineString outlines"
)]
struct Opts {
    /// Properties (a JSON object) to put on every output feature
    #[structopt(short, long)]
    properties: Option<String>,
    /// Write one feature per line instead of a single FeatureCollection
    #[structopt(short, long)]
    json_lines: bool,
    /// GeoJSON input file, stdin if omitted
    #[structopt(parse(from_os_str))]
    infile: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = Opts::from_args();

    let properties = opts
        .properties
        .as_deref()
        .map(parse_properties)
        .transpose()?;

    let reader: Box<dyn Read> = match &opts.infile {
        Some(path) => {
            debug!("reading {}", path.display());
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin()),
    };
    let lines = process(reader, properties.as_ref())?;

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    if opts.json_lines {
        lines.write_json_lines(&mut handle)?;
    } else {
        lines.write_geojson(&mut handle)?;
    }
    handle.flush()?;
    Ok(())
}
