use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use flate2::read::{GzDecoder, ZlibDecoder};
use log::{error, info};
use nbtjson::{DecodeOpts, RootMode, Value};
use rayon::prelude::*;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Compression {
    Auto,
    Gzip,
    Zlib,
    None,
}

impl Compression {
    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "auto" => Compression::Auto,
            "gzip" => Compression::Gzip,
            "zlib" => Compression::Zlib,
            "none" => Compression::None,
            _ => return None,
        })
    }

    /// Guess from the magic bytes at the start of the data.
    fn sniff(data: &[u8]) -> Self {
        match data {
            [0x1f, 0x8b, ..] => Compression::Gzip,
            [0x78, ..] => Compression::Zlib,
            _ => Compression::None,
        }
    }
}

struct Config {
    opts: DecodeOpts,
    compression: Compression,
    pretty: bool,
    strict_text: bool,
}

fn decompress(raw: Vec<u8>, compression: Compression) -> Result<Vec<u8>> {
    let compression = match compression {
        Compression::Auto => Compression::sniff(&raw),
        c => c,
    };

    let mut data = vec![];
    match compression {
        Compression::Gzip => {
            GzDecoder::new(raw.as_slice()).read_to_end(&mut data)?;
        }
        Compression::Zlib => {
            ZlibDecoder::new(raw.as_slice()).read_to_end(&mut data)?;
        }
        Compression::None | Compression::Auto => data = raw,
    }

    Ok(data)
}

fn convert(path: &Path, config: &Config) -> Result<String> {
    let raw = std::fs::read(path)?;
    let data = decompress(raw, config.compression)?;
    let value: Value = nbtjson::from_bytes_with_opts(&data, config.opts)?;

    if config.strict_text {
        value.check_text()?;
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(json)
}

fn parse_limit(args: &ArgMatches, name: &str) -> Result<Option<usize>> {
    match args.value_of(name) {
        Some(v) => Ok(Some(
            v.parse()
                .map_err(|_| format!("--{} expects a number, got {:?}", name, v))?,
        )),
        None => Ok(None),
    }
}

fn config(args: &ArgMatches) -> Result<Config> {
    let mut opts = DecodeOpts::new().deny_duplicate_names(args.is_present("deny-duplicates"));

    if args.is_present("named-root") {
        opts = opts.root(RootMode::Named);
    }
    if let Some(depth) = parse_limit(args, "max-depth")? {
        opts = opts.max_depth(depth);
    }
    if let Some(len) = parse_limit(args, "max-seq-len")? {
        opts = opts.max_seq_len(len);
    }

    let compression = args.value_of("compression").unwrap_or("auto");
    let compression = Compression::parse(compression)
        .ok_or_else(|| format!("unknown compression: {}", compression))?;

    Ok(Config {
        opts,
        compression,
        pretty: args.is_present("pretty"),
        strict_text: args.is_present("strict-text"),
    })
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt2json")
        .about("Convert NBT files to JSON")
        .arg(
            Arg::with_name("files")
                .value_name("FILE")
                .takes_value(true)
                .multiple(true)
                .required(true),
        )
        .arg(
            Arg::with_name("pretty")
                .long("pretty")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("named-root")
                .long("named-root")
                .help("unwrap the named root compound rather than keeping it under its name")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("max-seq-len")
                .long("max-seq-len")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("deny-duplicates")
                .long("deny-duplicates")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("strict-text")
                .long("strict-text")
                .help(
                    "fail on names or strings that are not valid modified UTF-8. \
                     Without it invalid text is rendered lossily, and compound \
                     names that differ only in invalid bytes can collide",
                )
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("compression")
                .long("compression")
                .takes_value(true)
                .possible_values(&["auto", "gzip", "zlib", "none"])
                .default_value("auto"),
        )
        .get_matches();

    let config = match config(&matches) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    let files: Vec<PathBuf> = matches
        .values_of("files")
        .map(|vs| vs.map(PathBuf::from).collect())
        .unwrap_or_default();

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, convert(path, &config)))
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;

    for (path, result) in results {
        match result {
            Ok(json) => {
                if let Err(e) = writeln!(out, "{}", json) {
                    error!("could not write output: {}", e);
                    std::process::exit(1);
                }
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    info!("{} of {} files converted", files.len() - failed, files.len());

    if failed > 0 {
        std::process::exit(1);
    }
}
