use std::path::PathBuf;
use std::process::exit;
use std::{fmt::Display, fmt::Formatter};

use clap::{ArgGroup, CommandFactory, Parser};
use log::LevelFilter;

use crate::compression::codec::Method;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Everything the program needs to know to run.
#[derive(Debug)]
pub struct Opts {
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Codec used in either direction
    pub method: Method,
    /// Files to process, in order
    pub files: Vec<PathBuf>,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new(op_mode: Mode, method: Method) -> Self {
        Self {
            op_mode,
            method,
            files: vec![],
            keep_input_files: false,
            force_overwrite: false,
            verbose: Verbosity::Warnings,
        }
    }
}

/// Command line interpretation. -h selects Huffman coding, so help is only available as --help.
#[derive(Parser, Debug)]
#[clap(
    name = "hufrle",
    version,
    about = "Compress and decompress files with Huffman coding or run-length encoding",
    disable_help_flag = true,
    group(ArgGroup::new("mode").args(&["compress", "decompress", "test"])),
    group(ArgGroup::new("method").args(&["rle", "huffman"]))
)]
pub struct Args {
    /// Compress each file to <file>.huf or <file>.rle
    #[clap(short = 'c', long = "compress")]
    compress: bool,

    /// Decompress each .huf or .rle file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Check that each file decompresses, writing nothing
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Use run-length encoding
    #[clap(short = 'r', long = "rle")]
    rle: bool,

    /// Use Huffman coding
    #[clap(short = 'h', long = "huffman")]
    huffman: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. 0 is silent, 5 is chatty
    #[clap(
        short = 'v',
        long = "verbosity",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    verbosity: u8,

    /// Print this message
    #[clap(long = "help")]
    show_help: bool,

    /// Files to process
    #[clap(value_parser)]
    files: Vec<PathBuf>,
}

impl Args {
    /// True when --help was given.
    pub fn wants_help(&self) -> bool {
        self.show_help
    }
}

impl TryFrom<Args> for Opts {
    type Error = String;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let op_mode = match (args.compress, args.decompress, args.test) {
            (true, _, _) => Mode::Zip,
            (_, true, _) => Mode::Unzip,
            (_, _, true) => Mode::Test,
            _ => return Err("Both mode and method must be specified".to_string()),
        };
        let method = match (args.rle, args.huffman) {
            (true, _) => Method::Rle,
            (_, true) => Method::Huffman,
            _ => return Err("Both mode and method must be specified".to_string()),
        };
        if args.files.is_empty() {
            return Err("Expected filename after options".to_string());
        }

        let mut opts = Opts::new(op_mode, method);
        opts.files = args.files;
        opts.keep_input_files = args.keep;
        opts.force_overwrite = args.force;
        opts.verbose = Verbosity::from(args.verbosity);
        Ok(opts)
    }
}

/// Parse the command line. Prints usage and exits on --help or a usage error.
pub fn opts_init() -> Opts {
    let args = Args::parse();
    if args.wants_help() {
        // Nothing useful can be done if stdout is gone.
        let _ = Args::command().print_help();
        exit(0);
    }
    match Opts::try_from(args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{}\n", msg);
            eprintln!("Usage: hufrle [ -c | -d | -t ] [ -r | -h ] [-k] [-f] [-v N] <files>...");
            exit(1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Args, Mode, Opts, Verbosity};
    use crate::compression::codec::Method;
    use clap::Parser;
    use log::LevelFilter;
    use std::path::PathBuf;

    fn opts(argv: &[&str]) -> Result<Opts, String> {
        let args = Args::try_parse_from(argv).map_err(|e| e.to_string())?;
        Opts::try_from(args)
    }

    #[test]
    fn compress_huffman() {
        let o = opts(&["hufrle", "-c", "-h", "a.txt"]).unwrap();
        assert_eq!(o.op_mode, Mode::Zip);
        assert_eq!(o.method, Method::Huffman);
        assert_eq!(o.files, vec![PathBuf::from("a.txt")]);
        assert!(!o.keep_input_files);
        assert_eq!(o.verbose, Verbosity::Warnings);
    }

    #[test]
    fn combined_short_flags() {
        let o = opts(&["hufrle", "-dr", "-kf", "-v", "4", "a.rle", "b.rle"]).unwrap();
        assert_eq!(o.op_mode, Mode::Unzip);
        assert_eq!(o.method, Method::Rle);
        assert!(o.keep_input_files);
        assert!(o.force_overwrite);
        assert_eq!(o.verbose.level_filter(), LevelFilter::Debug);
        assert_eq!(o.files.len(), 2);
    }

    #[test]
    fn mode_and_method_are_required() {
        assert!(opts(&["hufrle", "-r", "a"]).is_err());
        assert!(opts(&["hufrle", "-c", "a"]).is_err());
        assert!(opts(&["hufrle", "-c", "-r"]).is_err());
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        assert!(opts(&["hufrle", "-c", "-d", "-r", "a"]).is_err());
        assert!(opts(&["hufrle", "-c", "-r", "-h", "a"]).is_err());
        assert!(opts(&["hufrle", "-c", "-r", "-v", "9", "a"]).is_err());
    }

    #[test]
    fn long_help_is_still_available() {
        let args = Args::try_parse_from(["hufrle", "--help"]).unwrap();
        assert!(args.wants_help());
    }
}
