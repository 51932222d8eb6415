//
// Copyright (c) 2025 Nathan Fiedler
//
use clap::{Arg, ArgAction, arg, command, value_parser};
use fuzzydigest::crypto::{self, Algorithm};
use fuzzydigest::ctph::FuzzyHash;
use memmap2::Mmap;
use std::fs::File;

fn main() {
    env_logger::init();
    let matches = command!("Example of computing fuzzy hashes.")
        .about("Prints the ssdeep style fuzzy hash of one or more files.")
        .arg(
            arg!(
                -d --digest <ALGORITHM> "Also print a digest (sha1 or sha256)."
            )
            .value_parser(value_parser!(Algorithm)),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input files to use")
                .required(true)
                .action(ArgAction::Append)
                .index(1),
        )
        .get_matches();
    let algorithm = matches.get_one::<Algorithm>("digest");
    for filename in matches.get_many::<String>("INPUT").unwrap() {
        let file = File::open(filename).expect("cannot open file!");
        let mmap = unsafe { Mmap::map(&file).expect("cannot create mmap?") };
        let hash = FuzzyHash::new(&mmap[..]);
        if let Some(algorithm) = algorithm {
            let digest = crypto::hex_digest(*algorithm, &mmap[..]);
            println!("{},{}:{},\"{}\"", hash, algorithm, digest, filename);
        } else {
            println!("{},\"{}\"", hash, filename);
        }
    }
}
