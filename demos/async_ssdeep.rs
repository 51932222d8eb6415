//
// Copyright (c) 2025 Nathan Fiedler
//
use clap::{Arg, command};
use fuzzydigest::ctph::hash_async_reader;
use tokio::fs::File;

#[tokio::main]
async fn main() {
    env_logger::init();
    let matches = command!("Example of hashing an asynchronous source.")
        .about("Prints the ssdeep style fuzzy hash of a file.")
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();
    let filename = matches.get_one::<String>("INPUT").unwrap();
    let file = File::open(filename).await.expect("cannot open file!");
    let hash = hash_async_reader(file).await.expect("failed to read file");
    println!("{},\"{}\"", hash, filename);
}
