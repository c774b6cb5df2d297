//! Checks the open and close contract of a data file handle.
//!
//! Exits with 0 if every check passes, with the error code of an unexpected failure, or with
//! -1 if a result does not match the expectation.
use std::process::exit;

use env_logger::Env;
use log::{debug, error};
use ncfile::errors::Error;
use ncfile::{File, Mode};

const MISSING_FILE: &str = "Doesn't Exist.";
const FILE_NAME: &str = "firstFile.cdf";

fn run() -> i32 {
    let mut file = File::new();

    print!("Attempting to open a file that doesn't exist... ");
    match file.open(MISSING_FILE, Mode::Read) {
        Ok(()) => {
            println!("Error. Expected a failure.");
            return -1;
        }
        Err(error) => {
            debug!("{}", error);
            println!("Caught expected failure.");
        }
    }

    print!("Opening file \"{}\"... ", FILE_NAME);
    if let Err(error) = file.open(FILE_NAME, Mode::Replace) {
        println!("Caught unexpected failure.");
        error!("{}", error);
        return error.error_code();
    }
    println!("Success.");

    print!("Retrieving path from file object... ");
    if file.path() != Some(FILE_NAME) {
        println!("Retrieved file path did not match input filename.");
        return -1;
    }
    println!("Success.");

    print!("Closing file... ");
    if let Err(error) = file.close() {
        println!("Caught unexpected failure.");
        error!("{}", error);
        return error.error_code();
    }
    println!("Success.");

    println!();
    println!("Finished.");
    0
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    exit(run());
}
