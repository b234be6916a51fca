use railfile::*;

use std::path::PathBuf;

use log::warn;
use structopt::StructOpt;

/// Railfile -- railway file inspector
#[derive(StructOpt, Debug)]
#[structopt(name = "railfile")]
struct Opt {
    /// Verbose mode (-v, -vv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Railway track layout file
    #[structopt(parse(from_os_str))]
    railway: PathBuf,

    /// Scenario metadata descriptor to validate before parsing
    #[structopt(short = "m", long = "metadata", parse(from_os_str))]
    metadata: Option<PathBuf>,
}

fn run(opt: &Opt) -> AppResult<()> {
    // Scenario metadata is checked before the railway file is opened; a
    // descriptor that fails validation aborts the run with every violation
    // listed.
    if let Some(ref metadata) = opt.metadata {
        let descriptor = scenario::load(metadata)?;
        println!(
            "Scenario \"{}\" by {}",
            descriptor.name.as_deref().unwrap_or(""),
            descriptor.author.as_deref().unwrap_or("")
        );
        if opt.verbose >= 1 {
            if let Some(ref version) = descriptor.version {
                println!("  Version: {}", version);
            }
            if let Some(ref date) = descriptor.release_date {
                println!("  Released: {}", date);
            }
        }
        let named = descriptor.rly_file.as_deref();
        let given = opt.railway.file_name().and_then(|n| n.to_str());
        if let (Some(named), Some(given)) = (named, given) {
            if named != given {
                warn!(
                    "descriptor names track file \"{}\" but parsing \"{}\"",
                    named, given
                );
            }
        }
    }

    let railway = get_railway(&opt.railway)?;
    println!("Railway (program version {})", railway.program_version);
    println!("  Home location: {}", railway.home_location);
    println!(
        "  Elements: {} ({} announced)",
        railway.elements().len(),
        railway.active_element_count
    );
    if opt.verbose >= 1 {
        for name in railway.named_element_names() {
            println!("  Named location: {}", name);
        }
    }
    if opt.verbose >= 2 {
        for element in railway.elements() {
            println!("  * {:?}", element);
        }
    }

    Ok(())
}

pub fn main() {
    env_logger::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opt = Opt::from_args();
    match run(&opt) {
        Ok(()) => {}
        Err(e) => {
            println!("Error:\n{}", e.as_fail());
            std::process::exit(1);
        }
    }
}
