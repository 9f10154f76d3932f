use std::env;
use std::path::PathBuf;
use std::process;

use cordex_cds::{
    AtlasRequest, CdsClient, CordexRequest, Downloader, Era5LandRequest, Product, Request,
    Retriever,
};

const USAGE: &str = "Usage:
  cargo run --example cli -- cordex
  cargo run --example cli -- arctic <experiment> [variable...]
  cargo run --example cli -- atlas
  cargo run --example cli -- era5 <start_year> <end_year>
  cargo run --example cli -- raw <dataset> <target> key=value...

Notes:
- Credentials are read from CDSAPI_URL / CDSAPI_KEY or ~/.cdsapirc.
- Files are saved below ./data; existing files are not downloaded again.
- Set RUST_LOG=info (or debug) to follow job progress.";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() == 1 {
        eprintln!("{USAGE}");
        return;
    }

    let client = match CdsClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cannot create client: {e}");
            process::exit(1);
        }
    };

    let product: Box<dyn Product> = match args[1].as_str() {
        "cordex" => Box::new(CordexRequest::default()),
        "arctic" => {
            let experiment = args.get(2).cloned().unwrap_or_else(|| "historical".to_string());
            let variables: Vec<String> = if args.len() > 3 {
                args[3..].to_vec()
            } else {
                vec!["2m_air_temperature".to_string()]
            };
            Box::new(CordexRequest::arctic(experiment, variables))
        }
        "atlas" => Box::new(AtlasRequest::default()),
        "era5" => {
            let year = |i: usize, default: i32| {
                args.get(i)
                    .map(|s| {
                        s.parse().unwrap_or_else(|_| {
                            eprintln!("not a year: {s}");
                            process::exit(2);
                        })
                    })
                    .unwrap_or(default)
            };
            Box::new(Era5LandRequest {
                start_year: year(2, 1990),
                end_year: year(3, 2000),
                ..Era5LandRequest::default()
            })
        }
        "raw" => {
            raw(&client, &args[2..]);
            return;
        }
        _ => {
            eprintln!("Unknown command. Use: cordex|arctic|atlas|era5|raw");
            process::exit(2);
        }
    };

    let downloader = match Downloader::in_current_dir() {
        Ok(d) => d.skip_existing(true),
        Err(e) => {
            eprintln!("cannot determine working directory: {e}");
            process::exit(1);
        }
    };

    match downloader.download(&*product, &client) {
        Ok(Some(result)) => {
            println!(
                "Downloaded {bytes} bytes to {target}",
                bytes = result.size_bytes,
                target = result.target.display()
            );
            if let Some(job) = result.job_id {
                println!("Job: {job}");
            }
        }
        Ok(None) => println!("Already downloaded, nothing to do."),
        Err(e) => {
            eprintln!("download failed: {e}");
            process::exit(1);
        }
    }
}

/// Send an unchecked request built from `key=value` arguments.
fn raw(client: &CdsClient, args: &[String]) {
    let (Some(dataset), Some(target)) = (args.first(), args.get(1)) else {
        eprintln!("raw needs a dataset and a target file");
        process::exit(2);
    };

    let mut pairs = Vec::new();
    for kv in &args[2..] {
        let Some((k, v)) = kv.split_once('=') else {
            eprintln!("expected key=value, got {kv}");
            process::exit(2);
        };
        pairs.push((k.to_string(), v.to_string()));
    }
    let request = Request::from_str_pairs(pairs);
    if request.is_empty() {
        eprintln!("raw needs at least one key=value pair");
        process::exit(2);
    }

    match client.retrieve(dataset, &request, &PathBuf::from(target)) {
        Ok(result) => println!(
            "Downloaded {bytes} bytes to {target}",
            bytes = result.size_bytes
        ),
        Err(e) => {
            eprintln!("retrieve failed: {e}");
            process::exit(1);
        }
    }
}
