pub struct Args {
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    let mut args = Args { seed: None };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                let Some(val) = iter.next() else {
                    eprintln!("Error: --seed requires a value");
                    std::process::exit(1);
                };
                match val.parse::<u64>() {
                    Ok(seed) => args.seed = Some(seed),
                    Err(_) => {
                        eprintln!("Error: seed must be a valid integer");
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                println!("Usage: gemhunters [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --seed <INT>  Seed for board generation (random by default)");
                println!("  -h, --help        Print help");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    args
}
