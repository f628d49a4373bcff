use anyhow::{bail, Context, Result};
use genecodec::config::ConfigManager;
use genecodec::{Bits, DiscoveryHandler, SearchSpace};

const USAGE: &str = "usage: genecodec <config.toml|config.json> <layout | seed | decode <bits>>";

fn main() -> Result<()> {
    // RUST_LOG controls verbosity
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, command) = match args.as_slice() {
        [path, command, ..] => (path, command.as_str()),
        _ => bail!(USAGE),
    };

    let manager = ConfigManager::new();
    manager
        .load_from_file(path)
        .with_context(|| format!("failed to load {}", path))?;
    let config = manager.get();
    let space = SearchSpace::from_config(&config)?;

    match (command, args.get(2)) {
        ("layout", _) => {
            let layout = space.layout();
            for (i, binding) in space.bindings().iter().enumerate() {
                println!(
                    "{:>3}  {:<24} {:<10} start={:<5} bits={}",
                    i,
                    binding.path,
                    binding.handler.kind(),
                    layout.starts()[i],
                    binding.handler.num_bits()
                );
            }
            println!("total bits: {}", space.total_bits());
        }
        ("seed", _) => {
            let chromosome = space
                .seed(&config.properties)
                .context("config properties do not cover every gene")?;
            println!("{}", chromosome);
        }
        ("decode", Some(bits)) => {
            let chromosome: Bits = bits.parse()?;
            let decoded: serde_json::Map<String, serde_json::Value> = space
                .decode(&chromosome)?
                .into_iter()
                .map(|(path, value)| Ok((path, serde_json::to_value(value)?)))
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
