use mp_unreach_nlri::{DefaultNlriDecoder, MpUnreachNlri, WithdrawnNlri};

use clap::Parser;
use serde_json::json;

/// mp-unreach decodes a hex-encoded MP_UNREACH_NLRI attribute body and prints the withdrawn NLRI.
#[derive(Parser, Debug)]
#[clap(name = "mp-unreach")]
struct Opts {
    /// Attribute body as hex, starting at the AFI. Whitespace and a `0x` prefix are ignored.
    #[clap(name = "HEX")]
    hex: String,

    /// Prefixes carry RFC 7911 path identifiers
    #[clap(short, long)]
    add_path: bool,

    /// Output as JSON objects
    #[clap(long)]
    json: bool,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let cleaned: String = opts
        .hex
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let data = match hex::decode(cleaned) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("invalid hex input: {}", e);
            std::process::exit(2);
        }
    };

    let attr = match MpUnreachNlri::parse(&data) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let decoder = DefaultNlriDecoder::new(opts.add_path);
    let resolved = match attr.resolver_with(&decoder).resolve() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if opts.json {
        let val = json!({
            "afi": attr.afi(),
            "safi": attr.safi(),
            "end_of_rib": attr.is_end_of_rib(),
            "withdrawn": resolved,
        });
        let output = match opts.pretty {
            true => serde_json::to_string_pretty(&val),
            false => serde_json::to_string(&val),
        };
        match output {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "afi {} safi {}{}",
        attr.afi(),
        attr.safi(),
        match attr.is_end_of_rib() {
            true => " End-of-RIB",
            false => "",
        }
    );
    match &resolved {
        WithdrawnNlri::Unicast(nlri)
        | WithdrawnNlri::LabeledUnicast(nlri)
        | WithdrawnNlri::L3Vpn(nlri) => {
            for route in &nlri.routes {
                println!("{}", route);
            }
        }
        WithdrawnNlri::Unrecognized { .. } => println!("no decoder for this AFI/SAFI pair"),
        other => println!("{:#?}", other),
    }
}
