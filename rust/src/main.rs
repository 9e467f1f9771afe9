use std::env;
use std::process;
use std::time::Instant;

use serde_json::json;
use sguid::{
    ShortGuid, decode, decode_strict, encode, parse_short_guid, parse_short_guid_strict,
    sql_script,
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
struct CommonOpts {
    strict: bool,
    json: bool,
}

#[derive(Debug, Clone)]
struct EmitOpts {
    count: usize,
    json: bool,
}

fn print_help() {
    eprintln!(
        "sguid - short GUID encoder/decoder CLI\n\n\
Usage:\n  sguid new [--count <n>] [--json]\n  sguid encode <uuid-or-short>\n  sguid decode <short> [--strict] [--json]\n  sguid parse <id> [--strict] [--json]\n  sguid validate <id> [--strict]\n  sguid sql\n  sguid bench [--count <n>]\n  sguid selftest\n\n\
decode/parse accept --strict to reject non-canonical spellings.\n"
    );
}

fn parse_common_flags(args: &[String]) -> Result<CommonOpts, String> {
    let mut opts = CommonOpts::default();
    for arg in args {
        match arg.as_str() {
            "--strict" => opts.strict = true,
            "--json" => opts.json = true,
            _ => return Err(format!("unknown flag: {arg}")),
        }
    }
    Ok(opts)
}

fn parse_emit_flags(args: &[String], default_count: usize) -> Result<EmitOpts, String> {
    let mut opts = EmitOpts {
        count: default_count,
        json: false,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                if i + 1 >= args.len() {
                    return Err("missing value for --count".to_string());
                }
                opts.count = args[i + 1]
                    .parse::<usize>()
                    .map_err(|_| "invalid integer for --count".to_string())?;
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            _ => return Err(format!("unknown flag: {}", args[i])),
        }
    }
    Ok(opts)
}

fn run_new(args: &[String]) -> Result<(), String> {
    let opts = parse_emit_flags(args, 1)?;
    for _ in 0..opts.count {
        let g = ShortGuid::new();
        if opts.json {
            let payload = json!({
                "short": g.value(),
                "uuid": g.uuid().to_string(),
            });
            println!(
                "{}",
                serde_json::to_string(&payload).map_err(|e| e.to_string())?
            );
        } else {
            println!("{g}");
        }
    }
    Ok(())
}

fn run_encode(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("encode requires an identifier".to_string());
    }
    let g = parse_short_guid(&args[0]).map_err(|e| e.to_string())?;
    println!("{}", g.value());
    Ok(())
}

fn run_decode(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("decode requires a short-form string".to_string());
    }
    let text = &args[0];
    let opts = parse_common_flags(&args[1..])?;

    let id = if opts.strict {
        decode_strict(text)
    } else {
        decode(text)
    }
    .map_err(|e| e.to_string())?;

    if opts.json {
        let payload = json!({
            "input": text,
            "uuid": id.to_string(),
            "canonical": encode(&id),
        });
        println!(
            "{}",
            serde_json::to_string(&payload).map_err(|e| e.to_string())?
        );
    } else {
        println!("{id}");
    }
    Ok(())
}

fn run_parse(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("parse requires an identifier".to_string());
    }
    let text = &args[0];
    let opts = parse_common_flags(&args[1..])?;

    let g = if opts.strict {
        parse_short_guid_strict(text)
    } else {
        parse_short_guid(text)
    }
    .map_err(|e| e.to_string())?;

    if opts.json {
        let payload = json!({
            "input": text,
            "uuid": g.uuid().to_string(),
            "short": g.value(),
        });
        println!(
            "{}",
            serde_json::to_string(&payload).map_err(|e| e.to_string())?
        );
    } else {
        println!("uuid={}", g.uuid());
        println!("short={}", g.value());
    }
    Ok(())
}

fn run_validate(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("validate requires an identifier".to_string());
    }
    let text = &args[0];
    let opts = parse_common_flags(&args[1..])?;

    let ok = if opts.strict {
        parse_short_guid_strict(text).is_ok()
    } else {
        parse_short_guid(text).is_ok()
    };

    println!("{}", if ok { "true" } else { "false" });
    if ok {
        Ok(())
    } else {
        Err("invalid identifier".to_string())
    }
}

fn run_sql() -> Result<(), String> {
    print!("{}", sql_script());
    Ok(())
}

fn run_bench(args: &[String]) -> Result<(), String> {
    let opts = parse_emit_flags(args, 100_000)?;
    let id = Uuid::new_v4();

    let start = Instant::now();
    for _ in 0..opts.count {
        let short = encode(&id);
        let _ = decode(&short);
    }
    let secs = start.elapsed().as_secs_f64().max(1e-9);
    let rps = opts.count as f64 / secs;

    let payload = json!({
        "impl": "rust",
        "n": opts.count,
        "seconds": secs,
        "round_trips_per_sec": rps,
    });
    println!(
        "{}",
        serde_json::to_string(&payload).map_err(|e| e.to_string())?
    );
    Ok(())
}

fn run_selftest() -> Result<(), String> {
    let vector = Uuid::parse_str("c9a646d3-9c61-4cb7-bfcd-ee2522c8f633")
        .map_err(|e| e.to_string())?;
    if encode(&vector) != "00amyWGct0y_ze4lIsj2Mw" {
        return Err("selftest failed: known vector mismatch".to_string());
    }
    let id = Uuid::new_v4();
    if decode_strict(&encode(&id)).map_err(|e| e.to_string())? != id {
        return Err("selftest failed: round trip mismatch".to_string());
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_help();
        process::exit(2);
    }

    if args[0] == "-h" || args[0] == "--help" || args[0] == "help" {
        print_help();
        return;
    }

    let cmd = args[0].as_str();
    let rest = &args[1..];

    let res = match cmd {
        "new" => run_new(rest),
        "encode" => run_encode(rest),
        "decode" => run_decode(rest),
        "parse" => run_parse(rest),
        "validate" => run_validate(rest),
        "sql" => run_sql(),
        "bench" => run_bench(rest),
        "selftest" => run_selftest(),
        _ => Err(format!("unknown command: {}", cmd)),
    };

    if let Err(err) = res {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_flags() {
        let opts =
            parse_common_flags(&["--strict".to_string(), "--json".to_string()]).unwrap();
        assert!(opts.strict);
        assert!(opts.json);
        assert!(parse_common_flags(&["--bogus".to_string()]).is_err());
    }

    #[test]
    fn test_parse_emit_flags() {
        let opts = parse_emit_flags(&["--count".to_string(), "5".to_string()], 1).unwrap();
        assert_eq!(opts.count, 5);
        assert!(!opts.json);
        assert_eq!(parse_emit_flags(&[], 7).unwrap().count, 7);
        assert!(parse_emit_flags(&["--count".to_string()], 1).is_err());
    }

    #[test]
    fn test_selftest_passes() {
        assert!(run_selftest().is_ok());
    }
}
