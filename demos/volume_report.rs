use storage_metrics::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    if args.is_empty() {
        args.push("/".to_string());
    }

    println!("Storage Metrics - Volume Report\n");

    for path in &args {
        let info = probe(path)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&info).expect("snapshot serializes"));
            continue;
        }

        println!("Path: {}", path);
        println!("  Filesystem: {}", info.fs_type());
        println!("  Total: {}", info.total_display());
        println!("  Used: {} ({:.1}%)", info.used_display(), info.usage_percentage());
        println!("  Free: {}", info.free_display());
        println!("  Inodes: {} free of {}", info.free_inodes(), info.total_inodes());
        println!();
    }

    Ok(())
}
