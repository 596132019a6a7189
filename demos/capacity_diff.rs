use std::cmp::Ordering;

use storage_metrics::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (left, right) = match args.as_slice() {
        [left, right] => (left.as_str(), right.as_str()),
        _ => ("/", "/tmp"),
    };

    let left_info = probe(left)?;
    let right_info = probe(right)?;

    let left_free = ByteSize::from_bytes(left_info.free_bytes() as f64);
    let right_free = ByteSize::from_bytes(right_info.free_bytes() as f64);

    println!("{}: {} free ({})", left, left_free, left_info.fs_type());
    println!("{}: {} free ({})", right, right_free, right_info.fs_type());

    let (difference, unit) = left_free.subtract(&right_free);
    let difference = ByteSize::new(difference, unit.symbol())?;

    match left_free.compare(&right_free) {
        Ordering::Equal => println!("both volumes have the same free space"),
        Ordering::Greater => println!("{} has {} more free", left, difference),
        Ordering::Less => println!("{} has {} more free", right, difference),
    }

    Ok(())
}
