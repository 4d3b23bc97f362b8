use clap::Parser;

use super::DriverArgs;

fn parse(argv: &[&str]) -> Result<DriverArgs, String> {
    DriverArgs::try_parse_from(argv).map_err(|err| err.to_string())
}

#[test]
fn defaults_mirror_the_demo_driver() -> Result<(), String> {
    let args = parse(&["orderload"])?;
    if args.threads.get() != 10 {
        return Err(format!("Expected 10 threads, got {}", args.threads.get()));
    }
    if args.duration_secs.get() != 300 {
        return Err(format!(
            "Expected 300s duration, got {}",
            args.duration_secs.get()
        ));
    }
    if args.forever {
        return Err("Expected forever to default to false".to_owned());
    }
    if args.slow_percentage.get() != 70 {
        return Err(format!(
            "Expected 70% slow, got {}",
            args.slow_percentage.get()
        ));
    }
    if args.customer_id != 1 {
        return Err(format!("Expected customer 1, got {}", args.customer_id));
    }
    if args.rate_rpm.get() != 5 {
        return Err(format!("Expected 5 rpm, got {}", args.rate_rpm.get()));
    }
    if args.base_url != "http://localhost:8080" {
        return Err(format!("Unexpected base URL: {}", args.base_url));
    }
    Ok(())
}

#[test]
fn short_flags_parse() -> Result<(), String> {
    let args = parse(&[
        "orderload", "-t", "4", "-d", "60", "-f", "-s", "25", "-c", "7", "-r", "120",
    ])?;
    if args.threads.get() != 4 {
        return Err(format!("Expected 4 threads, got {}", args.threads.get()));
    }
    if args.duration_secs.get() != 60 {
        return Err(format!(
            "Expected 60s duration, got {}",
            args.duration_secs.get()
        ));
    }
    if !args.forever {
        return Err("Expected forever to be set".to_owned());
    }
    if args.slow_percentage.get() != 25 {
        return Err(format!(
            "Expected 25% slow, got {}",
            args.slow_percentage.get()
        ));
    }
    if args.customer_id != 7 {
        return Err(format!("Expected customer 7, got {}", args.customer_id));
    }
    if args.rate_rpm.get() != 120 {
        return Err(format!("Expected 120 rpm, got {}", args.rate_rpm.get()));
    }
    Ok(())
}

#[test]
fn long_flags_parse() -> Result<(), String> {
    let args = parse(&[
        "orderload",
        "--threads",
        "2",
        "--rate",
        "30",
        "--slow-percentage",
        "100",
        "--base-url",
        "http://orders.internal:9090",
    ])?;
    if args.threads.get() != 2 {
        return Err(format!("Expected 2 threads, got {}", args.threads.get()));
    }
    if args.rate_rpm.get() != 30 {
        return Err(format!("Expected 30 rpm, got {}", args.rate_rpm.get()));
    }
    if args.slow_percentage.get() != 100 {
        return Err(format!(
            "Expected 100% slow, got {}",
            args.slow_percentage.get()
        ));
    }
    if args.base_url != "http://orders.internal:9090" {
        return Err(format!("Unexpected base URL: {}", args.base_url));
    }
    Ok(())
}

#[test]
fn zero_rate_is_rejected() -> Result<(), String> {
    if parse(&["orderload", "-r", "0"]).is_ok() {
        return Err("Expected a zero rate to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn zero_threads_are_rejected() -> Result<(), String> {
    if parse(&["orderload", "-t", "0"]).is_ok() {
        return Err("Expected zero threads to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn percentage_above_hundred_is_rejected() -> Result<(), String> {
    if parse(&["orderload", "-s", "101"]).is_ok() {
        return Err("Expected an out-of-range percentage to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn flag_without_its_value_is_rejected() -> Result<(), String> {
    if parse(&["orderload", "-t"]).is_ok() {
        return Err("Expected a dangling -t to be rejected".to_owned());
    }
    if parse(&["orderload", "--rate"]).is_ok() {
        return Err("Expected a dangling --rate to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn unrecognized_flags_are_rejected() -> Result<(), String> {
    if parse(&["orderload", "--no-such-flag"]).is_ok() {
        return Err("Expected an unknown flag to be rejected".to_owned());
    }
    Ok(())
}
