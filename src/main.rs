//! Command-line entry point for the spherefall engine

fn main() {
    println!("Spherefall Engine v0.1.0");
    println!();
    println!("Simulates the trajectory of a sphere dropped from a moving aircraft,");
    println!("under gravity and quadratic air drag.");
    println!();
    println!("For the full command-line interface, use the `spherefall-cli` binary:");
    println!("  spherefall-cli drop --material copper --mass 1 --launch-speed 50 --height 1000");
    println!("  spherefall-cli monte-carlo --material steel --mass 5 --height 500 -n 1000");
    println!("  spherefall-cli materials");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: spherefall-engine = \"0.1\"");
}
