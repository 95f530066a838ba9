use clap::Parser;
use nalgebra as na;
use tracing::{info, warn};
use vector3_core::geometry::{cross, distance, dot, is_zero, length, reflect, unitize};
use vector3_core::Vector3;

/// Vector algebra demo with configurable operands
#[derive(Parser, Debug)]
#[command(name = "vector3-demo")]
#[command(about = "Prints example Vector3 computations", long_about = None)]
struct Args {
    /// First operand, e.g. "1,-1,0" or "(1, -1, 0)"
    #[arg(short, long, default_value = "1,-1,0")]
    a: Vector3,

    /// Second operand, used as the reflection normal
    #[arg(short, long, default_value = "0,1,0")]
    b: Vector3,

    /// Scalar for scale and divide
    #[arg(short, long, default_value_t = 2.0)]
    scale: f64,

    /// Component index to read from `a` (3 demonstrates the bounds check)
    #[arg(short, long, default_value_t = 3)]
    index: usize,

    /// Decimal places to print
    #[arg(short, long, default_value_t = 3)]
    precision: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let (a, b, s, p) = (args.a, args.b, args.scale, args.precision);

    println!("=== Vector3 Demo ===\n");
    info!(%a, %b, scale = s, "operands");

    println!("Constants");
    println!("  ZERO  = {}", Vector3::ZERO);
    println!("  ONE_X = {}", Vector3::ONE_X);
    println!("  ONE_Y = {}", Vector3::ONE_Y);
    println!("  ONE_Z = {}", Vector3::ONE_Z);
    let composed = Vector3::ZERO + Vector3::ONE_X * 2.0 + Vector3::ONE_Y * 3.0 + Vector3::ONE_Z * 4.0;
    println!("  ZERO + ONE_X*2 + ONE_Y*3 + ONE_Z*4 = {composed}");

    println!("\nArithmetic");
    println!("  a      = {a:.p$}");
    println!("  b      = {b:.p$}");
    println!("  -a     = {:.p$}", -a);
    println!("  a + b  = {:.p$}", a + b);
    println!("  a - b  = {:.p$}", a - b);
    println!("  a * {s} = {:.p$}", a * s);
    println!("  a / {s} = {:.p$}", a / s);

    println!("\nGeometry");
    println!("  dot(a, b)      = {:.p$}", dot(a, b));
    println!("  cross(a, b)    = {:.p$}", cross(a, b));
    println!("  length(a)      = {:.p$}", length(a));
    println!("  distance(a, b) = {:.p$}", distance(a, b));
    if is_zero(a) {
        warn!("a is the zero vector, unitize would produce NaN");
    }
    println!("  unitize(a)     = {:.p$}", unitize(a));
    println!("  reflect(a, b)  = {:.p$}", reflect(a, b));
    println!("  is_zero(a)     = {}", is_zero(a));

    // nalgebra interop
    let (na_a, na_b): (na::Vector3<f64>, na::Vector3<f64>) = (a.into(), b.into());
    if !is_zero(a) && !is_zero(b) {
        println!("  angle(a, b)    = {:.p$} rad", na_a.angle(&na_b));
    }

    println!("\nComponent access");
    match a.component(args.index) {
        Ok(value) => println!("  a[{}] = {value:.p$}", args.index),
        Err(e) => warn!(index = args.index, "lookup failed: {e}"),
    }

    info!("demo complete");
}
