//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `carmotor_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("carmotor_core ping={}", carmotor_core::ping());
    println!("carmotor_core version={}", carmotor_core::core_version());
}
