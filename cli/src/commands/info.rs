//! Info Command
//!
//! Reports the selected permutation backend and the CPU capability probe.

/// Print backend selection and capability details.
pub fn print_info() {
    println!("backend:        {}", verushash::active_backend());
    println!("sse2:           {}", verushash::has_hardware_accel());
    println!("avx2:           {}", verushash::has_wide_vector());
    println!("parallelism:    {}", verushash::recommended_parallelism());
}
