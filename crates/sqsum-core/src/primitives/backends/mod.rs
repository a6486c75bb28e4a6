//! Backend implementations for compute primitives

pub mod scalar;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub mod avx2;

pub use scalar::ScalarBackend;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use avx2::Avx2Backend;

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        if Avx2Backend::is_available() {
            return "avx2";
        }
    }
    "scalar"
}
