//! NESTML IR - shared source-model types.
//!
//! This crate holds the types that are threaded through every phase of the
//! NESTML compiler. The fragment here carries [`SourcePosition`], the source
//! location value that checkers attach to diagnostics.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;

pub use position::SourcePosition;
