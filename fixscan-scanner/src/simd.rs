/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Wide-vector SOH search (tier A).
//!
//! The lane count is fixed at build time. Only 256-bit AVX2 builds enable the
//! vector tier: with 128-bit registers the unrolled SWAR loop already reads 16
//! bytes per iteration, so a 16-lane vector loop would add nothing.

pub use imp::LANES;

/// Whether the vector tier is compiled in.
pub const USE_SIMD: bool = LANES > 16;

/// AVX2 kernel, compiled on every x86_64 build so it can be exercised on
/// hosts that support it even when the build does not assume AVX2.
#[cfg(target_arch = "x86_64")]
#[cfg_attr(not(target_feature = "avx2"), allow(dead_code))]
pub(crate) mod avx2 {
    use fixscan_core::types::SOH;
    use std::arch::x86_64::{
        __m256i, _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_movemask_epi8, _mm256_set1_epi8,
    };

    /// Bytes compared per vector iteration.
    pub const LANES: usize = 32;

    /// Vector loop over `buf[*offset..]` while at least [`LANES`] bytes remain.
    ///
    /// # Safety
    /// The CPU must support AVX2.
    #[inline]
    #[target_feature(enable = "avx2")]
    pub unsafe fn find_soh(buf: &[u8], offset: &mut usize) -> Option<usize> {
        // SAFETY: the caller guarantees AVX2, and every load reads LANES bytes
        // from an offset with at least LANES bytes left in `buf`.
        unsafe {
            let needle = _mm256_set1_epi8(SOH as i8);
            while buf.len() - *offset >= LANES {
                let chunk = _mm256_loadu_si256(buf.as_ptr().add(*offset).cast::<__m256i>());
                let mask = _mm256_movemask_epi8(_mm256_cmpeq_epi8(chunk, needle)) as u32;
                if mask != 0 {
                    return Some(*offset + mask.trailing_zeros() as usize);
                }
                *offset += LANES;
            }
        }
        None
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod imp {
    pub use super::avx2::LANES;

    #[inline(always)]
    pub fn find_soh(buf: &[u8], offset: &mut usize) -> Option<usize> {
        // SAFETY: avx2 is enabled for the whole build.
        unsafe { super::avx2::find_soh(buf, offset) }
    }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
mod imp {
    /// Widest vector the target guarantees (SSE2 / NEON).
    pub const LANES: usize = 16;

    /// Tier A is compiled out on this target; the SWAR tiers take over.
    #[inline(always)]
    pub fn find_soh(_buf: &[u8], _offset: &mut usize) -> Option<usize> {
        None
    }
}

/// Tier A: one vector per iteration while at least [`LANES`] bytes remain.
///
/// On a miss `offset` is left at the first byte not yet examined.
#[inline(always)]
pub fn find_soh(buf: &[u8], offset: &mut usize) -> Option<usize> {
    imp::find_soh(buf, offset)
}
