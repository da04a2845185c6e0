//! 置換表のメモリ確保
//!
//! ゼロ初期化済みの領域を確保する。確保に失敗した場合は panic せず `None` を返し、
//! 縮小リトライは呼び出し側（`TranspositionTable`）が行う。
//! Linux では 2MiB 単位のテーブルを Large Pages 境界に揃え、`MADV_HUGEPAGE` を要求する。

use std::alloc::{Layout, alloc_zeroed, dealloc};
use std::ptr::NonNull;

/// Large Pages のページサイズ（Linux THP）
#[cfg(any(target_os = "linux", target_os = "android"))]
const LARGE_PAGE_SIZE: usize = 2 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AllocKind {
    #[cfg_attr(not(any(target_os = "linux", target_os = "android")), allow(dead_code))]
    LargePages,
    /// Large Pages 未対応環境、または 2MiB 未満のテーブルで使用
    Regular,
}

pub(super) struct Allocation {
    ptr: NonNull<u8>,
    layout: Layout,
    kind: AllocKind,
}

impl Allocation {
    /// ゼロ初期化された `size` バイトを確保する（失敗時は None）
    pub(super) fn try_allocate(size: usize, alignment: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }

        let (alignment, kind) = page_alignment(size, alignment);
        let layout = Layout::from_size_align(size, alignment).ok()?.pad_to_align();

        // SAFETY: layout のサイズは 0 より大きい
        let ptr = NonNull::new(unsafe { alloc_zeroed(layout) })?;

        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            if kind == AllocKind::LargePages {
                // SAFETY: ptr は layout.size() バイトの確保済み領域の先頭
                let result = unsafe {
                    libc::madvise(ptr.as_ptr() as *mut _, layout.size(), libc::MADV_HUGEPAGE)
                };
                // madvise失敗は動作に影響しないが、パフォーマンスに影響する可能性がある
                if result != 0 {
                    log::debug!("madvise MADV_HUGEPAGE failed for {} bytes", layout.size());
                }
            }
        }

        Some(Allocation { ptr, layout, kind })
    }

    pub(super) fn ptr(&self) -> NonNull<u8> {
        self.ptr
    }

    pub(super) fn size(&self) -> usize {
        self.layout.size()
    }

    pub(super) fn kind(&self) -> AllocKind {
        self.kind
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn page_alignment(size: usize, alignment: usize) -> (usize, AllocKind) {
    if size >= LARGE_PAGE_SIZE && size % LARGE_PAGE_SIZE == 0 {
        (alignment.max(LARGE_PAGE_SIZE), AllocKind::LargePages)
    } else {
        (alignment, AllocKind::Regular)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn page_alignment(_size: usize, alignment: usize) -> (usize, AllocKind) {
    (alignment, AllocKind::Regular)
}

impl Drop for Allocation {
    fn drop(&mut self) {
        // SAFETY: ptr と layout は try_allocate で確保したもの
        unsafe {
            dealloc(self.ptr.as_ptr(), self.layout);
        }
    }
}

// SAFETY: Allocation owns raw memory for the TT; element access goes through atomics.
unsafe impl Send for Allocation {}
unsafe impl Sync for Allocation {}
