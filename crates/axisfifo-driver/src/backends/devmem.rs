//! Hardware bus via /dev/mem
//!
//! Maps the physical CSR window of the FIFO bridge into the process and
//! implements [`CsrBus`] with volatile 32-bit accesses. Volatility is
//! the contract here: the compiler must not elide, merge or reorder
//! register accesses, because reads can observe hardware-updated state
//! and writes have side effects in the bridge.

// MMIO pointer casts are exact by construction; registers live inside
// the bounds-checked window.
#![allow(clippy::cast_ptr_alignment)]

use crate::bus::CsrBus;
use crate::error::{FifoError, Result};
use axisfifo_chip::regs;
use rustix::mm::{mmap, munmap, MapFlags, ProtFlags};
use rustix::param::page_size;
use std::fs::{File, OpenOptions};
use std::os::unix::io::AsFd;
use std::ptr::NonNull;

const MEM_DEVICE: &str = "/dev/mem";

/// Memory-mapped CSR window of the FIFO bridge.
#[derive(Debug)]
pub struct DevMemBus {
    ptr: NonNull<u8>,
    /// Offset of the CSR base inside the page-aligned mapping.
    delta: usize,
    map_len: usize,
    base: usize,
    _file: File,
}

impl DevMemBus {
    /// Map the CSR window at physical address `base`.
    ///
    /// The mapping is page-aligned down from `base`; accessor offsets
    /// remain relative to `base` itself.
    ///
    /// # Errors
    ///
    /// Returns error if `/dev/mem` cannot be opened (typically requires
    /// root) or the mmap fails.
    pub fn map(base: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(MEM_DEVICE)
            .map_err(|e| FifoError::window_unavailable(MEM_DEVICE, e.to_string()))?;

        let page = page_size();
        let map_base = base & !(page - 1);
        let delta = base - map_base;
        let map_len = delta + regs::CSR_WINDOW;

        tracing::debug!("Mapping CSR window: base={base:#x} map_base={map_base:#x} len={map_len:#x}");

        // SAFETY: mmap of device memory. Preconditions:
        // - file descriptor just opened on /dev/mem, kept alive in self
        // - map_len is non-zero (delta + CSR_WINDOW)
        // - MAP_SHARED so writes reach the bridge; PROT_READ|WRITE for MMIO
        // - offset is page-aligned by construction
        // - region unmapped exactly once in Drop
        let ptr = unsafe {
            let addr = mmap(
                std::ptr::null_mut(),
                map_len,
                ProtFlags::READ | ProtFlags::WRITE,
                MapFlags::SHARED,
                file.as_fd(),
                map_base as u64,
            )
            .map_err(|e| FifoError::map_failed(base, e.to_string()))?;

            NonNull::new(addr.cast::<u8>())
                .ok_or_else(|| FifoError::map_failed(base, "mmap returned null".to_string()))?
        };

        tracing::info!("Mapped CSR window at {base:#x} ({:#x} bytes)", regs::CSR_WINDOW);

        Ok(Self {
            ptr,
            delta,
            map_len,
            base,
            _file: file,
        })
    }

    /// Physical base address of the CSR block.
    pub const fn base(&self) -> usize {
        self.base
    }
}

impl CsrBus for DevMemBus {
    fn read32(&self, offset: usize) -> u32 {
        assert!(offset + 4 <= regs::CSR_WINDOW, "register offset out of bounds");
        // SAFETY: Volatile read of a mapped hardware register.
        // - ptr valid for map_len bytes (successful mmap, held until Drop)
        // - delta + offset + 4 <= map_len by the assert above
        // - read_volatile required: the bridge can change the value
        let value = unsafe {
            self.ptr
                .as_ptr()
                .add(self.delta + offset)
                .cast::<u32>()
                .read_volatile()
        };
        tracing::trace!("csr read  @ {offset:#04x} = {value:#010x}");
        value
    }

    fn write32(&mut self, offset: usize, value: u32) {
        assert!(offset + 4 <= regs::CSR_WINDOW, "register offset out of bounds");
        tracing::trace!("csr write @ {offset:#04x} = {value:#010x}");
        // SAFETY: Volatile write to a mapped hardware register.
        // - ptr valid for map_len bytes; bounds asserted above
        // - write_volatile required: writes have side effects in the bridge
        unsafe {
            self.ptr
                .as_ptr()
                .add(self.delta + offset)
                .cast::<u32>()
                .write_volatile(value);
        }
    }

    fn window(&self) -> usize {
        regs::CSR_WINDOW
    }
}

impl Drop for DevMemBus {
    fn drop(&mut self) {
        // SAFETY: ptr/map_len are exactly what mmap returned in map();
        // Drop runs at most once and no accessor outlives self.
        unsafe {
            if let Err(e) = munmap(self.ptr.as_ptr().cast(), self.map_len) {
                tracing::error!("munmap failed during drop: {e}");
            }
        }
        tracing::debug!("Unmapped CSR window at {:#x}", self.base);
    }
}

// SAFETY: DevMemBus owns its mapping exclusively; moving it between
// threads does not invalidate the mapping and the backing fd stays open.
unsafe impl Send for DevMemBus {}
