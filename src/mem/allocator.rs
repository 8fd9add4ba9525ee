//! 片上堆分配器
//!
//! 任务入口闭包（即每任务的参数记录）经由 `Box` 从这里分配，
//! 对应原始固件里 `pvPortMalloc` 承担的角色。堆从一块静态缓冲区
//! 划出，大小由 [`crate::config::HEAP_SIZE`] 决定。

use crate::config::HEAP_SIZE;
use core::mem::MaybeUninit;
use embedded_alloc::Heap;

// 静态分配堆内存
static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];

// 全局堆分配器
#[global_allocator]
static HEAP: Heap = Heap::empty();

/// 初始化堆分配器
///
/// 必须在第一次任务创建之前调用，且只能调用一次。
pub fn init_heap() {
    unsafe {
        let heap_start = core::ptr::addr_of_mut!(HEAP_MEM).cast::<u8>() as usize;
        HEAP.init(heap_start, HEAP_SIZE);
    }
}
